//! Client area boundary. There is no backend yet: the pages talk to a
//! [`ClientPortal`], and the shipped implementation is simulated.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortalError {
    #[error("E-mail ou senha incorretos.")]
    InvalidCredentials,
    #[error("Informe um e-mail válido.")]
    InvalidEmail,
}

/// Loose shape check: something before the `@`, a dot somewhere after it.
pub fn looks_like_email(address: &str) -> bool {
    match address.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[allow(async_fn_in_trait)]
pub trait ClientPortal {
    async fn login(&self, credentials: &Credentials) -> Result<(), PortalError>;
    async fn recover_password(&self, email: &str) -> Result<(), PortalError>;
}

#[allow(async_fn_in_trait)]
pub trait NewsletterSignup {
    async fn subscribe(&self, email: &str) -> Result<(), PortalError>;
}

/// Stand-in until the client area exists: waits a moment, then login is
/// always refused and every other request succeeds for a well-formed address.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedPortal {
    pub delay_ms: u32,
}

impl Default for SimulatedPortal {
    fn default() -> Self {
        Self {
            delay_ms: config::SIMULATED_DELAY_MS,
        }
    }
}

impl SimulatedPortal {
    async fn pause(&self) {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
    }
}

impl ClientPortal for SimulatedPortal {
    async fn login(&self, credentials: &Credentials) -> Result<(), PortalError> {
        info!("simulated login for {}", credentials.email);
        self.pause().await;
        Err(PortalError::InvalidCredentials)
    }

    async fn recover_password(&self, email: &str) -> Result<(), PortalError> {
        info!("simulated password recovery for {}", email);
        self.pause().await;
        if !looks_like_email(email) {
            return Err(PortalError::InvalidEmail);
        }
        Ok(())
    }
}

impl NewsletterSignup for SimulatedPortal {
    async fn subscribe(&self, email: &str) -> Result<(), PortalError> {
        info!("simulated newsletter signup for {}", email);
        self.pause().await;
        if !looks_like_email(email) {
            return Err(PortalError::InvalidEmail);
        }
        Ok(())
    }
}

/// Form state shared by the login, recovery and newsletter forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthFormState {
    #[default]
    Idle,
    Pending,
    Done(String),
    Failed(String),
}

impl AuthFormState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AuthFormState::Pending)
    }

    pub fn settle(result: Result<(), PortalError>, success_message: &str) -> Self {
        match result {
            Ok(()) => AuthFormState::Done(success_message.to_string()),
            Err(e) => AuthFormState::Failed(e.to_string()),
        }
    }
}

/// Runs `request` unless `guard` says one is already pending, reporting each
/// state. `guard` outlives renders, so two submits in the same frame still
/// see each other. Returns `None` when the call was skipped.
pub async fn run_request<Fut, F>(
    guard: &RefCell<AuthFormState>,
    on_change: F,
    request: Fut,
    success_message: &str,
) -> Option<AuthFormState>
where
    Fut: std::future::Future<Output = Result<(), PortalError>>,
    F: Fn(AuthFormState),
{
    if guard.borrow().is_pending() {
        debug!("request ignored, one is already pending");
        return None;
    }
    guard.replace(AuthFormState::Pending);
    on_change(AuthFormState::Pending);

    let settled = AuthFormState::settle(request.await, success_message);
    guard.replace(settled.clone());
    on_change(settled.clone());
    Some(settled)
}
