//! Client for the third-party form relay (web3forms) that forwards contact
//! requests by e-mail.

use gloo_net::http::Request;
use gloo_console::log;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::FormData;

use crate::config;
use crate::contact::submission::ContactFormFields;

pub const GENERIC_REJECTION: &str = "Não foi possível enviar sua mensagem. Tente novamente.";
pub const CONNECTION_ERROR: &str = "Erro de conexão. Verifique sua internet e tente novamente.";

/// Displayed as-is in the modal; transport detail is only logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("{0}")]
    Rejected(String),
    #[error("{}", CONNECTION_ERROR)]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
}

impl ContactSubmission {
    pub fn from_fields(fields: &ContactFormFields) -> Self {
        Self {
            access_key: config::web3forms_access_key().to_string(),
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            message: fields.message.trim().to_string(),
            subject: config::CONTACT_SUBJECT.to_string(),
        }
    }

    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("access_key", self.access_key.as_str()),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
            ("subject", self.subject.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[allow(async_fn_in_trait)]
pub trait FormSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitResponse, ContactError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Web3FormsClient {
    endpoint: String,
}

impl Default for Web3FormsClient {
    fn default() -> Self {
        Self {
            endpoint: config::WEB3FORMS_ENDPOINT.to_string(),
        }
    }
}

fn js_error(e: wasm_bindgen::JsValue) -> ContactError {
    ContactError::Transport(format!("{:?}", e))
}

impl FormSubmitter for Web3FormsClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitResponse, ContactError> {
        let form = FormData::new().map_err(js_error)?;
        for (key, value) in submission.form_fields() {
            form.append_with_str(key, value).map_err(js_error)?;
        }

        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .body(form)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        log!("form relay status:", response.status());
        response
            .json::<SubmitResponse>()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))
    }
}

/// Sends the form and folds the relay's answer into `Ok(())` or a
/// [`ContactError`].
pub async fn submit_contact<S: FormSubmitter>(
    submitter: &S,
    fields: &ContactFormFields,
) -> Result<(), ContactError> {
    let submission = ContactSubmission::from_fields(fields);
    let response = submitter.submit(&submission).await.map_err(|e| {
        warn!("contact submission failed: {:?}", e);
        e
    })?;

    if response.success {
        Ok(())
    } else {
        let reason = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_REJECTION.to_string());
        warn!("contact submission rejected: {}", reason);
        Err(ContactError::Rejected(reason))
    }
}
