//! What happens after the relay accepts the form: a short pause, the jump to
//! WhatsApp with the visitor's own words, then (if the browser kept us on the
//! page) a clean form and an automatic close.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};

use crate::config;
use crate::contact::submission::{AttemptId, ContactFormFields, SubmissionMachine};
use crate::whatsapp::{contact_message, navigate, whatsapp_link};

#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, millis: u32);
}

pub trait Navigator {
    fn navigate(&self, url: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserTimers;

impl Sleeper for BrowserTimers {
    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        navigate(url);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FollowUp {
    /// Redirected, then reset the form and closed the modal.
    Closed,
    /// The visitor closed or resubmitted first; the rest was skipped.
    Superseded,
}

/// Deep link carrying the submitted name and message.
pub fn success_link(submitted: &ContactFormFields) -> String {
    let text = contact_message(&submitted.name, &submitted.message);
    whatsapp_link(config::WHATSAPP_NUMBER, Some(&text))
}

/// Runs the post-success sequence for `attempt`. Each step first checks that
/// the attempt is still current, so a manual close cancels what is left.
pub async fn follow_up_success<T, N, C, X>(
    machine: &RefCell<SubmissionMachine>,
    attempt: AttemptId,
    submitted: &ContactFormFields,
    timers: &T,
    navigator: &N,
    clear_fields: C,
    close: X,
) -> FollowUp
where
    T: Sleeper,
    N: Navigator,
    C: Fn(),
    X: Fn(),
{
    timers.sleep(config::REDIRECT_DELAY_MS).await;
    if !machine.borrow().is_current(attempt) {
        debug!("form closed before the redirect");
        return FollowUp::Superseded;
    }
    let link = success_link(submitted);
    info!("redirecting to {}", link);
    navigator.navigate(&link);

    // Still here if the browser blocked the navigation
    clear_fields();
    timers.sleep(config::AUTO_CLOSE_DELAY_MS).await;
    if !machine.borrow_mut().reset_attempt(attempt) {
        debug!("form already closed, skipping auto-close");
        return FollowUp::Superseded;
    }
    close();
    FollowUp::Closed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::client::tests::StubSubmitter;
    use crate::contact::submission::{run_submission, SubmissionState};
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Returns at once, remembering each requested delay. `on_sleep` lets a
    /// test act while the timer would be running.
    struct RecordingTimers<'a> {
        slept: RefCell<Vec<u32>>,
        on_sleep: Box<dyn Fn(usize) + 'a>,
    }

    impl<'a> RecordingTimers<'a> {
        fn new() -> Self {
            Self::acting(|_| {})
        }

        fn acting(on_sleep: impl Fn(usize) + 'a) -> Self {
            Self {
                slept: RefCell::new(Vec::new()),
                on_sleep: Box::new(on_sleep),
            }
        }
    }

    impl Sleeper for RecordingTimers<'_> {
        async fn sleep(&self, millis: u32) {
            let nth = {
                let mut slept = self.slept.borrow_mut();
                slept.push(millis);
                slept.len()
            };
            (self.on_sleep)(nth);
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.visited.borrow_mut().push(url.to_string());
        }
    }

    fn submitted() -> ContactFormFields {
        ContactFormFields {
            name: "Beatriz Rocha".into(),
            email: "beatriz@rocha.com.br".into(),
            message: "Quero organizar o fluxo de caixa.".into(),
        }
    }

    fn successful_attempt(machine: &RefCell<SubmissionMachine>) -> AttemptId {
        let stub = StubSubmitter::replying(r#"{"success": true}"#);
        block_on(run_submission(machine, &stub, &submitted(), |_| {}))
            .succeeded()
            .unwrap()
    }

    #[test]
    fn redirects_with_the_submitted_name_then_resets_and_closes() {
        let machine = RefCell::new(SubmissionMachine::default());
        let attempt = successful_attempt(&machine);
        let timers = RecordingTimers::new();
        let navigator = RecordingNavigator::default();
        let cleared = Cell::new(0);
        let closed = Cell::new(0);

        let outcome = block_on(follow_up_success(
            &machine,
            attempt,
            &submitted(),
            &timers,
            &navigator,
            || cleared.set(cleared.get() + 1),
            || closed.set(closed.get() + 1),
        ));

        assert_eq!(outcome, FollowUp::Closed);
        assert_eq!(
            *timers.slept.borrow(),
            [config::REDIRECT_DELAY_MS, config::AUTO_CLOSE_DELAY_MS]
        );
        let visited = navigator.visited.borrow();
        assert_eq!(visited.len(), 1);
        assert_eq!(
            visited[0],
            whatsapp_link(
                config::WHATSAPP_NUMBER,
                Some(&contact_message("Beatriz Rocha", "Quero organizar o fluxo de caixa."))
            )
        );
        assert!(visited[0].contains("Beatriz%20Rocha"));
        assert_eq!(cleared.get(), 1);
        assert_eq!(closed.get(), 1);
        assert_eq!(machine.borrow().state(), &SubmissionState::Idle);
    }

    #[test]
    fn closing_during_the_redirect_delay_cancels_everything() {
        let machine = RefCell::new(SubmissionMachine::default());
        let attempt = successful_attempt(&machine);
        let timers = RecordingTimers::acting(|_| machine.borrow_mut().reset());
        let navigator = RecordingNavigator::default();
        let closed = Cell::new(false);

        let outcome = block_on(follow_up_success(
            &machine,
            attempt,
            &submitted(),
            &timers,
            &navigator,
            || {},
            || closed.set(true),
        ));

        assert_eq!(outcome, FollowUp::Superseded);
        assert!(navigator.visited.borrow().is_empty());
        assert!(!closed.get());
    }

    #[test]
    fn late_auto_close_leaves_a_newer_submission_alone() {
        let machine = RefCell::new(SubmissionMachine::default());
        let attempt = successful_attempt(&machine);
        // During the auto-close wait the visitor closes, reopens and submits again
        let timers = RecordingTimers::acting(|nth| {
            if nth == 2 {
                let mut machine = machine.borrow_mut();
                machine.reset();
                let _ = machine.begin();
            }
        });
        let navigator = RecordingNavigator::default();
        let closed = Cell::new(false);

        let outcome = block_on(follow_up_success(
            &machine,
            attempt,
            &submitted(),
            &timers,
            &navigator,
            || {},
            || closed.set(true),
        ));

        assert_eq!(outcome, FollowUp::Superseded);
        assert_eq!(navigator.visited.borrow().len(), 1);
        assert!(!closed.get());
        assert_eq!(machine.borrow().state(), &SubmissionState::Submitting);
    }
}
