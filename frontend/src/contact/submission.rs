//! Submission state machine of the contact modal.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Success
//!   ▲                  │                 │
//!   │                  └──err──▶ Error ──┤ (submit again ▶ Submitting)
//!   └──────────────── reset ─────────────┘
//! ```

use std::cell::RefCell;

use log::{debug, info};

use crate::contact::client::{submit_contact, ContactError, FormSubmitter};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionEvent {
    Submit,
    Succeeded,
    Failed(String),
    Reset,
}

impl SubmissionState {
    /// `None` when `event` is not a legal transition from `self`.
    pub fn next(&self, event: SubmissionEvent) -> Option<SubmissionState> {
        use SubmissionEvent as E;
        use SubmissionState as S;

        match (self, event) {
            (_, E::Reset) => Some(S::Idle),
            (S::Submitting, E::Submit) => None,
            (_, E::Submit) => Some(S::Submitting),
            (S::Submitting, E::Succeeded) => Some(S::Success),
            (S::Submitting, E::Failed(message)) => Some(S::Error(message)),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one submit. A manual close or a newer submit makes it stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptId(u64);

/// Holds the displayed state and applies only legal transitions.
///
/// The in-flight flag lives apart from the displayed state: resetting the
/// form while a request is on the wire clears the display but keeps the
/// guard until that request comes back.
#[derive(Debug, Default)]
pub struct SubmissionMachine {
    state: SubmissionState,
    in_flight: bool,
    attempt: u64,
}

impl SubmissionMachine {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// `true` while nothing has reset or resubmitted since `attempt` began.
    pub fn is_current(&self, attempt: AttemptId) -> bool {
        self.attempt == attempt.0
    }

    fn fire(&mut self, event: SubmissionEvent) -> bool {
        match self.state.next(event.clone()) {
            Some(next) => {
                debug!("submission {:?} --{:?}--> {:?}", self.state, event, next);
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// `None` (and nothing changes) while a request is on the wire.
    pub fn begin(&mut self) -> Option<AttemptId> {
        if self.in_flight || !self.fire(SubmissionEvent::Submit) {
            return None;
        }
        self.in_flight = true;
        self.attempt += 1;
        Some(AttemptId(self.attempt))
    }

    /// Releases the guard. The outcome is only shown when `attempt` is still
    /// current; returns `None` for a stale one.
    pub fn finish(
        &mut self,
        attempt: AttemptId,
        result: Result<(), ContactError>,
    ) -> Option<&SubmissionState> {
        self.in_flight = false;
        if !self.is_current(attempt) {
            debug!("dropping the reply of a closed form: {:?}", result);
            return None;
        }
        let event = match result {
            Ok(()) => SubmissionEvent::Succeeded,
            Err(e) => SubmissionEvent::Failed(e.to_string()),
        };
        self.fire(event);
        Some(&self.state)
    }

    pub fn reset(&mut self) {
        self.attempt += 1;
        self.fire(SubmissionEvent::Reset);
    }

    /// Resets only when `attempt` is still current. Used by delayed follow-ups
    /// so a late timer never clears a newer attempt.
    pub fn reset_attempt(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.reset();
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAttempt {
    /// Another submission was already in flight; nothing was sent.
    Skipped,
    /// The form was reset before the reply arrived; nothing was shown.
    Abandoned,
    Completed(AttemptId, SubmissionState),
}

impl SubmitAttempt {
    pub fn succeeded(&self) -> Option<AttemptId> {
        match self {
            SubmitAttempt::Completed(attempt, SubmissionState::Success) => Some(*attempt),
            _ => None,
        }
    }
}

/// Runs one submission through `machine`, reporting every state change to
/// `on_change`. The `RefCell` is never borrowed across the network await.
pub async fn run_submission<S, F>(
    machine: &RefCell<SubmissionMachine>,
    submitter: &S,
    fields: &ContactFormFields,
    on_change: F,
) -> SubmitAttempt
where
    S: FormSubmitter,
    F: Fn(&SubmissionState),
{
    let begun = machine.borrow_mut().begin();
    let Some(attempt) = begun else {
        debug!("submit ignored, already in flight");
        return SubmitAttempt::Skipped;
    };
    on_change(machine.borrow().state());
    info!("sending contact form");

    let result = submit_contact(submitter, fields).await;

    let settled = machine.borrow_mut().finish(attempt, result).cloned();
    match settled {
        Some(state) => {
            on_change(&state);
            SubmitAttempt::Completed(attempt, state)
        }
        None => SubmitAttempt::Abandoned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::client::tests::StubSubmitter;
    use crate::contact::client::{ContactSubmission, SubmitResponse, CONNECTION_ERROR};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn fields() -> ContactFormFields {
        ContactFormFields {
            name: "Rafael Lima".into(),
            email: "rafael@lima.com".into(),
            message: "Preciso de um diagnóstico financeiro.".into(),
        }
    }

    #[test]
    fn legal_transitions() {
        use SubmissionEvent as E;
        use SubmissionState as S;

        assert_eq!(S::Idle.next(E::Submit), Some(S::Submitting));
        assert_eq!(S::Submitting.next(E::Succeeded), Some(S::Success));
        assert_eq!(S::Submitting.next(E::Failed("x".into())), Some(S::Error("x".into())));
        assert_eq!(S::Success.next(E::Submit), Some(S::Submitting));
        assert_eq!(S::Error("x".into()).next(E::Submit), Some(S::Submitting));
        for state in [S::Idle, S::Submitting, S::Success, S::Error("x".into())] {
            assert_eq!(state.next(E::Reset), Some(S::Idle));
        }
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        use SubmissionEvent as E;
        use SubmissionState as S;

        assert_eq!(S::Submitting.next(E::Submit), None);
        assert_eq!(S::Idle.next(E::Succeeded), None);
        assert_eq!(S::Idle.next(E::Failed("x".into())), None);
        assert_eq!(S::Success.next(E::Failed("x".into())), None);
    }

    #[test]
    fn success_reply_walks_submitting_then_success() {
        let machine = RefCell::new(SubmissionMachine::default());
        let stub = StubSubmitter::replying(r#"{"success": true}"#);
        let seen = RefCell::new(Vec::new());

        let attempt = block_on(run_submission(&machine, &stub, &fields(), |s| {
            seen.borrow_mut().push(s.clone())
        }));

        assert!(attempt.succeeded().is_some());
        assert_eq!(*seen.borrow(), [SubmissionState::Submitting, SubmissionState::Success]);
    }

    #[test]
    fn rejection_lands_in_error_with_the_relay_text() {
        let machine = RefCell::new(SubmissionMachine::default());
        let stub = StubSubmitter::replying(r#"{"success": false, "message": "quota exceeded"}"#);

        let attempt = block_on(run_submission(&machine, &stub, &fields(), |_| {}));

        assert!(matches!(
            attempt,
            SubmitAttempt::Completed(_, SubmissionState::Error(ref m)) if m == "quota exceeded"
        ));
        assert_eq!(machine.borrow().state().error_message(), Some("quota exceeded"));
    }

    #[test]
    fn transport_failure_lands_in_error_with_the_connection_text() {
        let machine = RefCell::new(SubmissionMachine::default());
        let stub = StubSubmitter::failing();

        block_on(run_submission(&machine, &stub, &fields(), |_| {}));

        assert_eq!(
            machine.borrow().state(),
            &SubmissionState::Error(CONNECTION_ERROR.to_string())
        );
    }

    #[test]
    fn error_state_accepts_a_manual_resubmit() {
        let machine = RefCell::new(SubmissionMachine::default());
        block_on(run_submission(&machine, &StubSubmitter::failing(), &fields(), |_| {}));

        let stub = StubSubmitter::replying(r#"{"success": true}"#);
        let attempt = block_on(run_submission(&machine, &stub, &fields(), |_| {}));

        assert!(attempt.succeeded().is_some());
    }

    /// Stays pending until the test releases it.
    struct HeldSubmitter {
        calls: Cell<usize>,
        release: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl FormSubmitter for HeldSubmitter {
        async fn submit(&self, _: &ContactSubmission) -> Result<SubmitResponse, ContactError> {
            self.calls.set(self.calls.get() + 1);
            let release = self.release.borrow_mut().take();
            if let Some(release) = release {
                let _ = release.await;
            }
            Ok(SubmitResponse {
                success: true,
                message: None,
            })
        }
    }

    #[test]
    fn second_submit_while_in_flight_sends_nothing() {
        let (tx, rx) = oneshot::channel();
        let submitter = HeldSubmitter {
            calls: Cell::new(0),
            release: RefCell::new(Some(rx)),
        };
        let machine = RefCell::new(SubmissionMachine::default());
        let fields = fields();

        let (first, second) = block_on(async {
            futures::join!(run_submission(&machine, &submitter, &fields, |_| {}), async {
                let second = run_submission(&machine, &submitter, &fields, |_| {}).await;
                let _ = tx.send(());
                second
            })
        });

        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(second, SubmitAttempt::Skipped);
        assert!(first.succeeded().is_some());
    }

    #[test]
    fn closing_mid_flight_keeps_the_guard_until_the_reply() {
        let (tx, rx) = oneshot::channel();
        let submitter = HeldSubmitter {
            calls: Cell::new(0),
            release: RefCell::new(Some(rx)),
        };
        let machine = RefCell::new(SubmissionMachine::default());
        let fields = fields();

        let (first, second) = block_on(async {
            futures::join!(run_submission(&machine, &submitter, &fields, |_| {}), async {
                // modal closed and reopened while the first request is pending
                machine.borrow_mut().reset();
                let second = run_submission(&machine, &submitter, &fields, |_| {}).await;
                let _ = tx.send(());
                second
            })
        });

        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(second, SubmitAttempt::Skipped);
        assert_eq!(first, SubmitAttempt::Abandoned);
        assert_eq!(machine.borrow().state(), &SubmissionState::Idle);
        assert!(!machine.borrow().is_in_flight());

        let again = block_on(run_submission(&machine, &submitter, &fields, |_| {}));
        assert!(again.succeeded().is_some());
        assert_eq!(submitter.calls.get(), 2);
    }

    #[test]
    fn stale_attempt_cannot_reset_a_newer_one() {
        let mut machine = SubmissionMachine::default();
        let old = machine.begin().unwrap();
        machine.finish(old, Ok(()));
        machine.reset();

        let current = machine.begin().unwrap();
        assert!(!machine.reset_attempt(old));
        assert_eq!(machine.state(), &SubmissionState::Submitting);
        assert!(machine.is_current(current));
        assert_eq!(machine.finish(current, Ok(())), Some(&SubmissionState::Success));
        assert!(machine.reset_attempt(current));
        assert_eq!(machine.state(), &SubmissionState::Idle);
    }

    #[test]
    fn reset_returns_to_idle_from_anywhere() {
        let mut machine = SubmissionMachine::default();
        assert!(machine.begin().is_some());
        assert!(machine.begin().is_none());
        machine.reset();
        assert_eq!(machine.state(), &SubmissionState::Idle);
        machine.reset();
        assert_eq!(machine.state(), &SubmissionState::Idle);
    }
}
