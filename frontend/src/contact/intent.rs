//! Page-wide contact intent: whether the contact modal is open and which
//! message it is pre-filled with.
//!
//! State lives in a reducer owned by [`ContactIntentProvider`] near the root
//! of the tree; components reach it with [`use_contact_intent`]. The only
//! mutations are [`ContactIntentAction::Open`] and
//! [`ContactIntentAction::Close`].

use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::config;
use crate::contact::scroll_lock::{BodyScrollSurface, ScrollLock};

#[derive(Clone, Debug, PartialEq)]
pub struct ContactIntent {
    pub is_open: bool,
    /// Never empty.
    pub default_message: String,
}

impl Default for ContactIntent {
    fn default() -> Self {
        Self {
            is_open: false,
            default_message: config::DEFAULT_CONTACT_MESSAGE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactIntentAction {
    /// `None` (or a blank message) keeps the current default message.
    Open(Option<String>),
    Close,
}

impl ContactIntent {
    pub fn apply(&self, action: ContactIntentAction) -> Self {
        match action {
            ContactIntentAction::Open(message) => Self {
                is_open: true,
                default_message: message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| self.default_message.clone()),
            },
            ContactIntentAction::Close => Self {
                is_open: false,
                default_message: self.default_message.clone(),
            },
        }
    }
}

impl Reducible for ContactIntent {
    type Action = ContactIntentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// What consumers of the context get: read access plus the two operations.
#[derive(Clone, PartialEq)]
pub struct ContactIntentHandle {
    inner: UseReducerHandle<ContactIntent>,
}

impl ContactIntentHandle {
    pub fn open(&self, message: Option<String>) {
        info!("contact modal requested");
        self.inner.dispatch(ContactIntentAction::Open(message));
    }

    pub fn close(&self) {
        self.inner.dispatch(ContactIntentAction::Close);
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open
    }

    pub fn default_message(&self) -> String {
        self.inner.default_message.clone()
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactIntentProviderProps {
    pub children: Children,
}

#[function_component(ContactIntentProvider)]
pub fn contact_intent_provider(props: &ContactIntentProviderProps) -> Html {
    let intent = use_reducer(ContactIntent::default);
    let is_open = intent.is_open;

    // The lock is held by the effect's teardown, so it is released when the
    // modal closes and also when the provider unmounts.
    use_effect_with_deps(
        move |is_open| {
            let lock = if *is_open {
                BodyScrollSurface::new().map(ScrollLock::acquire)
            } else {
                None
            };
            move || drop(lock)
        },
        is_open,
    );

    let handle = ContactIntentHandle { inner: intent };

    html! {
        <ContextProvider<ContactIntentHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<ContactIntentHandle>>
    }
}

#[hook]
pub fn use_contact_intent() -> ContactIntentHandle {
    use_context::<ContactIntentHandle>()
        .expect("use_contact_intent called outside ContactIntentProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(state: &ContactIntent, message: Option<&str>) -> ContactIntent {
        state.apply(ContactIntentAction::Open(message.map(str::to_string)))
    }

    #[test]
    fn starts_closed_with_the_default_message() {
        let state = ContactIntent::default();
        assert!(!state.is_open);
        assert_eq!(state.default_message, config::DEFAULT_CONTACT_MESSAGE);
    }

    #[test]
    fn open_with_message_overwrites_the_default() {
        let state = open(&ContactIntent::default(), Some("Quero falar sobre gestão financeira"));
        assert!(state.is_open);
        assert_eq!(state.default_message, "Quero falar sobre gestão financeira");
    }

    #[test]
    fn open_without_message_keeps_the_previous_one() {
        let first = open(&ContactIntent::default(), Some("Planejamento estratégico"));
        let closed = first.apply(ContactIntentAction::Close);
        let reopened = open(&closed, None);

        assert!(reopened.is_open);
        assert_eq!(reopened.default_message, "Planejamento estratégico");
    }

    #[test]
    fn blank_message_never_replaces_the_default() {
        let state = open(&ContactIntent::default(), Some("   "));
        assert_eq!(state.default_message, config::DEFAULT_CONTACT_MESSAGE);
        let state = open(&state, Some(""));
        assert_eq!(state.default_message, config::DEFAULT_CONTACT_MESSAGE);
    }

    #[test]
    fn close_is_idempotent() {
        let opened = open(&ContactIntent::default(), Some("Mentoria"));
        let once = opened.apply(ContactIntentAction::Close);
        let twice = once.apply(ContactIntentAction::Close);

        assert_eq!(once, twice);
        assert!(!twice.is_open);
        assert_eq!(twice.default_message, "Mentoria");
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(ContactIntent::default());
        let next = state.clone().reduce(ContactIntentAction::Close);
        assert!(Rc::ptr_eq(&state, &next));

        let opened = state.clone().reduce(ContactIntentAction::Open(None));
        assert!(!Rc::ptr_eq(&state, &opened));
        assert!(opened.is_open);
    }
}
