use sdk::cosmwasm_std::Event;

use crate::batch::{Batch, Emitter};

/// The messages and events a handler produces
#[must_use]
#[derive(Default)]
#[cfg_attr(
    any(debug_assertions, test, feature = "testing"),
    derive(Debug, PartialEq, Eq)
)]
pub struct Response {
    pub(crate) messages: Batch,
    pub(crate) events: Vec<Event>,
}

impl Response {
    pub fn messages_only(messages: Batch) -> Self {
        Self {
            messages,
            events: vec![],
        }
    }

    pub fn messages_with_event(messages: Batch, event: Emitter) -> Self {
        Self {
            messages,
            events: vec![event.into()],
        }
    }
}

impl From<Batch> for Response {
    fn from(messages: Batch) -> Self {
        Self::messages_only(messages)
    }
}

impl From<Emitter> for Response {
    fn from(event: Emitter) -> Self {
        Self::messages_with_event(Batch::default(), event)
    }
}
