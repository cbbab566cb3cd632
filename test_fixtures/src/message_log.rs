// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell, rc::Rc};

use r3bl_iochannel::{Category, IoChannel, SubscriberId, Verbosity};

/// One message as an "all" subscriber saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedMessage {
    pub text: String,
    pub verbosity: Verbosity,
    pub category: Category,
}

/// Records every message a channel transmits. Clones share the same log.
///
/// ```
/// use r3bl_iochannel::{IoChannel, IoSpecial, ioc};
/// use r3bl_test_fixtures::MessageLog;
///
/// let mut channel = IoChannel::new();
/// let log = MessageLog::attach(&mut channel);
/// ioc!(channel, 42, IoSpecial::End);
/// assert_eq!(log.texts(), vec!["42\n".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    pub messages: Rc<RefCell<Vec<LoggedMessage>>>,
    pub id: Option<SubscriberId>,
}

impl MessageLog {
    /// Subscribe a new log to every message of `channel`.
    pub fn attach(channel: &mut IoChannel) -> Self {
        let mut it = Self::default();
        let messages = it.messages.clone();
        let id = channel.subscribe_all(move |text, verbosity, category| {
            messages.borrow_mut().push(LoggedMessage {
                text: text.to_string(),
                verbosity,
                category,
            });
        });
        it.id = Some(id);
        it
    }

    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.messages.borrow().iter().map(|it| it.text.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.messages.borrow().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn clear(&self) { self.messages.borrow_mut().clear(); }
}
