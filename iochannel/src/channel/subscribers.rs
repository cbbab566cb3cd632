// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Consumers of transmitted messages. There are three kinds, one per axis:
//!
//! | kind      | keyed by      | called with                  |
//! |-----------|---------------|------------------------------|
//! | verbosity | [`Verbosity`] | `(message, category)`        |
//! | category  | [`Category`]  | `(message, verbosity)`       |
//! | all       | nothing       | `(message, verbosity, category)` |
//!
//! A verbosity subscriber registered at level `L` sees every message whose verbosity
//! is at most `L`. So a [`Verbosity::Tmi`] subscriber sees everything, and a
//! [`Verbosity::Quiet`] subscriber only sees quiet messages.
//!
//! Within one kind and level, subscribers are called in registration order.

use std::fmt::{Debug, Display, Formatter, Result};

use strum::IntoEnumIterator;

use crate::{Category, InlineVec, Verbosity};

/// Opaque handle returned on registration, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl Display for SubscriberId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "#{}", self.0) }
}

pub type VerbositySubscriberFn = Box<dyn FnMut(&str, Category)>;
pub type CategorySubscriberFn = Box<dyn FnMut(&str, Verbosity)>;
pub type AllSubscriberFn = Box<dyn FnMut(&str, Verbosity, Category)>;

struct Subscriber<K, F> {
    id: SubscriberId,
    key: K,
    callback: F,
}

#[derive(Default)]
pub struct SubscriberRegistry {
    last_id: u64,
    by_verbosity: InlineVec<Subscriber<Verbosity, VerbositySubscriberFn>>,
    by_category: InlineVec<Subscriber<Category, CategorySubscriberFn>>,
    all: InlineVec<Subscriber<(), AllSubscriberFn>>,
}

impl SubscriberRegistry {
    fn next_id(&mut self) -> SubscriberId {
        self.last_id += 1;
        SubscriberId(self.last_id)
    }

    pub fn add_verbosity(
        &mut self,
        level: Verbosity,
        callback: VerbositySubscriberFn,
    ) -> SubscriberId {
        let id = self.next_id();
        self.by_verbosity.push(Subscriber {
            id,
            key: level,
            callback,
        });
        id
    }

    pub fn add_category(
        &mut self,
        category: Category,
        callback: CategorySubscriberFn,
    ) -> SubscriberId {
        let id = self.next_id();
        self.by_category.push(Subscriber {
            id,
            key: category,
            callback,
        });
        id
    }

    pub fn add_all(&mut self, callback: AllSubscriberFn) -> SubscriberId {
        let id = self.next_id();
        self.all.push(Subscriber {
            id,
            key: (),
            callback,
        });
        id
    }

    /// Returns `false` if no subscriber has this handle.
    pub fn remove(&mut self, id: SubscriberId) -> bool {
        let before = self.len();
        self.by_verbosity.retain(|it| it.id != id);
        self.by_category.retain(|it| it.id != id);
        self.all.retain(|it| it.id != id);
        self.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_verbosity.len() + self.by_category.len() + self.all.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Call every subscriber that matches, in order: verbosity levels from `verbosity`
    /// up to [`Verbosity::Tmi`], then `category`, then "all". Returns the number of
    /// calls made.
    pub fn dispatch(&mut self, message: &str, verbosity: Verbosity, category: Category) -> usize {
        let mut calls = 0;

        for level in Verbosity::iter().filter(|level| verbosity <= *level) {
            for it in self.by_verbosity.iter_mut().filter(|it| it.key == level) {
                (it.callback)(message, category);
                calls += 1;
            }
        }

        for it in self.by_category.iter_mut().filter(|it| it.key == category) {
            (it.callback)(message, verbosity);
            calls += 1;
        }

        for it in &mut self.all {
            (it.callback)(message, verbosity, category);
            calls += 1;
        }

        calls
    }
}

impl Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("SubscriberRegistry")
            .field("by_verbosity", &self.by_verbosity.len())
            .field("by_category", &self.by_category.len())
            .field("all", &self.all.len())
            .finish()
    }
}
