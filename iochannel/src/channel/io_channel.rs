// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`IoChannel`] builds a message out of pushed values and tokens, and hands it to
//! subscribers when a flush marker says so.
//!
//! # Filtering
//!
//! Every push except verbosity tokens, category tokens, and flush markers is dropped
//! while the [`MessageFilter`] rejects the current verbosity and category. Modifier
//! tokens are dropped too, so a rejected message can't leak formatting into the next
//! one. Flush markers still run, but inject nothing while rejected.
//!
//! # Lazy attributes
//!
//! Color and attribute tokens only update [`TextAttributes`]. The SGR sequence is
//! written right before the next piece of content, once, however many tokens came
//! before it.

use std::{fmt::{Debug, Formatter},
          io::Write};

use crate::{BufTextStorage, Category, CategoryMask, ChannelConfig, ChannelInput,
            EchoCategory, EchoConfig, EchoMode, FormatState, IoChannelError, IoSpecial,
            MessageFilter, SubscriberId, SubscriberRegistry, TextAttributes, Verbosity};

/// Written to the process output when the last accepted category is muted.
pub const ALL_CATEGORIES_MUTED_WARNING: &str =
    "WARNING: All message categories have been turned off!\n";

pub struct IoChannel {
    pub(crate) buffer: BufTextStorage,
    pub(crate) format: FormatState,
    pub(crate) attributes: TextAttributes,
    pub(crate) filter: MessageFilter,
    subscribers: SubscriberRegistry,
    echo: EchoConfig,
    process_output: Box<dyn Write>,
}

impl Default for IoChannel {
    fn default() -> Self { Self::new() }
}

impl Debug for IoChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoChannel")
            .field("buffer", &self.buffer)
            .field("format", &self.format)
            .field("attributes", &self.attributes)
            .field("filter", &self.filter)
            .field("subscribers", &self.subscribers)
            .field("echo", &self.echo)
            .finish_non_exhaustive()
    }
}

impl IoChannel {
    /// A channel that accepts everything and doesn't echo.
    #[must_use]
    pub fn new() -> Self { Self::new_with_config(ChannelConfig::default()) }

    #[must_use]
    pub fn new_with_config(config: ChannelConfig) -> Self {
        Self {
            buffer: BufTextStorage::new(),
            format: FormatState::default(),
            attributes: TextAttributes::default(),
            filter: MessageFilter {
                verbosity_ceiling: config.verbosity_ceiling,
                category_mask: config.category_mask,
                ..MessageFilter::default()
            },
            subscribers: SubscriberRegistry::default(),
            echo: config.echo,
            process_output: Box::new(std::io::stdout()),
        }
    }

    /// Append a value, or apply a token. See [`ChannelInput`] for what each input does.
    pub fn push<T: ChannelInput>(&mut self, input: T) -> &mut Self {
        input.append_to(self);
        self
    }

    /// The message built so far.
    #[must_use]
    pub fn message(&self) -> &str { &self.buffer }

    #[must_use]
    pub fn format_state(&self) -> &FormatState { &self.format }

    #[must_use]
    pub fn attributes(&self) -> &TextAttributes { &self.attributes }

    #[must_use]
    pub fn filter(&self) -> &MessageFilter { &self.filter }

    #[must_use]
    pub fn echo_config(&self) -> &EchoConfig { &self.echo }

    #[must_use]
    pub fn subscriber_count(&self) -> usize { self.subscribers.len() }

    /// Replace the sink used by [`EchoMode::Stream`] and by the all categories muted
    /// warning. Returns the previous one.
    pub fn set_process_output(&mut self, output: impl Write + 'static) -> Box<dyn Write> {
        std::mem::replace(&mut self.process_output, Box::new(output))
    }

    /// # Errors
    ///
    /// [`IoChannelError::ProcessOutput`] if the sink fails to flush.
    pub fn flush_process_output(&mut self) -> Result<(), IoChannelError> {
        self.process_output
            .flush()
            .map_err(|source| IoChannelError::ProcessOutput { source })
    }
}

/// Subscriptions.
impl IoChannel {
    /// Receive every transmitted message whose verbosity is at most `level`.
    pub fn subscribe_verbosity(
        &mut self,
        level: Verbosity,
        callback: impl FnMut(&str, Category) + 'static,
    ) -> SubscriberId {
        let id = self.subscribers.add_verbosity(level, Box::new(callback));
        tracing::debug!(message = "subscribe", %id, %level);
        id
    }

    /// Receive every transmitted message of `category`.
    pub fn subscribe_category(
        &mut self,
        category: Category,
        callback: impl FnMut(&str, Verbosity) + 'static,
    ) -> SubscriberId {
        let id = self.subscribers.add_category(category, Box::new(callback));
        tracing::debug!(message = "subscribe", %id, %category);
        id
    }

    /// Receive every transmitted message.
    pub fn subscribe_all(
        &mut self,
        callback: impl FnMut(&str, Verbosity, Category) + 'static,
    ) -> SubscriberId {
        let id = self.subscribers.add_all(Box::new(callback));
        tracing::debug!(message = "subscribe all", %id);
        id
    }

    /// # Errors
    ///
    /// [`IoChannelError::SubscriberNotFound`] if `id` isn't registered with this
    /// channel.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> Result<(), IoChannelError> {
        if self.subscribers.remove(id) {
            tracing::debug!(message = "unsubscribe", %id);
            Ok(())
        } else {
            Err(IoChannelError::SubscriberNotFound { id })
        }
    }
}

/// Filter and echo control.
impl IoChannel {
    /// Stop accepting `category`. Muting the last accepted one writes
    /// [`ALL_CATEGORIES_MUTED_WARNING`] to the process output, and the channel goes on
    /// working (silently).
    pub fn mute_category(&mut self, category: Category) {
        self.filter.category_mask.remove(category);
        tracing::debug!(message = "mute", %category);
        if self.filter.category_mask.is_empty() {
            tracing::warn!(message = "All message categories have been turned off");
            self.write_process_output(ALL_CATEGORIES_MUTED_WARNING);
        }
    }

    pub fn unmute_category(&mut self, category: Category) {
        self.filter.category_mask.insert(category);
        tracing::debug!(message = "unmute", %category);
    }

    /// Only accept messages up to `ceiling`.
    pub fn mute_verbosity(&mut self, ceiling: Verbosity) {
        self.filter.verbosity_ceiling = ceiling;
        tracing::debug!(message = "mute verbosity", %ceiling);
    }

    /// Accept every verbosity and every category again.
    pub fn unmute(&mut self) {
        self.filter.verbosity_ceiling = Verbosity::Tmi;
        self.filter.category_mask = CategoryMask::ALL;
        tracing::debug!(message = "unmute all");
    }

    pub fn configure_echo(
        &mut self,
        mode: EchoMode,
        verbosity: Verbosity,
        category: impl Into<EchoCategory>,
    ) {
        self.echo = EchoConfig {
            mode,
            verbosity_ceiling: verbosity,
            category: category.into(),
        };
        tracing::debug!(message = "configure echo", echo = ?self.echo);
    }
}

/// The append and flush paths used by [`ChannelInput`] implementations.
impl IoChannel {
    pub(crate) fn accepts(&self) -> bool { self.filter.accepts() }

    /// Append `text`, preceded by the pending SGR sequence if there is one. No-op while
    /// the filter rejects.
    pub(crate) fn inject(&mut self, text: &str) {
        self.inject_with(|acc| acc.push_str(text));
    }

    /// Like [`IoChannel::inject`], for content that renders straight into the buffer.
    pub(crate) fn inject_with(&mut self, render: impl FnOnce(&mut BufTextStorage)) {
        if !self.accepts() {
            return;
        }
        if let Some(sgr) = self.attributes.take_pending_sgr() {
            self.buffer.push_str(&sgr);
        }
        render(&mut self.buffer);
    }

    /// Run `update` only while the filter accepts.
    pub(crate) fn apply_token(&mut self, update: impl FnOnce(&mut Self)) {
        if self.accepts() {
            update(self);
        }
    }

    pub(crate) fn apply_flush_marker(&mut self, marker: IoSpecial) {
        let plan = marker.plan();
        if plan.reset_attributes {
            self.attributes.reset();
        }
        if let Some(text) = plan.inject {
            if self.accepts() {
                self.inject(text);
            } else {
                self.close_pending_sgr();
            }
        }
        if plan.transmit {
            self.transmit();
        }
        if plan.reset_flags {
            self.reset_flags();
        }
    }

    /// A message that already holds text keeps its pending SGR sequence even after the
    /// filter starts rejecting, so the attributes it opened get closed.
    fn close_pending_sgr(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if let Some(sgr) = self.attributes.take_pending_sgr() {
            self.buffer.push_str(&sgr);
        }
    }

    /// Hand the message to subscribers and echo, then clear it. Nothing is dispatched
    /// for an empty message. Appends are filtered, so whatever is in the buffer was
    /// accepted when it was added.
    fn transmit(&mut self) {
        let verbosity = self.filter.current_verbosity;
        let category = self.filter.current_category;

        if !self.buffer.is_empty() {
            let calls = self.subscribers.dispatch(&self.buffer, verbosity, category);
            let echoed = self.echo.accepts(verbosity, category);
            if echoed {
                self.echo_message();
            }
            tracing::trace!(
                message = "transmit",
                len = self.buffer.len(),
                %verbosity,
                %category,
                calls,
                echoed
            );
        }

        self.buffer.clear();
    }

    fn echo_message(&mut self) {
        match self.echo.mode {
            EchoMode::None => {}
            EchoMode::Print => print!("{}", self.buffer),
            EchoMode::Stream => {
                let result = self
                    .process_output
                    .write_all(self.buffer.as_bytes())
                    .and_then(|()| self.process_output.flush());
                if let Err(err) = result {
                    tracing::warn!(message = "Echo to process output failed", %err);
                }
            }
        }
    }

    fn write_process_output(&mut self, text: &str) {
        let result = self
            .process_output
            .write_all(text.as_bytes())
            .and_then(|()| self.process_output.flush());
        if let Err(err) = result {
            tracing::warn!(message = "Write to process output failed", %err);
        }
    }

    /// Back to default formatting, plain attributes, and a normal message. Thresholds,
    /// subscribers, and echo settings stay.
    fn reset_flags(&mut self) {
        self.format = FormatState::default();
        self.attributes.reset();
        self.filter.reset_current();
    }
}
