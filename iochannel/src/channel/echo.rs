// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Echo settings and the configuration an [`crate::IoChannel`] starts out with.

use crate::{Category, CategoryMask, Verbosity};

/// Where transmitted messages are echoed, in addition to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EchoMode {
    #[default]
    None,
    /// Write with [`print!`].
    Print,
    /// Write to the channel's process output. See
    /// [`crate::IoChannel::set_process_output`].
    Stream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EchoCategory {
    #[default]
    All,
    Only(Category),
}

impl From<Category> for EchoCategory {
    fn from(it: Category) -> Self { Self::Only(it) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoConfig {
    pub mode: EchoMode,
    pub verbosity_ceiling: Verbosity,
    pub category: EchoCategory,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            mode: EchoMode::None,
            verbosity_ceiling: Verbosity::Tmi,
            category: EchoCategory::All,
        }
    }
}

impl EchoConfig {
    #[must_use]
    pub fn accepts(&self, verbosity: Verbosity, category: Category) -> bool {
        let category_matches = match self.category {
            EchoCategory::All => true,
            EchoCategory::Only(it) => it == category,
        };
        self.mode != EchoMode::None
            && verbosity <= self.verbosity_ceiling
            && category_matches
    }
}

/// Settings an [`crate::IoChannel`] is created with. All of them can be changed later
/// through the channel.
///
/// ```
/// use r3bl_iochannel::{ChannelConfig, EchoMode, IoChannel, Verbosity};
///
/// let config = ChannelConfig::default()
///     .with_verbosity_ceiling(Verbosity::Chatty)
///     .with_echo_mode(EchoMode::Stream);
/// let channel = IoChannel::new_with_config(config);
/// assert_eq!(channel.filter().verbosity_ceiling, Verbosity::Chatty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    pub verbosity_ceiling: Verbosity,
    pub category_mask: CategoryMask,
    pub echo: EchoConfig,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            verbosity_ceiling: Verbosity::Tmi,
            category_mask: CategoryMask::ALL,
            echo: EchoConfig::default(),
        }
    }
}

impl ChannelConfig {
    /// Echo every message with [`print!`].
    #[must_use]
    pub fn stdout_echo() -> Self { Self::default().with_echo_mode(EchoMode::Print) }

    #[must_use]
    pub fn with_verbosity_ceiling(mut self, it: Verbosity) -> Self {
        self.verbosity_ceiling = it;
        self
    }

    #[must_use]
    pub fn with_category_mask(mut self, it: CategoryMask) -> Self {
        self.category_mask = it;
        self
    }

    #[must_use]
    pub fn with_echo_mode(mut self, it: EchoMode) -> Self {
        self.echo.mode = it;
        self
    }

    #[must_use]
    pub fn with_echo_verbosity(mut self, it: Verbosity) -> Self {
        self.echo.verbosity_ceiling = it;
        self
    }

    #[must_use]
    pub fn with_echo_category(mut self, it: impl Into<EchoCategory>) -> Self {
        self.echo.category = it.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(EchoMode::None, Verbosity::Normal, Category::Normal => false)]
    #[test_case(EchoMode::Print, Verbosity::Normal, Category::Normal => true)]
    #[test_case(EchoMode::Stream, Verbosity::Chatty, Category::Error => true)]
    #[test_case(EchoMode::Stream, Verbosity::Tmi, Category::Error => false)]
    #[test_case(EchoMode::Stream, Verbosity::Quiet, Category::Debug => false)]
    fn test_echo_accepts(mode: EchoMode, vrb: Verbosity, cat: Category) -> bool {
        let config = ChannelConfig::default()
            .with_echo_mode(mode)
            .with_echo_verbosity(Verbosity::Chatty)
            .with_echo_category(if mode == EchoMode::Print {
                EchoCategory::All
            } else {
                EchoCategory::Only(Category::Error)
            });
        config.echo.accepts(vrb, cat)
    }

    #[test]
    fn test_stdout_echo_preset() {
        let it = ChannelConfig::stdout_echo();
        assert!(it.echo.accepts(Verbosity::Tmi, Category::Debug));
        assert_eq2!(it.category_mask, CategoryMask::ALL);
    }
}
