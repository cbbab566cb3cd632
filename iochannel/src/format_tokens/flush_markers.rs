// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{EnumCount, EnumIter};

/// Flush markers end (or punctuate) a message. They differ along three axes: whether a
/// newline is appended, whether the message is transmitted to subscribers, and whether
/// the formatting state is reset afterwards. See [`IoSpecial::plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum IoSpecial {
    /// Reset attributes, newline, transmit, reset the formatting state.
    End,
    /// Newline, transmit, keep the formatting state.
    EndKeep,
    /// Reset attributes (flushing the reset sequence), transmit, keep the formatting
    /// state.
    Send,
    /// Transmit only.
    SendKeep,
    /// Reset attributes and newline. No transmit.
    EndLine,
    /// Newline only.
    EndLineKeep,
}

/// The steps a flush marker takes, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushPlan {
    pub reset_attributes: bool,
    /// Text to inject, if any. An empty string still flushes a pending SGR sequence.
    pub inject: Option<&'static str>,
    pub transmit: bool,
    pub reset_flags: bool,
}

impl IoSpecial {
    #[rustfmt::skip]
    #[must_use]
    pub fn plan(self) -> FlushPlan {
        let (reset_attributes, inject, transmit, reset_flags) = match self {
            IoSpecial::End         => (true,  Some("\n"), true,  true),
            IoSpecial::EndKeep     => (false, Some("\n"), true,  false),
            IoSpecial::Send        => (true,  Some(""),   true,  false),
            IoSpecial::SendKeep    => (false, None,       true,  false),
            IoSpecial::EndLine     => (true,  Some("\n"), false, false),
            IoSpecial::EndLineKeep => (false, Some("\n"), false, false),
        };
        FlushPlan { reset_attributes, inject, transmit, reset_flags }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_only_end_resets_flags() {
        let resetting: Vec<IoSpecial> =
            IoSpecial::iter().filter(|it| it.plan().reset_flags).collect();
        assert_eq2!(resetting, vec![IoSpecial::End]);
    }

    #[test]
    fn test_endline_markers_do_not_transmit() {
        assert!(!IoSpecial::EndLine.plan().transmit);
        assert!(!IoSpecial::EndLineKeep.plan().transmit);
        assert!(IoSpecial::SendKeep.plan().transmit);
        assert_eq2!(IoSpecial::SendKeep.plan().inject, None);
    }
}
