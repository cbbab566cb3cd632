// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal attributes, and the ANSI SGR (Select Graphic Rendition) sequence that
//! describes them.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - ECMA-48, section 8.3.117.

use std::fmt::{Display, Formatter, Result, Write};

use strum_macros::{EnumCount, EnumIter};

use crate::InlineString;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Foreground color. [`Fg::None`] leaves the parameter out of the SGR sequence.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum Fg {
    #[default]
    None = 0,
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
    DefaultColor = 39,
}

/// Background color. [`Bg::None`] leaves the parameter out of the SGR sequence.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum Bg {
    #[default]
    None = 0,
    Black = 40,
    Red = 41,
    Green = 42,
    Yellow = 43,
    Blue = 44,
    Magenta = 45,
    Cyan = 46,
    White = 47,
    DefaultColor = 49,
}

/// Text attribute. [`TextAttr::None`] renders as `0`, which is also the SGR reset.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum TextAttr {
    #[default]
    None = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    SlowBlink = 5,
    RapidBlink = 6,
    Invert = 7,
    Hidden = 8,
    Strikethrough = 9,
}

impl Fg {
    #[must_use]
    pub fn sgr_code(self) -> u8 { self as u8 }
}

impl Bg {
    #[must_use]
    pub fn sgr_code(self) -> u8 { self as u8 }
}

impl TextAttr {
    #[must_use]
    pub fn sgr_code(self) -> u8 { self as u8 }
}

/// The logical attribute state of a channel, plus the `dirty` flag that tracks whether
/// the terminal has seen it yet.
///
/// The flag exists so that consecutive attribute tokens coalesce into one escape
/// sequence, and so that nothing is emitted until there is content to emit it in front
/// of. See [`TextAttributes::take_pending_sgr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextAttributes {
    pub fg: Fg,
    pub bg: Bg,
    pub attr: TextAttr,
    pub dirty: bool,
}

impl TextAttributes {
    pub fn set_fg(&mut self, fg: Fg) {
        self.fg = fg;
        self.dirty = true;
    }

    pub fn set_bg(&mut self, bg: Bg) {
        self.bg = bg;
        self.dirty = true;
    }

    pub fn set_attr(&mut self, attr: TextAttr) {
        self.attr = attr;
        self.dirty = true;
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg == Fg::None && self.bg == Bg::None && self.attr == TextAttr::None
    }

    /// Go back to plain text. Only raises the dirty flag if something was set, so a reset
    /// of plain text emits nothing.
    pub fn reset(&mut self) {
        if !self.is_plain() {
            self.fg = Fg::None;
            self.bg = Bg::None;
            self.attr = TextAttr::None;
            self.dirty = true;
        }
    }

    /// If the attributes are dirty, lower the flag and return the SGR sequence that the
    /// terminal needs to see before the next piece of content.
    pub fn take_pending_sgr(&mut self) -> Option<InlineString> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        let mut acc = InlineString::new();
        _ = write!(acc, "{}", SgrSequence::from(&*self));
        Some(acc)
    }
}

/// `ESC [ A (; B)? (; F)? m` where `A` is the text attribute, `B` the background and `F`
/// the foreground. A `None` color is left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrSequence {
    pub attr: TextAttr,
    pub bg: Bg,
    pub fg: Fg,
}

impl From<&TextAttributes> for SgrSequence {
    fn from(it: &TextAttributes) -> Self {
        Self {
            attr: it.attr,
            bg: it.bg,
            fg: it.fg,
        }
    }
}

impl Display for SgrSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{CSI}{}", self.attr.sgr_code())?;
        if self.bg != Bg::None {
            write!(f, ";{}", self.bg.sgr_code())?;
        }
        if self.fg != Fg::None {
            write!(f, ";{}", self.fg.sgr_code())?;
        }
        f.write_str(SGR)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(TextAttr::None, Bg::None, Fg::None, "\x1b[0m")]
    #[test_case(TextAttr::None, Bg::None, Fg::Red, "\x1b[0;31m")]
    #[test_case(TextAttr::Bold, Bg::None, Fg::None, "\x1b[1m")]
    #[test_case(TextAttr::Underline, Bg::Blue, Fg::None, "\x1b[4;44m")]
    #[test_case(TextAttr::Invert, Bg::White, Fg::Black, "\x1b[7;47;30m")]
    #[test_case(TextAttr::None, Bg::DefaultColor, Fg::DefaultColor, "\x1b[0;49;39m")]
    fn test_sgr_sequence(attr: TextAttr, bg: Bg, fg: Fg, expected: &str) {
        assert_eq2!(SgrSequence { attr, bg, fg }.to_string(), expected);
    }

    #[test]
    fn test_take_pending_sgr_coalesces() {
        let mut attrs = TextAttributes::default();
        assert_eq2!(attrs.take_pending_sgr(), None);

        attrs.set_fg(Fg::Green);
        attrs.set_bg(Bg::Black);
        attrs.set_attr(TextAttr::Bold);
        assert!(attrs.dirty);

        let sgr = attrs.take_pending_sgr();
        assert_eq2!(sgr.as_deref(), Some("\x1b[1;40;32m"));
        assert!(!attrs.dirty);
        assert_eq2!(attrs.take_pending_sgr(), None);
    }

    #[test]
    fn test_reset_only_dirties_when_styled() {
        let mut attrs = TextAttributes::default();
        attrs.reset();
        assert!(!attrs.dirty);

        attrs.set_fg(Fg::Red);
        _ = attrs.take_pending_sgr();
        attrs.reset();
        assert!(attrs.dirty);
        assert!(attrs.is_plain());
        assert_eq2!(attrs.take_pending_sgr().as_deref(), Some("\x1b[0m"));
    }
}
