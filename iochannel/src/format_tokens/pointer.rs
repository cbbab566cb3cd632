// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// How a character value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharValue {
    /// Append the character itself.
    #[default]
    AsChar,
    /// Render the character's numeric value in the current [`crate::Base`].
    AsInt,
}

/// What to do with a pointer ([`crate::Ptr`], [`crate::UntypedPtr`], or a string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PtrMode {
    /// Dereference and render the pointee.
    #[default]
    Value,
    /// Render the address in hexadecimal, zero padded to the native pointer width.
    Address,
    /// Render a hex dump of the pointee's bytes.
    Memory,
}

/// Number of bytes dumped for an [`crate::UntypedPtr`] in [`PtrMode::Memory`], since
/// the size of the pointee isn't known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadSize(pub usize);

pub const DEFAULT_READ_SIZE: usize = 1;

impl Default for ReadSize {
    fn default() -> Self { Self(DEFAULT_READ_SIZE) }
}

impl From<usize> for ReadSize {
    fn from(it: usize) -> Self { Self(it) }
}

/// Separator token for memory dumps. [`MemSep::None`] clears the layout mask, any other
/// value adds its bits to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemSep {
    None,
    /// Single space between bytes.
    Byte,
    /// `|` between 8 byte words.
    Word,
    All,
}

impl MemSep {
    #[must_use]
    pub fn bits(self) -> u8 {
        match self {
            MemSep::None => 0,
            MemSep::Byte => MemoryLayout::BYTE_SEPARATOR,
            MemSep::Word => MemoryLayout::WORD_SEPARATOR,
            MemSep::All => MemoryLayout::BYTE_SEPARATOR | MemoryLayout::WORD_SEPARATOR,
        }
    }
}

/// Bitmask of memory dump separators that are currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MemoryLayout(pub u8);

impl MemoryLayout {
    pub const BYTE_SEPARATOR: u8 = 1 << 0;
    pub const WORD_SEPARATOR: u8 = 1 << 1;

    #[must_use]
    pub fn byte_separator(self) -> bool { self.0 & Self::BYTE_SEPARATOR != 0 }

    #[must_use]
    pub fn word_separator(self) -> bool { self.0 & Self::WORD_SEPARATOR != 0 }

    /// Zero clears the mask, anything else is OR'ed in.
    pub fn apply(&mut self, sep: MemSep) {
        match sep.bits() {
            0 => self.0 = 0,
            bits => self.0 |= bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_memory_layout_apply() {
        let mut layout = MemoryLayout::default();
        assert!(!layout.byte_separator());
        assert!(!layout.word_separator());

        layout.apply(MemSep::Byte);
        assert!(layout.byte_separator());
        assert!(!layout.word_separator());

        layout.apply(MemSep::Word);
        assert!(layout.byte_separator());
        assert!(layout.word_separator());

        layout.apply(MemSep::None);
        assert_eq2!(layout, MemoryLayout(0));

        layout.apply(MemSep::All);
        assert_eq2!(layout, MemoryLayout(0b11));
    }
}
