// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Base, Category, CategoryMask, CharValue, MemoryLayout, NumeralCase,
            Precision, PtrMode, ReadSize, SciNotation, Verbosity};

/// The transient formatting choices of an [`crate::IoChannel`]. Everything here goes
/// back to its default when a flush marker resets the flags. Terminal attributes live
/// next to it in [`crate::TextAttributes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatState {
    pub base: Base,
    pub numeral_case: NumeralCase,
    pub sci: SciNotation,
    pub precision: Precision,
    pub char_value: CharValue,
    pub ptr_mode: PtrMode,
    pub read_size: ReadSize,
    pub memory_layout: MemoryLayout,
}

/// Decides whether the message being built is emitted at all.
///
/// The thresholds (`verbosity_ceiling`, `category_mask`) belong to the host and survive
/// flushes. The `current_*` fields describe the message being built and are reset along
/// with the [`FormatState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFilter {
    pub verbosity_ceiling: Verbosity,
    pub category_mask: CategoryMask,
    pub current_verbosity: Verbosity,
    pub current_category: Category,
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self {
            verbosity_ceiling: Verbosity::Tmi,
            category_mask: CategoryMask::ALL,
            current_verbosity: Verbosity::default(),
            current_category: Category::default(),
        }
    }
}

impl MessageFilter {
    #[must_use]
    pub fn accepts(&self) -> bool {
        self.current_verbosity <= self.verbosity_ceiling
            && self.category_mask.contains(self.current_category)
    }

    pub fn reset_current(&mut self) {
        self.current_verbosity = Verbosity::default();
        self.current_category = Category::default();
    }
}
