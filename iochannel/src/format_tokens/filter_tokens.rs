// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

/// Intended noise level of a message. Totally ordered: `Quiet < Normal < Chatty < Tmi`.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumIter, EnumCount,
)]
pub enum Verbosity {
    Quiet = 0,
    #[default]
    Normal = 1,
    Chatty = 2,
    Tmi = 3,
}

/// Kind of a message. Unordered.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum Category {
    #[default]
    Normal = 0,
    Debug = 1,
    Warning = 2,
    Error = 3,
}

impl Category {
    /// Bit of this category in a [`CategoryMask`], which is `1 << category`.
    #[must_use]
    pub fn bit(self) -> u8 { 1 << (self as u8) }
}

/// Set of categories the channel accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryMask(pub u8);

impl CategoryMask {
    pub const ALL: Self = Self(0b1111);
    pub const NONE: Self = Self(0);

    #[must_use]
    pub fn contains(self, category: Category) -> bool { self.0 & category.bit() != 0 }

    pub fn insert(&mut self, category: Category) { self.0 |= category.bit(); }

    pub fn remove(&mut self, category: Category) { self.0 &= !category.bit(); }

    #[must_use]
    pub fn is_empty(self) -> bool { self.0 == 0 }
}

impl Default for CategoryMask {
    fn default() -> Self { Self::ALL }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Chatty => "chatty",
            Verbosity::Tmi => "tmi",
        })
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            Category::Normal => "normal",
            Category::Debug => "debug",
            Category::Warning => "warning",
            Category::Error => "error",
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_verbosity_is_ordered() {
        assert!(Verbosity::Quiet < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Chatty);
        assert!(Verbosity::Chatty < Verbosity::Tmi);
        assert_eq2!(Verbosity::iter().max(), Some(Verbosity::Tmi));
    }

    #[test]
    fn test_category_mask() {
        let mut mask = CategoryMask::default();
        assert!(Category::iter().all(|it| mask.contains(it)));

        mask.remove(Category::Debug);
        assert!(!mask.contains(Category::Debug));
        assert!(mask.contains(Category::Error));
        assert_eq2!(mask, CategoryMask(0b1101));

        for it in Category::iter() {
            mask.remove(it);
        }
        assert!(mask.is_empty());

        mask.insert(Category::Warning);
        assert_eq2!(mask, CategoryMask(0b0100));
    }
}
