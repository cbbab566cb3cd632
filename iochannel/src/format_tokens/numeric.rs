// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{EnumCount, EnumIter};

/// Numeric base used to render integers. The discriminant is the radix. There's no
/// prefix (like `0x`) added to the rendered digits, the base is purely positional.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum Base {
    Binary = 2,
    Ternary = 3,
    Quaternary = 4,
    Quinary = 5,
    Senary = 6,
    Septenary = 7,
    Octal = 8,
    Nonary = 9,
    #[default]
    Decimal = 10,
    Undecimal = 11,
    Duodecimal = 12,
    Tridecimal = 13,
    Tetradecimal = 14,
    Pentadecimal = 15,
    Hexadecimal = 16,
}

impl Base {
    #[must_use]
    pub fn radix(self) -> u8 { self as u8 }
}

/// Case of the digits `a`..`f` (values 10 and up). Also applies to pointer addresses
/// and memory dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumeralCase {
    #[default]
    Lower,
    Upper,
}

/// When to use scientific notation for floating point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SciNotation {
    Never,
    Always,
    /// Scientific notation only when the magnitude is below `1e-4`, or has more integer
    /// digits than the current [`Precision`].
    #[default]
    Auto,
}

/// Number of significant digits kept when rendering floating point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(pub usize);

pub const DEFAULT_PRECISION: usize = 14;

impl Default for Precision {
    fn default() -> Self { Self(DEFAULT_PRECISION) }
}

impl From<usize> for Precision {
    fn from(it: usize) -> Self { Self(it) }
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_base_radix_covers_2_to_16() {
        assert_eq2!(Base::COUNT, 15);
        let radixes: Vec<u8> = Base::iter().map(Base::radix).collect();
        assert_eq2!(radixes, (2..=16).collect::<Vec<u8>>());
    }

    #[test]
    fn test_defaults() {
        assert_eq2!(Base::default(), Base::Decimal);
        assert_eq2!(NumeralCase::default(), NumeralCase::Lower);
        assert_eq2!(SciNotation::default(), SciNotation::Auto);
        assert_eq2!(Precision::default(), Precision(14));
    }
}
