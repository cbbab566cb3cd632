// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated integer formatting in any [`Base`] from 2 to 16, without heap
//! allocation.
//!
//! Digits are written right to left into a fixed size array, and [`IntDigits`] keeps
//! track of where the significant part starts. No `0x` style prefix is ever added, and
//! only negative signed values get a leading `-`.
//!
//! ```
//! use r3bl_iochannel::{Base, NumeralCase, int_to_digits, uint_to_digits};
//!
//! let it = uint_to_digits(255, Base::Hexadecimal, NumeralCase::Upper);
//! assert_eq!(it.as_str(), "FF");
//!
//! let it = int_to_digits(-5, Base::Binary, NumeralCase::Lower);
//! assert_eq!(it.as_str(), "-101");
//! ```

use std::fmt::{Display, Formatter, Result};

use crate::{Base, NumeralCase};

/// Maximum number of characters needed for any 64 bit integer in any supported base.
/// This is 64 binary digits for [`u64::MAX`], plus one for the sign of [`i64::MIN`].
pub const INT_FMT_MAX_DIGITS: usize = 65;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Rendered integer. Only `acc[start..]` is significant.
#[derive(Debug, Clone, Copy)]
pub struct IntDigits {
    acc: [u8; INT_FMT_MAX_DIGITS],
    start: usize,
}

impl IntDigits {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.acc[self.start..] }

    /// The array only ever holds ASCII digits and `-`, so the conversion can't fail.
    #[must_use]
    pub fn as_str(&self) -> &str {
        let result_str = std::str::from_utf8(self.as_bytes());
        debug_assert!(result_str.is_ok(), "Integer digits must be ASCII");
        result_str.unwrap_or_default()
    }

    /// Number of characters, including the sign.
    #[must_use]
    pub fn len(&self) -> usize { INT_FMT_MAX_DIGITS - self.start }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Display for IntDigits {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(self.as_str()) }
}

#[must_use]
pub fn uint_to_digits(num: u64, base: Base, case: NumeralCase) -> IntDigits {
    write_magnitude(num, false, base, case)
}

#[must_use]
pub fn int_to_digits(num: i64, base: Base, case: NumeralCase) -> IntDigits {
    write_magnitude(num.unsigned_abs(), num < 0, base, case)
}

/// Number of characters [`int_to_digits`] produces, including the sign.
#[must_use]
pub fn int_len(num: i64, base: Base) -> usize {
    magnitude_len(num.unsigned_abs(), base) + usize::from(num < 0)
}

/// Number of characters [`uint_to_digits`] produces.
#[must_use]
pub fn uint_len(num: u64, base: Base) -> usize { magnitude_len(num, base) }

fn magnitude_len(mut num: u64, base: Base) -> usize {
    let radix = u64::from(base.radix());
    let mut len = 1;
    while num >= radix {
        num /= radix;
        len += 1;
    }
    len
}

fn write_magnitude(
    mut num: u64,
    negative: bool,
    base: Base,
    case: NumeralCase,
) -> IntDigits {
    let digits = match case {
        NumeralCase::Lower => LOWER_DIGITS,
        NumeralCase::Upper => UPPER_DIGITS,
    };
    let radix = u64::from(base.radix());

    let mut acc = [0; INT_FMT_MAX_DIGITS];
    let mut index = INT_FMT_MAX_DIGITS;

    loop {
        index -= 1;
        // Remainder is always below 16.
        acc[index] = digits[usize::try_from(num % radix).unwrap_or(0)];
        num /= radix;
        if num == 0 {
            break;
        }
    }

    if negative {
        index -= 1;
        acc[index] = b'-';
    }

    IntDigits { acc, start: index }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0, Base::Decimal, "0")]
    #[test_case(42, Base::Decimal, "42")]
    #[test_case(-42, Base::Decimal, "-42")]
    #[test_case(5, Base::Binary, "101")]
    #[test_case(-8, Base::Octal, "-10")]
    #[test_case(26, Base::Ternary, "222")]
    #[test_case(255, Base::Hexadecimal, "ff")]
    #[test_case(i64::MIN, Base::Hexadecimal, "-8000000000000000")]
    fn test_int_to_digits(num: i64, base: Base, expected: &str) {
        let it = int_to_digits(num, base, NumeralCase::Lower);
        assert_eq2!(it.as_str(), expected);
        assert_eq2!(it.len(), int_len(num, base));
    }

    #[test]
    fn test_uint_max_in_binary_fills_buffer() {
        let it = uint_to_digits(u64::MAX, Base::Binary, NumeralCase::Lower);
        assert_eq2!(it.len(), 64);
        assert!(it.as_bytes().iter().all(|it| *it == b'1'));
    }

    #[test]
    fn test_upper_case_only_affects_letters() {
        let it = uint_to_digits(0xab_cd19, Base::Hexadecimal, NumeralCase::Upper);
        assert_eq2!(it.to_string(), "ABCD19");
    }

    #[test]
    fn test_rendered_digits_parse_back_in_every_base() {
        let samples = [0_i64, 1, -1, 7, -300, 65_535, 1_234_567_890, i64::MAX, i64::MIN + 1];
        for base in Base::iter() {
            for num in samples {
                for case in [NumeralCase::Lower, NumeralCase::Upper] {
                    let it = int_to_digits(num, base, case);
                    let parsed = i64::from_str_radix(it.as_str(), u32::from(base.radix()));
                    assert_eq2!(parsed, Ok(num));
                }
            }
            let it = uint_to_digits(u64::MAX, base, NumeralCase::Lower);
            let parsed = u64::from_str_radix(it.as_str(), u32::from(base.radix()));
            assert_eq2!(parsed, Ok(u64::MAX));
        }
    }
}
