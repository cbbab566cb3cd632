// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Result, Write};

use crate::NumeralCase;

/// Number of hex digits in a native pointer, eg: 16 on 64 bit platforms.
pub const PTR_HEX_DIGITS: usize = (usize::BITS / 4) as usize;

/// Write `addr` in hexadecimal, zero padded to the native pointer width. No `0x` prefix.
///
/// # Errors
///
/// Only if `acc` fails to accept the text.
pub fn write_ptr(acc: &mut impl Write, addr: usize, case: NumeralCase) -> Result {
    match case {
        NumeralCase::Lower => write!(acc, "{addr:0PTR_HEX_DIGITS$x}"),
        NumeralCase::Upper => write!(acc, "{addr:0PTR_HEX_DIGITS$X}"),
    }
}

#[must_use]
pub fn ptr_to_string(addr: usize, case: NumeralCase) -> String {
    let mut acc = String::with_capacity(PTR_HEX_DIGITS);
    _ = write_ptr(&mut acc, addr, case);
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_ptr_is_padded_to_native_width() {
        let it = ptr_to_string(0xabcd, NumeralCase::Lower);
        assert_eq2!(it.len(), PTR_HEX_DIGITS);
        assert!(it.ends_with("0000abcd"));
        assert!(it.trim_start_matches('0') == "abcd");
    }

    #[test]
    fn test_ptr_case() {
        assert!(ptr_to_string(0xbeef, NumeralCase::Upper).ends_with("BEEF"));
        assert_eq2!(ptr_to_string(0, NumeralCase::Upper), "0".repeat(PTR_HEX_DIGITS));
    }
}
