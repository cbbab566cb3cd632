// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hex dump of a byte region, two digits per byte, in memory order.
//!
//! With [`MemoryLayout::byte_separator`] a space goes between adjacent bytes. With
//! [`MemoryLayout::word_separator`] a `|` goes between 8 byte words. When both are on,
//! the `|` takes the place of the space, so it is never padded. Nothing trails the last
//! byte.
//!
//! ```
//! use r3bl_iochannel::{MemoryLayout, NumeralCase, memdump_to_string};
//!
//! let bytes = [0xde, 0xad, 0xbe, 0xef];
//! let it = memdump_to_string(&bytes, MemoryLayout(MemoryLayout::BYTE_SEPARATOR), NumeralCase::Lower);
//! assert_eq!(it, "de ad be ef");
//! ```

use std::fmt::{Result, Write};

use crate::{MemoryLayout, NumeralCase};

pub const WORD_SIZE: usize = 8;

/// # Errors
///
/// Only if `acc` fails to accept the text.
pub fn write_memdump(
    acc: &mut impl Write,
    bytes: &[u8],
    layout: MemoryLayout,
    case: NumeralCase,
) -> Result {
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            if layout.word_separator() && index.is_multiple_of(WORD_SIZE) {
                acc.write_char('|')?;
            } else if layout.byte_separator() {
                acc.write_char(' ')?;
            }
        }
        match case {
            NumeralCase::Lower => write!(acc, "{byte:02x}")?,
            NumeralCase::Upper => write!(acc, "{byte:02X}")?,
        }
    }
    Ok(())
}

#[must_use]
pub fn memdump_to_string(bytes: &[u8], layout: MemoryLayout, case: NumeralCase) -> String {
    let mut acc = String::with_capacity(bytes.len() * 3);
    _ = write_memdump(&mut acc, bytes, layout, case);
    acc
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    const TEN: [u8; 10] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0xa8, 0xb9];

    #[test_case(0, "0001020304050607a8b9")]
    #[test_case(MemoryLayout::BYTE_SEPARATOR, "00 01 02 03 04 05 06 07 a8 b9")]
    #[test_case(MemoryLayout::WORD_SEPARATOR, "0001020304050607|a8b9")]
    #[test_case(
        MemoryLayout::BYTE_SEPARATOR | MemoryLayout::WORD_SEPARATOR,
        "00 01 02 03 04 05 06 07|a8 b9"
    )]
    fn test_memdump_layouts(layout: u8, expected: &str) {
        let it = memdump_to_string(&TEN, MemoryLayout(layout), NumeralCase::Lower);
        assert_eq2!(it, expected);
    }

    #[test]
    fn test_memdump_upper_and_edges() {
        let all = MemoryLayout(MemoryLayout::BYTE_SEPARATOR | MemoryLayout::WORD_SEPARATOR);
        assert_eq2!(memdump_to_string(&[], all, NumeralCase::Upper), "");
        assert_eq2!(memdump_to_string(&[0xab], all, NumeralCase::Upper), "AB");
        // Exactly one word: no trailing separator.
        assert_eq2!(
            memdump_to_string(&[0xff; 8], all, NumeralCase::Upper),
            "FF FF FF FF FF FF FF FF"
        );
    }
}
