// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use crate::{MAX_UNI_CHAR_BYTES, OneChar, UniChar};

/// Splits a byte sequence into [`OneChar`] units, one per UTF-8 codepoint. ASCII bytes
/// become [`OneChar::Ascii`], multi byte sequences become [`OneChar::Unicode`].
///
/// Malformed input is not rejected. A byte that can't start a codepoint becomes a one
/// byte Unicode unit, and a sequence cut short by the end of input keeps whatever bytes
/// are left. A NUL byte is yielded as an empty ASCII unit.
///
/// ```
/// use r3bl_iochannel::OneChar;
///
/// let units: Vec<OneChar> = OneChar::iter_str("a☃b").collect();
/// assert_eq!(units.len(), 3);
/// assert!(units[0].is_ascii());
/// assert!(units[1].is_unicode());
/// assert_eq!(units[1].len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct OneCharIter<'a> {
    rest: &'a [u8],
}

impl<'a> OneCharIter<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self { Self { rest: bytes } }
}

/// Length of the UTF-8 sequence that `lead` starts, from its high bits.
fn utf8_sequence_len(lead: u8) -> usize {
    match lead.leading_ones() {
        2 => 2,
        3 => 3,
        4 => 4,
        // ASCII, continuation byte, or not UTF-8 at all.
        _ => 1,
    }
}

impl Iterator for OneCharIter<'_> {
    type Item = OneChar;

    fn next(&mut self) -> Option<Self::Item> {
        let lead = *self.rest.first()?;
        if lead.is_ascii() {
            self.rest = &self.rest[1..];
            return Some(OneChar::ascii(lead));
        }

        let len = utf8_sequence_len(lead)
            .min(self.rest.len())
            .min(MAX_UNI_CHAR_BYTES);
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;

        let mut it = UniChar::default();
        // `head` starts with a non zero byte and is at most 4 long.
        _ = it.assign_bytes(head);
        Some(OneChar::Unicode(it))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len().div_ceil(MAX_UNI_CHAR_BYTES), Some(self.rest.len()))
    }
}

impl FusedIterator for OneCharIter<'_> {}
