// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`OneChar`] is one user perceived character: either a single byte ([`AsciiChar`]) or
//! a UTF-8 codepoint of up to 4 bytes ([`UniChar`]).
//!
//! The variant is picked at construction and never changes. Assigning new content into
//! an existing unit keeps its variant, which is why an ASCII unit rejects multi byte
//! input. Replacing the whole value (`a = b`) takes on the variant of `b`.
//!
//! Comparison and hashing only look at the significant bytes, so an ASCII `a` and a
//! Unicode `a` are equal, and ordering is plain lexicographic byte order.

use std::{cmp::Ordering,
          fmt::{Display, Formatter},
          hash::{Hash, Hasher},
          io::Write,
          ops::{Index, IndexMut}};

use crate::{AsciiChar, OneCharError, OneCharIter, UniChar};

/// The prefix of `bytes` before the first NUL, or all of `bytes` if there is none.
#[must_use]
pub fn significant_bytes(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|it| *it == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

#[derive(Debug, Clone, Copy)]
pub enum OneChar {
    Ascii(AsciiChar),
    Unicode(UniChar),
}

impl Default for OneChar {
    fn default() -> Self { Self::Ascii(AsciiChar::default()) }
}

impl OneChar {
    #[must_use]
    pub fn ascii(byte: u8) -> Self { Self::Ascii(AsciiChar(byte)) }

    /// Build a Unicode unit from a (possibly NUL terminated) UTF-8 sequence.
    ///
    /// # Errors
    ///
    /// [`OneCharError::TooManyBytes`] if more than 4 bytes come before the NUL.
    pub fn unicode_from_bytes(bytes: &[u8]) -> Result<Self, OneCharError> {
        UniChar::from_bytes(bytes).map(Self::Unicode)
    }

    #[must_use]
    pub fn is_ascii(&self) -> bool { matches!(self, Self::Ascii(_)) }

    #[must_use]
    pub fn is_unicode(&self) -> bool { matches!(self, Self::Unicode(_)) }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Ascii(it) => it.as_bytes(),
            Self::Unicode(it) => it.as_bytes(),
        }
    }

    /// Number of significant bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.as_bytes().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.as_bytes().is_empty() }

    pub fn assign_byte(&mut self, byte: u8) {
        match self {
            Self::Ascii(it) => it.assign_byte(byte),
            Self::Unicode(it) => it.assign_byte(byte),
        }
    }

    /// Replace the content with the bytes before the first NUL in `bytes`, keeping the
    /// variant.
    ///
    /// # Errors
    ///
    /// - [`OneCharError::AsciiOverflow`] for an ASCII unit given more than one byte.
    /// - [`OneCharError::TooManyBytes`] for a Unicode unit given more than four.
    pub fn assign_bytes(&mut self, bytes: &[u8]) -> Result<(), OneCharError> {
        match self {
            Self::Ascii(it) => it.assign_bytes(bytes),
            Self::Unicode(it) => it.assign_bytes(bytes),
        }
    }

    /// # Errors
    ///
    /// Same as [`OneChar::assign_bytes`].
    pub fn assign_str(&mut self, text: &str) -> Result<(), OneCharError> {
        self.assign_bytes(text.as_bytes())
    }

    /// Copy only the bytes of `other`, keeping this unit's variant. To copy the variant
    /// along with the bytes, replace the whole value instead (`*self = *other`, since
    /// [`OneChar`] is [`Copy`]).
    ///
    /// # Errors
    ///
    /// Same as [`OneChar::assign_bytes`].
    pub fn assign_bytes_from(&mut self, other: &OneChar) -> Result<(), OneCharError> {
        self.assign_bytes(other.as_bytes())
    }

    /// The codepoint, if the significant bytes are exactly one valid UTF-8 codepoint.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        let mut chars = std::str::from_utf8(self.as_bytes()).ok()?.chars();
        match (chars.next(), chars.next()) {
            (Some(it), None) => Some(it),
            _ => None,
        }
    }

    /// Write the significant bytes to `sink`, in order.
    ///
    /// # Errors
    ///
    /// Whatever `sink` returns.
    pub fn write_to(&self, sink: &mut impl Write) -> std::io::Result<()> {
        sink.write_all(self.as_bytes())
    }

    /// Walk `bytes` one character unit at a time. See [`OneCharIter`].
    #[must_use]
    pub fn iter_bytes(bytes: &[u8]) -> OneCharIter<'_> { OneCharIter::new(bytes) }

    #[must_use]
    pub fn iter_str(text: &str) -> OneCharIter<'_> { OneCharIter::new(text.as_bytes()) }
}

/// # Panics
///
/// If `index` is out of range for the variant: only 0 for ASCII, 0 to 4 for Unicode.
impl Index<usize> for OneChar {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Self::Ascii(it) => &it[index],
            Self::Unicode(it) => &it[index],
        }
    }
}

impl IndexMut<usize> for OneChar {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self {
            Self::Ascii(it) => &mut it[index],
            Self::Unicode(it) => &mut it[index],
        }
    }
}

impl From<u8> for OneChar {
    fn from(byte: u8) -> Self { Self::ascii(byte) }
}

impl From<char> for OneChar {
    fn from(ch: char) -> Self {
        if let Ok(byte) = u8::try_from(ch)
            && byte.is_ascii()
        {
            return Self::ascii(byte);
        }
        let mut acc = [0; 4];
        let encoded = ch.encode_utf8(&mut acc);
        let mut it = UniChar::default();
        // A char is at most 4 bytes, and a non ASCII one has no NUL in it.
        _ = it.assign_bytes(encoded.as_bytes());
        Self::Unicode(it)
    }
}

/// A single ASCII byte becomes an ASCII unit, anything else a Unicode unit.
impl TryFrom<&str> for OneChar {
    type Error = OneCharError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        match significant_bytes(text.as_bytes()) {
            [byte] if byte.is_ascii() => Ok(Self::ascii(*byte)),
            bytes => Self::unicode_from_bytes(bytes),
        }
    }
}

impl Display for OneChar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl PartialEq for OneChar {
    fn eq(&self, other: &Self) -> bool { self.as_bytes() == other.as_bytes() }
}

impl Eq for OneChar {}

impl PartialOrd for OneChar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for OneChar {
    fn cmp(&self, other: &Self) -> Ordering { self.as_bytes().cmp(other.as_bytes()) }
}

impl Hash for OneChar {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_bytes().hash(state); }
}

impl PartialEq<u8> for OneChar {
    fn eq(&self, other: &u8) -> bool {
        self.as_bytes() == significant_bytes(std::slice::from_ref(other))
    }
}

impl PartialEq<char> for OneChar {
    fn eq(&self, other: &char) -> bool {
        let mut acc = [0; 4];
        self.as_bytes() == significant_bytes(other.encode_utf8(&mut acc).as_bytes())
    }
}

/// Compares against the part of `other` before its first NUL.
impl PartialEq<[u8]> for OneChar {
    fn eq(&self, other: &[u8]) -> bool { self.as_bytes() == significant_bytes(other) }
}

impl PartialEq<str> for OneChar {
    fn eq(&self, other: &str) -> bool { *self == *other.as_bytes() }
}

impl PartialEq<&str> for OneChar {
    fn eq(&self, other: &&str) -> bool { *self == *other.as_bytes() }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::assert_eq2;

    fn snowman() -> OneChar { OneChar::unicode_from_bytes(&[0xE2, 0x98, 0x83, 0x00]).unwrap() }

    #[test]
    fn test_snowman() {
        let it = snowman();
        assert!(it.is_unicode());
        assert_eq2!(it.len(), 3);
        assert_eq2!(it.as_bytes(), &[0xE2, 0x98, 0x83]);
        assert_eq2!(it.to_string(), "☃");
        assert_eq2!(it.to_char(), Some('☃'));
        assert_ne!(it, OneChar::ascii(b'a'));
        assert!(it == '☃');
        assert!(it == "☃");
    }

    #[test]
    fn test_equality_ignores_variant() {
        let ascii = OneChar::ascii(b'a');
        let unicode = OneChar::unicode_from_bytes(b"a").unwrap();
        assert_eq2!(ascii, unicode);

        let set: HashSet<OneChar> = [ascii, unicode].into_iter().collect();
        assert_eq2!(set.len(), 1);

        assert!(ascii == b'a');
        assert!(ascii == *b"a\0junk".as_slice());
        assert!(ascii != b'b');
    }

    #[test]
    fn test_ordering_is_lexicographic_bytes() {
        let mut it = vec![snowman(), OneChar::from('é'), OneChar::ascii(b'z'), OneChar::ascii(b'A')];
        it.sort();
        let sorted: Vec<String> = it.iter().map(ToString::to_string).collect();
        assert_eq2!(sorted, vec!["A", "z", "é", "☃"]);

        assert!(OneChar::default() < OneChar::ascii(b'\x01'));
        assert!(OneChar::unicode_from_bytes(b"ab").unwrap() > OneChar::ascii(b'a'));
    }

    #[test]
    fn test_replacing_the_value_copies_variant_and_bytes() {
        let mut it = OneChar::ascii(b'x');
        assert!(it.is_ascii());
        let source = snowman();
        it = source;
        assert!(it.is_unicode());
        assert_eq2!(it.as_bytes(), source.as_bytes());
    }

    #[test]
    fn test_assign_keeps_variant() {
        let mut ascii = OneChar::ascii(b'x');
        assert_eq2!(
            ascii.assign_bytes_from(&snowman()),
            Err(OneCharError::AsciiOverflow { len: 3 })
        );
        assert_eq2!(ascii, OneChar::ascii(b'x'));

        let mut unicode = OneChar::from('é');
        unicode.assign_bytes_from(&OneChar::ascii(b'q')).unwrap();
        assert!(unicode.is_unicode());
        assert_eq2!(unicode, 'q');

        unicode.assign_str("🦀").unwrap();
        assert_eq2!(unicode.len(), 4);
        unicode.assign_byte(b'!');
        assert_eq2!(unicode.to_string(), "!");
    }

    #[test]
    fn test_conversions() {
        assert!(OneChar::from('a').is_ascii());
        assert!(OneChar::from('ß').is_unicode());
        assert!(OneChar::try_from("a").unwrap().is_ascii());
        assert_eq2!(OneChar::try_from("é").unwrap(), 'é');
        assert_eq2!(
            OneChar::try_from("hello"),
            Err(OneCharError::TooManyBytes { len: 5, max: 4 })
        );
        assert_eq2!(OneChar::unicode_from_bytes(b"ab").unwrap().to_char(), None);
    }

    #[test]
    fn test_index_and_write_to() {
        let mut it = snowman();
        assert_eq2!(it[1], 0x98);
        it[3] = b'!';
        assert_eq2!(it.len(), 4);

        let mut sink = Vec::new();
        snowman().write_to(&mut sink).unwrap();
        assert_eq2!(sink, "☃".as_bytes());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_unicode_index_out_of_range_panics() { _ = snowman()[5]; }
}
