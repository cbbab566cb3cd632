// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Index, IndexMut};

use crate::{OneCharError, significant_bytes};

/// A single byte character. A zero byte means "no character", so its significant bytes
/// are empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiChar(pub u8);

impl AsciiChar {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { significant_bytes(std::slice::from_ref(&self.0)) }

    pub fn assign_byte(&mut self, byte: u8) { self.0 = byte; }

    /// Only the bytes before the first NUL count. More than one of them doesn't fit.
    ///
    /// # Errors
    ///
    /// [`OneCharError::AsciiOverflow`] if `bytes` has more than one significant byte.
    /// `self` is unchanged in that case.
    pub fn assign_bytes(&mut self, bytes: &[u8]) -> Result<(), OneCharError> {
        match significant_bytes(bytes) {
            [] => self.0 = 0,
            [byte] => self.0 = *byte,
            it => return Err(OneCharError::AsciiOverflow { len: it.len() }),
        }
        Ok(())
    }
}

/// # Panics
///
/// If `index` is not 0.
impl Index<usize> for AsciiChar {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index == 0, "AsciiChar index out of range: {index}");
        &self.0
    }
}

impl IndexMut<usize> for AsciiChar {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index == 0, "AsciiChar index out of range: {index}");
        &mut self.0
    }
}
