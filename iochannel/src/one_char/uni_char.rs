// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Index, IndexMut};

use crate::{OneCharError, significant_bytes};

/// Most bytes a UTF-8 codepoint can take.
pub const MAX_UNI_CHAR_BYTES: usize = 4;

/// The slot has room for the longest codepoint plus a NUL terminator.
pub const UNI_CHAR_SLOT_SIZE: usize = MAX_UNI_CHAR_BYTES + 1;

/// A UTF-8 codepoint of 1 to 4 bytes, held in a fixed NUL terminated slot.
///
/// The contents are not validated as UTF-8. Anything that fits is accepted, and
/// printing decodes lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniChar {
    slot: [u8; UNI_CHAR_SLOT_SIZE],
}

impl UniChar {
    /// # Errors
    ///
    /// [`OneCharError::TooManyBytes`] if `bytes` has more than [`MAX_UNI_CHAR_BYTES`]
    /// significant bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, OneCharError> {
        let mut it = Self::default();
        it.assign_bytes(bytes)?;
        Ok(it)
    }

    /// The bytes up to the first NUL. Never more than [`MAX_UNI_CHAR_BYTES`], even if
    /// the terminator was overwritten through [`IndexMut`].
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { significant_bytes(&self.slot[..MAX_UNI_CHAR_BYTES]) }

    pub fn assign_byte(&mut self, byte: u8) {
        self.slot = [0; UNI_CHAR_SLOT_SIZE];
        self.slot[0] = byte;
    }

    /// # Errors
    ///
    /// [`OneCharError::TooManyBytes`] if `bytes` has more than [`MAX_UNI_CHAR_BYTES`]
    /// significant bytes. `self` is unchanged in that case.
    pub fn assign_bytes(&mut self, bytes: &[u8]) -> Result<(), OneCharError> {
        let bytes = significant_bytes(bytes);
        if bytes.len() > MAX_UNI_CHAR_BYTES {
            return Err(OneCharError::TooManyBytes {
                len: bytes.len(),
                max: MAX_UNI_CHAR_BYTES,
            });
        }
        self.slot = [0; UNI_CHAR_SLOT_SIZE];
        self.slot[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

/// # Panics
///
/// If `index` is not below [`UNI_CHAR_SLOT_SIZE`].
impl Index<usize> for UniChar {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output { &self.slot[index] }
}

impl IndexMut<usize> for UniChar {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.slot[index] }
}
