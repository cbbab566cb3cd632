// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Storage aliases. Keep the inline sizes small, these types are created on every push
//! into the channel.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Buffer that accumulates the message text between two flush markers. It is cleared,
/// not dropped, after every transmit.
pub type BufTextStorage = String;

/// Stack allocated string storage for short renderings (SGR sequences, numbers). When
/// this gets larger than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// Raw bytes of a primitive value, as read through a typed pointer. Every
/// [`crate::Pointee`] fits inline.
pub type PointeeBytes = SmallVec<[u8; POINTEE_BYTES_SIZE]>;
pub const POINTEE_BYTES_SIZE: usize = 8;
