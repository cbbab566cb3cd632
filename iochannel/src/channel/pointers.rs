// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ChannelInput, PointeeBytes};

/// Shown in place of the value behind an [`UntypedPtr`] in [`crate::PtrMode::Value`].
pub const UNTYPED_VALUE_PLACEHOLDER: &str =
    "[iochannel cannot interpret value at pointer of this type.]";

/// A value a [`Ptr`] can point at. The channel can render it, and can read its bytes
/// for a memory dump.
pub trait Pointee: ChannelInput + Copy {
    /// The value's in memory representation (native endian).
    fn pointee_bytes(&self) -> PointeeBytes;
}

macro_rules! impl_pointee_for_numbers {
    ($($t:ty),* $(,)?) => {
        $(
            impl Pointee for $t {
                fn pointee_bytes(&self) -> PointeeBytes {
                    PointeeBytes::from_slice(&self.to_ne_bytes())
                }
            }
        )*
    };
}

impl_pointee_for_numbers!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);

impl Pointee for bool {
    fn pointee_bytes(&self) -> PointeeBytes { PointeeBytes::from_slice(&[u8::from(*self)]) }
}

impl Pointee for char {
    fn pointee_bytes(&self) -> PointeeBytes {
        PointeeBytes::from_slice(&u32::from(*self).to_ne_bytes())
    }
}

/// A typed pointer. Depending on [`crate::PtrMode`] the channel renders the pointee, its
/// address, or a dump of its `size_of::<T>()` bytes.
///
/// ```
/// use r3bl_iochannel::{IoChannel, IoSpecial, MemSep, PtrMode, Ptr, ioc};
///
/// let value: u16 = 0xBEEF;
/// let mut channel = IoChannel::new();
/// ioc!(channel, Ptr(&value), " ", PtrMode::Memory, MemSep::Byte, Ptr(&value));
/// # #[cfg(target_endian = "little")]
/// assert_eq!(channel.message(), "48879 ef be");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ptr<'a, T: Pointee>(pub &'a T);

impl<T: Pointee> Ptr<'_, T> {
    #[must_use]
    pub fn addr(&self) -> usize { std::ptr::from_ref(self.0).addr() }
}

/// A pointer to memory of unknown type. Its value can't be rendered, so
/// [`crate::PtrMode::Value`] shows [`UNTYPED_VALUE_PLACEHOLDER`]. In
/// [`crate::PtrMode::Memory`] the dump covers [`crate::ReadSize`] bytes, clamped to the
/// end of the region.
#[derive(Debug, Clone, Copy)]
pub struct UntypedPtr<'a>(pub &'a [u8]);

impl UntypedPtr<'_> {
    #[must_use]
    pub fn addr(&self) -> usize { self.0.as_ptr().addr() }

    #[must_use]
    pub fn readable(&self, read_size: usize) -> &[u8] { &self.0[..read_size.min(self.0.len())] }
}
