// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that can be pushed into an [`IoChannel`].
//!
//! | input                                   | effect                                     |
//! |-----------------------------------------|--------------------------------------------|
//! | `bool`                                  | `TRUE` or `FALSE`                          |
//! | integers                                | digits in the current [`Base`]             |
//! | `f32`, `f64`                            | see [`dtos`]                               |
//! | `char`, [`OneChar`]                     | the character, or its value per [`CharValue`] |
//! | `&str`, `String`, `&CStr`               | the text, its address, or its bytes per [`PtrMode`] |
//! | [`Ptr`], [`UntypedPtr`]                 | per [`PtrMode`]                            |
//! | modifier tokens ([`Base`], [`Fg`], ...) | update the formatting state                |
//! | [`Verbosity`], [`Category`]             | describe the current message, never gated  |
//! | [`IoSpecial`]                           | flush, see [`IoSpecial::plan`]             |

use std::ffi::CStr;

use crate::{Base, Bg, Category, CharValue, Fg, IoChannel, IoSpecial, MemSep, NumeralCase,
            OneChar, Pointee, Precision, Ptr, PtrMode, ReadSize, SciNotation, TextAttr,
            UNTYPED_VALUE_PLACEHOLDER, UntypedPtr, Verbosity, dtos, ftos, int_to_digits,
            uint_to_digits, write_memdump, write_ptr};

pub const TRUE_STR: &str = "TRUE";
pub const FALSE_STR: &str = "FALSE";

pub trait ChannelInput {
    fn append_to(self, channel: &mut IoChannel);
}

fn append_signed(channel: &mut IoChannel, num: i64) {
    let digits = int_to_digits(num, channel.format.base, channel.format.numeral_case);
    channel.inject(digits.as_str());
}

fn append_unsigned(channel: &mut IoChannel, num: u64) {
    let digits = uint_to_digits(num, channel.format.base, channel.format.numeral_case);
    channel.inject(digits.as_str());
}

fn append_address(channel: &mut IoChannel, addr: usize) {
    let case = channel.format.numeral_case;
    channel.inject_with(|acc| {
        _ = write_ptr(acc, addr, case);
    });
}

fn append_memory(channel: &mut IoChannel, bytes: &[u8]) {
    let layout = channel.format.memory_layout;
    let case = channel.format.numeral_case;
    channel.inject_with(|acc| {
        _ = write_memdump(acc, bytes, layout, case);
    });
}

/// Strings are pointers too: [`PtrMode::Value`] renders the text, the other modes
/// render where it lives or what bytes it is made of.
fn append_region(
    channel: &mut IoChannel,
    addr: usize,
    bytes: &[u8],
    render_value: impl FnOnce(&mut IoChannel),
) {
    match channel.format.ptr_mode {
        PtrMode::Value => render_value(channel),
        PtrMode::Address => append_address(channel, addr),
        PtrMode::Memory => append_memory(channel, bytes),
    }
}

macro_rules! impl_channel_input_for_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl ChannelInput for $t {
                fn append_to(self, channel: &mut IoChannel) {
                    append_signed(channel, i64::try_from(self).unwrap_or_default());
                }
            }
        )*
    };
}

macro_rules! impl_channel_input_for_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl ChannelInput for $t {
                fn append_to(self, channel: &mut IoChannel) {
                    append_unsigned(channel, u64::try_from(self).unwrap_or_default());
                }
            }
        )*
    };
}

impl_channel_input_for_signed!(i8, i16, i32, i64, isize);
impl_channel_input_for_unsigned!(u8, u16, u32, u64, usize);

impl ChannelInput for bool {
    fn append_to(self, channel: &mut IoChannel) {
        channel.inject(if self { TRUE_STR } else { FALSE_STR });
    }
}

impl ChannelInput for f64 {
    fn append_to(self, channel: &mut IoChannel) {
        let text = dtos(self, channel.format.precision, channel.format.sci);
        channel.inject(&text);
    }
}

impl ChannelInput for f32 {
    fn append_to(self, channel: &mut IoChannel) {
        let text = ftos(self, channel.format.precision, channel.format.sci);
        channel.inject(&text);
    }
}

impl ChannelInput for char {
    fn append_to(self, channel: &mut IoChannel) {
        match channel.format.char_value {
            CharValue::AsChar => channel.inject(self.encode_utf8(&mut [0; 4])),
            CharValue::AsInt => append_unsigned(channel, u64::from(u32::from(self))),
        }
    }
}

impl ChannelInput for OneChar {
    fn append_to(self, channel: &mut IoChannel) {
        match (channel.format.char_value, self.to_char()) {
            (CharValue::AsChar, _) => channel.inject(&self.to_string()),
            (CharValue::AsInt, Some(ch)) => append_unsigned(channel, u64::from(u32::from(ch))),
            // Not a single codepoint: render each byte instead.
            (CharValue::AsInt, None) => {
                for (index, byte) in self.as_bytes().iter().enumerate() {
                    if index > 0 {
                        channel.inject(" ");
                    }
                    append_unsigned(channel, u64::from(*byte));
                }
            }
        }
    }
}

impl ChannelInput for &OneChar {
    fn append_to(self, channel: &mut IoChannel) { (*self).append_to(channel); }
}

impl ChannelInput for &str {
    fn append_to(self, channel: &mut IoChannel) {
        append_region(channel, self.as_ptr().addr(), self.as_bytes(), |channel| {
            channel.inject(self);
        });
    }
}

impl ChannelInput for &String {
    fn append_to(self, channel: &mut IoChannel) { self.as_str().append_to(channel); }
}

impl ChannelInput for String {
    fn append_to(self, channel: &mut IoChannel) { self.as_str().append_to(channel); }
}

/// The memory dump includes the terminating NUL.
impl ChannelInput for &CStr {
    fn append_to(self, channel: &mut IoChannel) {
        append_region(channel, self.as_ptr().addr(), self.to_bytes_with_nul(), |channel| {
            channel.inject(&self.to_string_lossy());
        });
    }
}

impl<T: Pointee> ChannelInput for Ptr<'_, T> {
    fn append_to(self, channel: &mut IoChannel) {
        match channel.format.ptr_mode {
            PtrMode::Value => (*self.0).append_to(channel),
            PtrMode::Address => append_address(channel, self.addr()),
            PtrMode::Memory => append_memory(channel, &self.0.pointee_bytes()),
        }
    }
}

impl ChannelInput for UntypedPtr<'_> {
    fn append_to(self, channel: &mut IoChannel) {
        match channel.format.ptr_mode {
            PtrMode::Value => channel.inject(UNTYPED_VALUE_PLACEHOLDER),
            PtrMode::Address => append_address(channel, self.addr()),
            PtrMode::Memory => {
                let ReadSize(read_size) = channel.format.read_size;
                append_memory(channel, self.readable(read_size));
            }
        }
    }
}

macro_rules! impl_channel_input_for_format_token {
    ($($t:ty => $field:ident),* $(,)?) => {
        $(
            impl ChannelInput for $t {
                fn append_to(self, channel: &mut IoChannel) {
                    channel.apply_token(|it| it.format.$field = self);
                }
            }
        )*
    };
}

impl_channel_input_for_format_token!(
    Base => base,
    NumeralCase => numeral_case,
    SciNotation => sci,
    Precision => precision,
    CharValue => char_value,
    PtrMode => ptr_mode,
    ReadSize => read_size,
);

impl ChannelInput for MemSep {
    fn append_to(self, channel: &mut IoChannel) {
        channel.apply_token(|it| it.format.memory_layout.apply(self));
    }
}

impl ChannelInput for Fg {
    fn append_to(self, channel: &mut IoChannel) {
        channel.apply_token(|it| it.attributes.set_fg(self));
    }
}

impl ChannelInput for Bg {
    fn append_to(self, channel: &mut IoChannel) {
        channel.apply_token(|it| it.attributes.set_bg(self));
    }
}

impl ChannelInput for TextAttr {
    fn append_to(self, channel: &mut IoChannel) {
        channel.apply_token(|it| it.attributes.set_attr(self));
    }
}

impl ChannelInput for Verbosity {
    fn append_to(self, channel: &mut IoChannel) { channel.filter.current_verbosity = self; }
}

impl ChannelInput for Category {
    fn append_to(self, channel: &mut IoChannel) { channel.filter.current_category = self; }
}

impl ChannelInput for IoSpecial {
    fn append_to(self, channel: &mut IoChannel) { channel.apply_flush_marker(self); }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{MemoryLayout, PTR_HEX_DIGITS, assert_eq2, ioc, ptr_to_string};

    fn rendered(build: impl FnOnce(&mut IoChannel)) -> String {
        let mut channel = IoChannel::new();
        build(&mut channel);
        channel.message().to_string()
    }

    #[test_case(Base::Decimal, -42, "-42")]
    #[test_case(Base::Binary, 10, "1010")]
    #[test_case(Base::Quinary, 24, "44")]
    #[test_case(Base::Duodecimal, -23, "-1b")]
    fn test_signed_in_base(base: Base, num: i32, expected: &str) {
        assert_eq2!(rendered(|it| ioc!(*it, base, num)), expected);
    }

    #[test]
    fn test_all_integer_widths() {
        let it = rendered(|it| {
            ioc!(*it, -1_i8, " ", -2_i16, " ", 3_u8, " ", 4_u16, " ", u64::MAX, " ", -5_isize);
        });
        assert_eq2!(it, "-1 -2 3 4 18446744073709551615 -5");
    }

    #[test]
    fn test_bool_and_floats() {
        let it = rendered(|it| {
            ioc!(*it, true, " ", false, " ", 2.5_f64, " ", Precision(3), 1.0_f64 / 3.0, " ");
            ioc!(*it, SciNotation::Always, 1500_f32);
        });
        assert_eq2!(it, "TRUE FALSE 2.5 0.333 1.5e+03");
    }

    #[test]
    fn test_oversized_precision_is_clamped() {
        let it = rendered(|it| ioc!(*it, Precision(70_000), 1.5_f64, " ", 0.25_f32));
        assert_eq2!(it, "1.5 0.25");
    }

    #[test]
    fn test_char_modes() {
        let it = rendered(|it| {
            ioc!(*it, 'A', 'é', CharValue::AsInt, 'A', " ", Base::Hexadecimal, 'é');
        });
        assert_eq2!(it, "Aé65 e9");
    }

    #[test]
    fn test_one_char_modes() {
        let snowman = OneChar::from('☃');
        let pair = OneChar::unicode_from_bytes(b"ab").unwrap();
        let it = rendered(|it| {
            ioc!(*it, snowman, &OneChar::ascii(b'!'), CharValue::AsInt, Base::Hexadecimal);
            ioc!(*it, " ", snowman, " ", pair);
        });
        assert_eq2!(it, "☃! 2603 61 62");
    }

    #[test]
    fn test_str_modes() {
        let text = "hi";
        let owned = String::from("yo");
        let it = rendered(|it| {
            ioc!(*it, text, &owned, owned.clone(), PtrMode::Memory, MemSep::Byte, text);
        });
        assert_eq2!(it, "hiyoyo68 69");

        let it = rendered(|it| ioc!(*it, PtrMode::Address, text));
        assert_eq2!(it, ptr_to_string(text.as_ptr().addr(), NumeralCase::Lower));
    }

    #[test]
    fn test_cstr_memory_includes_nul() {
        let it = rendered(|it| ioc!(*it, c"ok", PtrMode::Memory, c"ok"));
        assert_eq2!(it, "ok6f6b00");
    }

    #[test]
    fn test_typed_pointer_modes() {
        let value = 300_i32;
        let ptr = Ptr(&value);

        assert_eq2!(rendered(|it| ioc!(*it, Base::Octal, ptr)), "454");

        let it = rendered(|it| ioc!(*it, PtrMode::Address, NumeralCase::Upper, ptr));
        assert_eq2!(it.len(), PTR_HEX_DIGITS);
        assert_eq2!(it, ptr_to_string(ptr.addr(), NumeralCase::Upper));

        let it = rendered(|it| ioc!(*it, PtrMode::Memory, ptr));
        let expected: String = value.to_ne_bytes().iter().map(|b| format!("{b:02x}")).collect();
        assert_eq2!(it, expected);
    }

    #[test]
    fn test_untyped_pointer_modes() {
        let bytes = [0x0a_u8, 0x0b, 0x0c];
        let ptr = UntypedPtr(&bytes);

        assert_eq2!(rendered(|it| ioc!(*it, ptr)), UNTYPED_VALUE_PLACEHOLDER);
        assert_eq2!(rendered(|it| ioc!(*it, PtrMode::Memory, ptr)), "0a");
        assert_eq2!(
            rendered(|it| ioc!(*it, PtrMode::Memory, ReadSize(8), MemSep::Byte, ptr)),
            "0a 0b 0c"
        );
    }

    #[test]
    fn test_mem_sep_tokens() {
        let mut channel = IoChannel::new();
        ioc!(channel, MemSep::Byte, MemSep::Word);
        assert_eq2!(channel.format_state().memory_layout, MemoryLayout(0b11));
        ioc!(channel, MemSep::None);
        assert_eq2!(channel.format_state().memory_layout, MemoryLayout(0));
    }

    #[test]
    fn test_background_and_attribute_tokens() {
        let it = rendered(|it| ioc!(*it, Bg::Yellow, TextAttr::Underline, "u"));
        assert_eq2!(it, "\x1b[4;43mu");
    }
}
