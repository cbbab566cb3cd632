// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_iochannel
//!
//! A small, embeddable output channel for diagnostic messages, paired with a one
//! character unit type ([`OneChar`]) that covers both single byte ASCII and multi byte
//! UTF-8 codepoints.
//!
//! ## The channel
//!
//! [`IoChannel`] accumulates a message from a stream of heterogeneous values and
//! formatting tokens, then dispatches the finished message to subscribers when it sees a
//! flush marker ([`IoSpecial`]).
//!
//! ```text
//! host ──push(value | token)──▶ IoChannel ──render──▶ message buffer
//!                                   │                      │
//!                                   │ IoSpecial::End       │
//!                                   ▼                      ▼
//!                         verbosity subscribers (fall-through)
//!                         category subscribers
//!                         "all" subscribers
//!                         echo (stdout / process output)
//! ```
//!
//! - Values are rendered according to the current [`FormatState`]: numeric [`Base`],
//!   [`NumeralCase`], [`SciNotation`], [`Precision`], [`CharValue`], [`PtrMode`],
//!   [`ReadSize`], [`MemSep`].
//! - Terminal attributes ([`Fg`], [`Bg`], [`TextAttr`]) are emitted lazily as a single
//!   ANSI SGR sequence right before the next piece of content.
//! - Every message carries a [`Verbosity`] and a [`Category`]. The channel drops
//!   anything the filter (see [`IoChannel::mute_category`],
//!   [`IoChannel::mute_verbosity`]) rejects.
//!
//! ```
//! use r3bl_iochannel::{Base, Fg, IoChannel, IoSpecial, NumeralCase, ioc};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let mut channel = IoChannel::new();
//! let seen = Rc::new(RefCell::new(Vec::<String>::new()));
//! let seen_clone = seen.clone();
//! channel.subscribe_all(move |msg, _vrb, _cat| seen_clone.borrow_mut().push(msg.into()));
//!
//! ioc!(channel, Base::Hexadecimal, NumeralCase::Upper, 255, IoSpecial::End);
//! ioc!(channel, Fg::Red, "err", IoSpecial::End);
//!
//! assert_eq!(seen.borrow()[0], "FF\n");
//! assert_eq!(seen.borrow()[1], "\x1b[0;31merr\x1b[0m\n");
//! ```
//!
//! ## The character unit
//!
//! [`OneChar`] is a tagged sum of [`AsciiChar`] (one byte) and [`UniChar`] (a fixed 5
//! byte slot holding a NUL terminated UTF-8 sequence of 1 to 4 bytes). Equality and
//! ordering compare the significant bytes, regardless of the variant.
//!
//! ```
//! use r3bl_iochannel::OneChar;
//!
//! let snowman = OneChar::unicode_from_bytes(&[0xE2, 0x98, 0x83, 0x00]).unwrap();
//! assert_eq!(snowman.len(), 3);
//! assert_eq!(snowman.to_string(), "☃");
//! assert_ne!(snowman, OneChar::ascii(b'a'));
//! ```
//!
//! ## Threading
//!
//! The channel is single threaded and not re-entrant. Subscriber callbacks run inline
//! on the thread that pushed the flush marker, and must not push into the same channel.
//! The convenience instance in [`global_io_channel`] is thread local for this reason.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
// Only deny unwrap_in_result in production code, allow in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod channel;
pub mod common;
pub mod decl_macros;
pub mod format_tokens;
pub mod number_fmt;
pub mod one_char;

// Re-export.
pub use channel::*;
pub use common::*;
pub use format_tokens::*;
pub use number_fmt::*;
pub use one_char::*;
