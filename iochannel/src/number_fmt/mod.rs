// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stateless conversions from numbers, addresses, and raw memory into text. The channel
//! calls these with values taken from its [`crate::FormatState`].

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod float_fmt;
pub mod int_fmt;
pub mod mem_dump;
pub mod ptr_fmt;

// Re-export.
pub use float_fmt::*;
pub use int_fmt::*;
pub use mem_dump::*;
pub use ptr_fmt::*;
