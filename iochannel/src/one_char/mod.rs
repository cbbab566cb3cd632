// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod ascii_char;
pub mod one_char_impl;
pub mod one_char_iter;
pub mod uni_char;

// Re-export.
pub use ascii_char::*;
pub use one_char_impl::*;
pub use one_char_iter::*;
pub use uni_char::*;
