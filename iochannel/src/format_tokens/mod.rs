// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Format modifier values. Each one carries a single formatting decision, and is pushed
//! into an [`crate::IoChannel`] just like any other value.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod filter_tokens;
pub mod flush_markers;
pub mod numeric;
pub mod pointer;
pub mod sgr_attrs;

// Re-export.
pub use filter_tokens::*;
pub use flush_markers::*;
pub use numeric::*;
pub use pointer::*;
pub use sgr_attrs::*;
