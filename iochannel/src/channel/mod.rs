// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod channel_input;
pub mod echo;
pub mod format_state;
pub mod global_io_channel;
pub mod io_channel;
pub mod pointers;
pub mod subscribers;

// Re-export.
pub use channel_input::*;
pub use echo::*;
pub use format_state::*;
pub use io_channel::*;
pub use pointers::*;
pub use subscribers::*;
