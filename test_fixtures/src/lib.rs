// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Helpers to capture what an [`r3bl_iochannel::IoChannel`] produces. Only used as a
//! dev dependency.

#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod message_log;
pub mod stdout_mock;

// Re-export.
pub use message_log::*;
pub use stdout_mock::*;
