// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! The channel itself never fails on the append or flush paths. Rejected input either
//! becomes a no-op, or shows up as visible text in the message. The errors here are only
//! returned by the handful of host facing operations that can genuinely go wrong.

use crate::SubscriberId;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// The operations in this crate return their own error enums. This alias is for callers
/// that mix several of them, since each one converts into a [`miette::Report`] via `?`.
///
/// ```
/// use r3bl_iochannel::{CommonResult, IoChannel, OneChar};
///
/// fn retire_subscriber(channel: &mut IoChannel) -> CommonResult<OneChar> {
///     let id = channel.subscribe_all(|_, _, _| {});
///     channel.unsubscribe(id)?;
///     let it = OneChar::try_from("ü")?;
///     Ok(it)
/// }
///
/// assert_eq!(retire_subscriber(&mut IoChannel::new()).unwrap(), "ü");
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Errors returned by [`crate::IoChannel`] management operations.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum IoChannelError {
    #[error("No subscriber is registered with handle {id}")]
    #[diagnostic(
        code(r3bl_iochannel::subscriber_not_found),
        help("The handle may have been removed already, or belongs to another channel")
    )]
    SubscriberNotFound { id: SubscriberId },

    #[error("Could not write to the process output")]
    #[diagnostic(code(r3bl_iochannel::process_output))]
    ProcessOutput {
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned when assigning a byte sequence to a [`crate::OneChar`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, miette::Diagnostic)]
pub enum OneCharError {
    #[error("Byte sequence has {len} significant bytes, at most {max} fit")]
    #[diagnostic(code(r3bl_iochannel::one_char::too_many_bytes))]
    TooManyBytes { len: usize, max: usize },

    #[error("ASCII character can't hold a sequence of {len} significant bytes")]
    #[diagnostic(
        code(r3bl_iochannel::one_char::ascii_overflow),
        help("Use a Unicode character unit for multi byte UTF-8 sequences")
    )]
    AsciiOverflow { len: usize },
}
