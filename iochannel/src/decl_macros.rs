// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Push a list of values and tokens into an [`crate::IoChannel`], in order. This is the
/// same as chaining [`crate::IoChannel::push`] calls.
///
/// # Example
///
/// ```
/// use r3bl_iochannel::{Base, IoChannel, IoSpecial, ioc};
///
/// let mut channel = IoChannel::new();
/// ioc!(channel, "x = ", Base::Binary, 5, IoSpecial::EndLineKeep);
/// assert_eq!(channel.message(), "x = 101\n");
/// ```
#[macro_export]
macro_rules! ioc {
    (
        $channel:expr
        $(, $item:expr)* $(,)?
    ) => {{
        let channel: &mut $crate::IoChannel = &mut $channel;
        $(
            channel.push($item);
        )*
    }};
}
