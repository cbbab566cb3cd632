// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A ready made [`IoChannel`] for hosts that don't want to pass one around. It echoes
//! everything to stdout ([`ChannelConfig::stdout_echo`]).
//!
//! The channel isn't thread safe, so each thread gets its own instance.
//!
//! ```
//! use r3bl_iochannel::{IoSpecial, global_io_channel, ioc};
//!
//! global_io_channel::with(|ioc| {
//!     ioc!(*ioc, "hello from ", std::process::id() > 0, IoSpecial::End);
//! });
//! ```

use std::cell::RefCell;

use crate::{ChannelConfig, IoChannel};

thread_local! {
    static IO_CHANNEL: RefCell<IoChannel> =
        RefCell::new(IoChannel::new_with_config(ChannelConfig::stdout_echo()));
}

/// Run `f` with this thread's channel.
///
/// # Panics
///
/// If called again from inside `f`, including from a subscriber callback. The channel
/// is not re-entrant.
pub fn with<R>(f: impl FnOnce(&mut IoChannel) -> R) -> R {
    IO_CHANNEL.with_borrow_mut(f)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{EchoCategory, EchoMode, IoSpecial, Verbosity, assert_eq2, ioc};

    #[test]
    fn test_global_channel_keeps_state_across_calls() {
        let seen = Rc::new(RefCell::new(String::new()));
        let seen_clone = seen.clone();

        let id = with(|ioc| {
            ioc.configure_echo(EchoMode::None, Verbosity::Tmi, EchoCategory::All);
            ioc.subscribe_all(move |msg, _, _| seen_clone.borrow_mut().push_str(msg))
        });

        with(|ioc| ioc!(*ioc, "a", 1, IoSpecial::End));
        assert_eq2!(seen.borrow().as_str(), "a1\n");

        with(|ioc| ioc.unsubscribe(id)).unwrap();
    }

    #[test]
    fn test_each_thread_has_its_own_channel() {
        with(|ioc| ioc!(*ioc, "pending"));
        let other = std::thread::spawn(|| with(|ioc| ioc.message().to_string()))
            .join()
            .unwrap();
        assert_eq2!(other, "");
        with(|ioc| {
            assert_eq2!(ioc.message(), "pending");
            ioc.configure_echo(EchoMode::None, Verbosity::Tmi, EchoCategory::All);
            ioc!(*ioc, IoSpecial::End);
        });
    }
}
