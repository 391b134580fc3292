//! Logging shim.
//!
//! With the `log` feature the macros forward to the `log` facade; without
//! it they expand to nothing at runtime while still type-checking their
//! arguments.

#[cfg(feature = "log")]
macro_rules! __trace {
    ($($arg:tt)+) => {
        ::log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! __trace {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! __debug {
    ($($arg:tt)+) => {
        ::log::debug!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! __debug {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

pub(crate) use __debug as debug;
pub(crate) use __trace as trace;
