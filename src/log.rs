//! Logging shim for non-fatal failures.
//!
//! Real output is only available on targets with `esp-println` support;
//! everywhere else the message is formatted away at compile time.

#[cfg(feature = "esp32-log")]
macro_rules! engine_log {
    ($($arg:tt)*) => {
        ::esp_println::println!($($arg)*)
    };
}

#[cfg(not(feature = "esp32-log"))]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        let _ = ::core::format_args!($($arg)*);
    }};
}
