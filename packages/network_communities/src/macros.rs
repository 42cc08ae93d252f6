// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

/// Prints a timestamped message when the calling crate is compiled with its `logging` feature.
/// The feature check happens in the crate that expands the macro, so callers outside this crate
/// need their own `logging` feature and a `chrono` dependency.
#[macro_export]
macro_rules! log {
    ($message:expr) => {{
        #[cfg(feature = "logging")]
        {
            use chrono::Local;
            println!("{}: {}", Local::now().format("%H:%M:%S%.3f"), $message);
        }
    }};
    ($fmt:expr, $($args:tt)*) => {{
        #[cfg(feature = "logging")]
        {
            use chrono::Local;
            let message = format!($fmt, $($args)*);
            println!("{}: {}", Local::now().format("%H:%M:%S%.3f"), message);
        }
    }};
}
