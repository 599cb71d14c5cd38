//! Logging macros capturing the full call site.
//!
//! Unlike the `#[track_caller]` methods on [`Logger`](crate::Logger), the
//! macros also record the enclosing function and accept any number of
//! message parts, each converted with `LogValue::from`.
//!
//! # Examples
//!
//! ```
//! use swiftwood::prelude::*;
//! use swiftwood::{info, warning};
//!
//! let logger = Logger::new();
//!
//! // Several parts, rendered space-separated
//! let port = 8080;
//! info!(logger, "Server listening on port", port);
//!
//! // Sensitive values are censored by destinations with redaction on
//! info!(logger, "login", Censored("hunter2"));
//!
//! // Category and context
//! warning!(logger, category = Category::from("networking"), context = "retry 3/5"; "timeout");
//! ```

/// Capture the current [`Location`](crate::Location), function included.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(::std::file!(), $crate::__function_name!(), ::std::line!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Log message parts at an explicit level.
///
/// # Examples
///
/// ```
/// # use swiftwood::prelude::*;
/// # let logger = Logger::new();
/// use swiftwood::log;
/// log!(logger, Level::INFO, "Simple message");
/// log!(logger, Level::new("🔒 AUDIT", 70), "Error code:", 500);
/// log!(logger, Level::nearest(45), category = Category::from("ui"); "tapped");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, category = $category:expr, context = $context:expr; $($part:expr),+ $(,)?) => {
        $logger.emit(
            $level,
            ::std::vec![$($crate::LogValue::from($part)),+],
            $category,
            ::std::option::Option::Some($crate::LogValue::from($context)),
            $crate::location!(),
        )
    };
    ($logger:expr, $level:expr, category = $category:expr; $($part:expr),+ $(,)?) => {
        $logger.emit(
            $level,
            ::std::vec![$($crate::LogValue::from($part)),+],
            $category,
            ::std::option::Option::None,
            $crate::location!(),
        )
    };
    ($logger:expr, $level:expr, context = $context:expr; $($part:expr),+ $(,)?) => {
        $logger.emit(
            $level,
            ::std::vec![$($crate::LogValue::from($part)),+],
            $crate::Category::DEFAULT,
            ::std::option::Option::Some($crate::LogValue::from($context)),
            $crate::location!(),
        )
    };
    ($logger:expr, $level:expr, $($part:expr),+ $(,)?) => {
        $logger.emit(
            $level,
            ::std::vec![$($crate::LogValue::from($part)),+],
            $crate::Category::DEFAULT,
            ::std::option::Option::None,
            $crate::location!(),
        )
    };
}

/// Log a very-verbose message.
///
/// ```
/// # use swiftwood::prelude::*;
/// # let logger = Logger::new();
/// use swiftwood::very_verbose;
/// very_verbose!(logger, "Don't even worry");
/// ```
#[macro_export]
macro_rules! very_verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::VERY_VERBOSE, $($arg)+)
    };
}

/// Log a verbose message.
///
/// ```
/// # use swiftwood::prelude::*;
/// # let logger = Logger::new();
/// use swiftwood::verbose;
/// verbose!(logger, "Something small happened");
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::VERBOSE, $($arg)+)
    };
}

/// Log a debug message.
///
/// ```
/// # use swiftwood::prelude::*;
/// # let logger = Logger::new();
/// use swiftwood::debug;
/// debug!(logger, "Counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Log an info message.
///
/// ```
/// # use swiftwood::prelude::*;
/// # let logger = Logger::new();
/// use swiftwood::info;
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($arg)+)
    };
}

/// Log a warning message.
///
/// ```
/// # use swiftwood::prelude::*;
/// # let logger = Logger::new();
/// use swiftwood::warning;
/// warning!(logger, "Retry attempt", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARNING, $($arg)+)
    };
}

/// Log an error message.
///
/// ```
/// # use swiftwood::prelude::*;
/// # let logger = Logger::new();
/// use swiftwood::error;
/// error!(logger, "Failed successfully");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($arg)+)
    };
}
