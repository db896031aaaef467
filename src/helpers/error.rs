//! Error message rendering.

/// Renders an [`Error`] and its whole [`source`] chain, one `caused by:` line per source.
///
/// A backtrace is appended when one can be captured (see [`backtrace_message`]). Used to log
/// server errors and to fill `internal_error` in development API responses.
///
/// [`Error`]: std::error::Error
/// [`source`]: std::error::Error::source
#[cfg(not(tarpaulin_include))]
pub fn recursive_error_message<E>(error: &E) -> String
where
    E: std::error::Error,
{
    let sources = std::iter::successors(error.source(), |source| source.source());
    let mut message = sources.fold(error.to_string(), |mut message, source| {
        message.push_str("\ncaused by: ");
        message.push_str(&source.to_string());
        message
    });

    if let Some(backtrace) = backtrace_message(error) {
        message.push_str("\n\nBacktrace: ");
        message.push_str(&backtrace);
    }

    message
}

/// Returns the error's [`Backtrace`](std::backtrace::Backtrace), pretty-printed, if it carries one.
///
/// Only available on nightly (the build script sets `backtrace_support`); otherwise always `None`.
#[cfg(not(tarpaulin_include))]
#[cfg(backtrace_support)]
pub fn backtrace_message<E>(error: &E) -> Option<String>
where
    E: std::error::Error,
{
    std::error::request_ref::<std::backtrace::Backtrace>(error)
        .map(|backtrace| format!("{:#}", backtrace))
}

#[cfg(not(tarpaulin_include))]
#[cfg(not(backtrace_support))]
#[doc(hidden)]
pub fn backtrace_message<E>(_error: &E) -> Option<String>
where
    E: std::error::Error,
{
    None
}
