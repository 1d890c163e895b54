//! Generic error handling utilities
//!
//! Provides unified error reporting that works across the harness and
//! configuration error types.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`; otherwise it should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the user can act on directly
    ///
    /// Examples of user-actionable errors:
    /// - Malformed script lines
    /// - Configuration values out of range
    ///
    /// Examples of system errors:
    /// - IO failures
    /// - Allocation failures
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log errors with a detail level matching how actionable they are
///
/// User-actionable errors log their own message; system errors log the
/// operation context, with the full error only at debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
