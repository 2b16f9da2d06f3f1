//! Process-level error type.
//!
//! Exit codes are part of the CLI contract:
//!
//! - `2` — file-surface errors: missing input, unreadable source, write failure
//! - `3` — malformed source structure: short rows, dates outside the expected format
//! - `4` — internal invariant violations (should never be user-visible)

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// An invariant violation inside the pipeline, not a user error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(4, format!("Internal error: {}", message.into()))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
