use dioxus::prelude::ServerFnError;
use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A serializable error for client rendering.
///
/// When `RUST_BACKTRACE=1` is set, the message will include the full backtrace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    /// The error message (includes the context chain from anyhow's Debug output)
    pub message: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        Self {
            message: format!("{:?}", report),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self { message: s }
    }
}

impl From<Error> for ServerFnError {
    fn from(error: Error) -> Self {
        ServerFnError::ServerError {
            message: error.message,
            code: 500,
            details: None,
        }
    }
}

/// Build an ad-hoc error with `format!` syntax.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::internal_anyhow_dont_use!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn anyhow_context_is_kept_in_message() {
        let report = Err::<(), _>(crate::err!("file not found"))
            .context("failed to load roster")
            .unwrap_err();
        let error = Error::from(report);

        assert!(error.message.contains("failed to load roster"));
        assert!(error.message.contains("file not found"));
    }

    #[test]
    fn display_is_the_message() {
        let error = Error::from("bad locale");
        assert_eq!(error.to_string(), "bad locale");
    }
}
