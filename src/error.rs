mod error_kind;

pub use self::error_kind::ErrorKind;
use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use std::fmt::{Display, Formatter};

/// Application specific error used across the server.
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub root_cause: anyhow::Error,
}

impl Error {
    /// Creates a client-side error with the specified message.
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ClientError,
            root_cause: anyhow::anyhow!(message.into()),
        }
    }

    /// Creates a client-side error preserving the specified root cause.
    #[allow(dead_code)]
    pub fn client_with_root_cause(root_cause: anyhow::Error) -> Self {
        Self {
            kind: ErrorKind::ClientError,
            root_cause,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root_cause)
    }
}

impl From<anyhow::Error> for Error {
    fn from(root_cause: anyhow::Error) -> Self {
        // Preserve the original error kind if the root cause is already a server error.
        match root_cause.downcast::<Error>() {
            Ok(error) => error,
            Err(root_cause) => Self {
                kind: ErrorKind::Unknown,
                root_cause,
            },
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::ClientError => StatusCode::BAD_REQUEST,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self.kind {
            // Client errors are safe to return to the caller as-is.
            ErrorKind::ClientError => HttpResponse::BadRequest().body(self.root_cause.to_string()),
            ErrorKind::Unknown => HttpResponse::InternalServerError().finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorKind};
    use actix_web::ResponseError;
    use anyhow::anyhow;

    #[test]
    fn can_create_client_errors() {
        let error = Error::client("Uh oh.");
        assert_eq!(error.kind, ErrorKind::ClientError);
        assert_eq!(error.to_string(), "Uh oh.");
        assert_eq!(error.status_code(), 400);

        let error = Error::client_with_root_cause(anyhow!("Root cause.").context("Uh oh."));
        assert_eq!(error.kind, ErrorKind::ClientError);
        assert_eq!(error.to_string(), "Uh oh.");
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn wraps_unknown_errors() {
        let error = Error::from(anyhow!("Something went wrong."));
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert_eq!(error.status_code(), 500);
    }

    #[test]
    fn preserves_kind_when_downcasting() {
        let error = Error::from(anyhow!(Error::client("Uh oh.")));
        assert_eq!(error.kind, ErrorKind::ClientError);
        assert_eq!(error.to_string(), "Uh oh.");
    }
}
