use std::fmt;

use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::RequestId;
use thiserror::Error;

/// Which side produced a rejection, derived from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Client,
    Service,
    Unknown,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => ErrorKind::Client,
            500..=599 => ErrorKind::Service,
            _ => ErrorKind::Unknown,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Client => "Client",
            ErrorKind::Service => "Service",
            ErrorKind::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Details of an error response returned by a reachable service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRejection {
    pub message: String,
    pub status: u16,
    pub code: Option<String>,
    pub kind: ErrorKind,
    pub request_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("{service} rejected the request: {}", .rejection.message)]
    Rejected {
        service: &'static str,
        rejection: ServiceRejection,
    },

    #[error("could not reach {service}: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    #[error("cannot load AWS credentials: {0}")]
    Credentials(String),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state file error: {0}")]
    StateFile(#[from] serde_json::Error),
}

impl SetupError {
    /// Splits an SDK failure into a service rejection or a transport failure.
    /// A response the client could not parse still came from the service.
    pub fn from_sdk<E>(service: &'static str, err: SdkError<E, HttpResponse>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        match &err {
            SdkError::ServiceError(ctx) => {
                let status = ctx.raw().status().as_u16();
                let inner = ctx.err();
                SetupError::Rejected {
                    service,
                    rejection: ServiceRejection {
                        message: inner
                            .message()
                            .map(str::to_string)
                            .unwrap_or_else(|| inner.to_string()),
                        status,
                        code: inner.code().map(str::to_string),
                        kind: ErrorKind::from_status(status),
                        request_id: inner.meta().request_id().map(str::to_string),
                    },
                }
            }
            SdkError::ResponseError(ctx) => {
                let status = ctx.raw().status().as_u16();
                SetupError::Rejected {
                    service,
                    rejection: ServiceRejection {
                        message: DisplayErrorContext(&err).to_string(),
                        status,
                        code: None,
                        kind: ErrorKind::from_status(status),
                        request_id: None,
                    },
                }
            }
            _ => SetupError::Transport {
                service,
                message: DisplayErrorContext(&err).to_string(),
            },
        }
    }

    /// Operator-facing description, one line per fact.
    pub fn report(&self) -> Vec<String> {
        match self {
            SetupError::Rejected { service, rejection } => {
                vec![
                    format!(
                        "The request made it to {service}, but was rejected with an error response."
                    ),
                    format!("Error Message:    {}", rejection.message),
                    format!("HTTP Status Code: {}", rejection.status),
                    format!(
                        "AWS Error Code:   {}",
                        rejection.code.as_deref().unwrap_or("-")
                    ),
                    format!("Error Type:       {}", rejection.kind),
                    format!(
                        "Request ID:       {}",
                        rejection.request_id.as_deref().unwrap_or("-")
                    ),
                ]
            }
            SetupError::Transport { service, message } => vec![
                format!(
                    "The client could not communicate with {service}, e.g. the network is unreachable."
                ),
                format!("Error Message: {message}"),
            ],
            other => vec![other.to_string()],
        }
    }
}

pub type SetupResult<T> = Result<T, SetupError>;
