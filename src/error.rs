use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        io_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn no_route_error() -> Error {
    Error {
        code: 102,
        message: "no route found".into(),
    }
}

pub fn pickup_details_required_error() -> Error {
    Error {
        code: 103,
        message: "Pickup time and date are required.".into(),
    }
}

pub fn position_error(detail: &str) -> Error {
    tracing::warn!(detail, "device positioning failed");

    Error {
        code: 104,
        message: "Enable location or enter manually.".into(),
    }
}

pub fn location_required_error() -> Error {
    Error {
        code: 105,
        message: "location has not been captured".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 106,
        message: "not found".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::error!(%err, "request to upstream failed");

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn config_error(name: &str) -> Error {
    Error {
        code: 6,
        message: format!("invalid configuration value for {}", name),
    }
}

pub fn io_error(err: std::io::Error) -> Error {
    tracing::error!(%err, "io error");

    Error {
        code: 7,
        message: "io error".into(),
    }
}

pub fn document_error<T: Debug>(err: T) -> Error {
    tracing::error!(?err, "document generation failed");

    Error {
        code: 8,
        message: "document error".into(),
    }
}

pub fn server_error<T: Debug>(err: T) -> Error {
    tracing::error!(?err, "server error");

    Error {
        code: 9,
        message: "server error".into(),
    }
}
