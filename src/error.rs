use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};
use std::net::AddrParseError;

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
        Error::env_var_error(err)
    }
}

impl From<AddrParseError> for Error {
    fn from(_: AddrParseError) -> Self {
        Error::config_error("invalid listen address")
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::database_error(err)
    }
}

impl From<oso::OsoError> for Error {
    fn from(err: oso::OsoError) -> Self {
        Error::authorizor_error(err)
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Error::token_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            103 => (StatusCode::FORBIDDEN, self.message.as_str()),
            104 => (StatusCode::NOT_FOUND, self.message.as_str()),
            105 | 106 => (StatusCode::UNAUTHORIZED, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl Error {
    pub fn invalid_state_error() -> Error {
        Error {
            code: 100,
            message: "invalid state".into(),
        }
    }

    pub fn validation_error<S: Into<String>>(message: S) -> Error {
        Error {
            code: 102,
            message: message.into(),
        }
    }

    pub fn unauthorized_error() -> Error {
        Error {
            code: 103,
            message: "unauthorized".into(),
        }
    }

    pub fn not_found_error() -> Error {
        Error {
            code: 104,
            message: "not found".into(),
        }
    }

    pub fn unauthenticated_error() -> Error {
        Error {
            code: 105,
            message: "not signed in".into(),
        }
    }

    pub fn token_error<T: Debug>(err: T) -> Error {
        tracing::warn!("rejected access token: {:?}", err);

        Error {
            code: 106,
            message: "invalid access token".into(),
        }
    }

    pub fn env_var_error(_: env::VarError) -> Error {
        Error {
            code: 1,
            message: "environment variable error".into(),
        }
    }

    pub fn database_error<T: Debug>(err: T) -> Error {
        tracing::error!("database error: {:?}", err);

        Error {
            code: 2,
            message: "database error".into(),
        }
    }

    pub fn authorizor_error<T: Debug>(err: T) -> Error {
        tracing::error!("authorizor error: {:?}", err);

        Error {
            code: 3,
            message: "authorizor error".into(),
        }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Error {
        Error {
            code: 4,
            message: message.into(),
        }
    }

    pub fn unexpected_error() -> Error {
        Error {
            code: 5,
            message: "unexpected error".into(),
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.code == 102
    }

    pub fn is_unauthorized_error(&self) -> bool {
        self.code == 103
    }
}

#[test]
fn internal_errors_hide_their_message_test() {
    let response = Error::database_error("connection reset").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = Error::validation_error("Name must be at least 2 characters").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = Error::unauthorized_error().into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = Error::unauthenticated_error().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
