//! HTTP error responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use noughts_rules::MoveError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A refused request.
///
/// Serialized as `{"error": <kind>, "message": <text>}` so callers branch on
/// `error` and show `message` if they like.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
#[display("{}", _0)]
pub struct ApiError(MoveError);

impl std::error::Error for ApiError {}

impl ApiError {
    /// The underlying rules error.
    pub fn move_error(&self) -> &MoveError {
        &self.0
    }

    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            MoveError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            MoveError::OutOfRange(_) => StatusCode::UNPROCESSABLE_ENTITY,
            MoveError::IllegalMove(_) | MoveError::GameAlreadyOver | MoveError::OutOfTurn(_) => {
                StatusCode::CONFLICT
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(MoveError::MalformedInput(rejection.body_text()))
    }
}

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable kind, e.g. `illegal_move`.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, kind = self.0.kind(), error = %self.0, "Request refused");
        let body = ErrorBody {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_rules::{Mark, Move};

    #[test]
    fn test_statuses() {
        let cases = [
            (MoveError::MalformedInput("x".into()), StatusCode::BAD_REQUEST),
            (MoveError::OutOfRange(Move::new(3, 0)), StatusCode::UNPROCESSABLE_ENTITY),
            (MoveError::IllegalMove(Move::new(0, 0)), StatusCode::CONFLICT),
            (MoveError::GameAlreadyOver, StatusCode::CONFLICT),
            (MoveError::OutOfTurn(Mark::O), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }
}
