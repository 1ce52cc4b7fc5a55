//! HTTP error responses.
//!
//! UseCase 層のエラーを HTTP ステータスコードと `{"message": "..."}` に変換します。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::RepositoryError,
    infrastructure::dto::http::MessageResponse,
    usecase::{
        AuthenticateError, LoginError, SendMessageError, SignupError, UpdateProfileError,
    },
};

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Logs `cause` and hides it from the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", cause);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(MessageResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        Self::internal(e)
    }
}

impl From<SignupError> for ApiError {
    fn from(e: SignupError) -> Self {
        match e {
            SignupError::MissingFields | SignupError::Invalid(_) => Self::bad_request(e.to_string()),
            SignupError::EmailTaken => Self::new(StatusCode::CONFLICT, e.to_string()),
            SignupError::Auth(_) | SignupError::Repository(_) => Self::internal(e),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(e: LoginError) -> Self {
        match e {
            LoginError::MissingFields | LoginError::InvalidCredentials => {
                Self::bad_request(e.to_string())
            }
            LoginError::Auth(_) | LoginError::Repository(_) => Self::internal(e),
        }
    }
}

impl From<AuthenticateError> for ApiError {
    fn from(e: AuthenticateError) -> Self {
        match e {
            AuthenticateError::InvalidToken => Self::unauthorized(e.to_string()),
            AuthenticateError::UserNotFound => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            AuthenticateError::Repository(_) => Self::internal(e),
        }
    }
}

impl From<UpdateProfileError> for ApiError {
    fn from(e: UpdateProfileError) -> Self {
        match e {
            UpdateProfileError::MissingProfilePic => Self::bad_request(e.to_string()),
            UpdateProfileError::UploadFailed(_) => Self::bad_request("Failed to upload image"),
            UpdateProfileError::UserNotFound => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            UpdateProfileError::Repository(_) => Self::internal(e),
        }
    }
}

impl From<SendMessageError> for ApiError {
    fn from(e: SendMessageError) -> Self {
        match e {
            SendMessageError::EmptyMessage | SendMessageError::InvalidReceiver => {
                Self::bad_request(e.to_string())
            }
            SendMessageError::UploadFailed(_) => Self::bad_request("Failed to upload image"),
            SendMessageError::PersistenceFailed(_) => Self::internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_errors_map_to_status_codes() {
        // テスト項目: 登録エラーが適切なステータスコードに変換される
        // given (前提条件):
        let cases = [
            (SignupError::MissingFields, StatusCode::BAD_REQUEST),
            (SignupError::EmailTaken, StatusCode::CONFLICT),
            (
                SignupError::Repository(RepositoryError::Unavailable("x".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            // when (操作):
            let api_error = ApiError::from(error);

            // then (期待する結果):
            assert_eq!(api_error.status, expected);
        }
    }

    #[test]
    fn test_internal_errors_hide_details() {
        // テスト項目: 内部エラーの詳細はクライアントに返さない
        // given (前提条件):
        let error = SendMessageError::PersistenceFailed(RepositoryError::Unavailable(
            "connection refused at 10.0.0.1".to_string(),
        ));

        // when (操作):
        let api_error = ApiError::from(error);

        // then (期待する結果):
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "Internal Server Error");
    }

    #[test]
    fn test_upload_failures_are_bad_requests() {
        // テスト項目: 画像アップロードの失敗は 400 "Failed to upload image"
        // given (前提条件):
        let error = SendMessageError::UploadFailed("bad base64".to_string());

        // when (操作):
        let api_error = ApiError::from(error);

        // then (期待する結果):
        assert_eq!(
            api_error,
            ApiError::bad_request("Failed to upload image")
        );
    }

    #[test]
    fn test_authentication_errors() {
        // テスト項目: 無効なトークンは 401、存在しないユーザーは 404
        // given (前提条件):
        let invalid = AuthenticateError::InvalidToken;
        let missing = AuthenticateError::UserNotFound;

        // when (操作):
        let invalid = ApiError::from(invalid);
        let missing = ApiError::from(missing);

        // then (期待する結果):
        assert_eq!(invalid.status, StatusCode::UNAUTHORIZED);
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
    }
}
