use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Bug not found: {0}")]
    BugNotFound(String),

    #[error("Vote already in flight: {0}")]
    VoteInFlight(String),

    #[error("Vote commit failed: {0}")]
    VoteCommitFailed(String),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let detail = |prefix: &str| s.trim_start_matches(prefix).to_string();

        if s.starts_with("Bug not found: ") {
            Ok(AppError::BugNotFound(detail("Bug not found: ")))
        } else if s.starts_with("Vote already in flight: ") {
            Ok(AppError::VoteInFlight(detail("Vote already in flight: ")))
        } else if s.starts_with("Vote commit failed: ") {
            Ok(AppError::VoteCommitFailed(detail("Vote commit failed: ")))
        } else if s.starts_with("Invalid submission: ") {
            Ok(AppError::InvalidSubmission(detail("Invalid submission: ")))
        } else if s.starts_with("Submission failed: ") {
            Ok(AppError::SubmissionFailed(detail("Submission failed: ")))
        } else if s.starts_with("Notification not found: ") {
            Ok(AppError::NotificationNotFound(detail(
                "Notification not found: ",
            )))
        } else if s.starts_with("Invalid input: ") {
            Ok(AppError::InvalidInput(detail("Invalid input: ")))
        } else if s.starts_with("Rate limited: ") {
            Ok(AppError::RateLimited(detail("Rate limited: ")))
        } else if s.contains("timeout") {
            Ok(AppError::Timeout)
        } else {
            Ok(AppError::Internal(s.to_string()))
        }
    }
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::BugNotFound(_) => "That bug report no longer exists.",
            Self::VoteInFlight(_) => "Hang on, your last vote is still being counted.",
            Self::VoteCommitFailed(_) => "Your vote could not be saved. It has been undone.",
            Self::InvalidSubmission(msg) => msg,
            Self::SubmissionFailed(_) => "The bug report could not be submitted. Try again.",
            Self::NotificationNotFound(_) => "That notification is gone.",
            Self::InvalidInput(msg) => msg,
            Self::RateLimited(msg) => msg,
            Self::Timeout => "The request took too long. Try again.",
            Self::Internal(_) => "Something went wrong on our side. Try again later.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::BugNotFound(_) | AppError::NotificationNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                AppError::VoteInFlight(_) => StatusCode::CONFLICT,
                AppError::InvalidSubmission(_) | AppError::InvalidInput(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                AppError::VoteCommitFailed(_) | AppError::SubmissionFailed(_) => {
                    StatusCode::BAD_GATEWAY
                }
                AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = self.user_message().to_string();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_display() {
        let errors = [
            AppError::BugNotFound("42".to_string()),
            AppError::VoteInFlight("2".to_string()),
            AppError::InvalidSubmission("Title is required".to_string()),
            AppError::RateLimited("slow down".to_string()),
            AppError::Timeout,
        ];
        for error in errors {
            let parsed: AppError = error.to_string().parse().unwrap();
            assert_eq!(parsed, error);
        }
    }

    #[test]
    fn test_unknown_message_is_internal() {
        let parsed: AppError = "boom".parse().unwrap();
        assert_eq!(parsed, AppError::Internal("boom".to_string()));
    }

    #[test]
    fn test_validation_messages_reach_the_user() {
        let error = AppError::InvalidSubmission("Description is required".to_string());
        assert_eq!(error.user_message(), "Description is required");
    }

    #[test]
    fn test_serializes_as_tagged_variant() {
        let json = serde_json::to_string(&AppError::Timeout).unwrap();
        assert_eq!(json, "\"Timeout\"");
    }
}
