use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found with id: {0}")]
    NotFound(i32),

    #[error("The format of the date must be yyyy-MM-dd")]
    InvalidDateFormat,

    #[error("'from' date must be before 'to' date")]
    InvalidDateRange,

    #[error("Date of birth must be in the past")]
    DateOfBirthNotInPast,

    #[error("User is not above minimum age")]
    MinimumAgeNotMet,

    #[error("User with email {0} already exists")]
    EmailAlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound(err.to_string()),
            UserError::InvalidDateFormat
            | UserError::InvalidDateRange
            | UserError::DateOfBirthNotInPast
            | UserError::MinimumAgeNotMet
            | UserError::EmailAlreadyExists(_) => AppError::BadRequest(err.to_string()),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
