use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by storage on creation, never reused
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique across users
    pub email: String,
    #[schema(example = "1990-01-31")]
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl User {
    /// Overlays the supplied fields of `update`; `id` is never touched.
    ///
    /// `date_of_birth` is the already-parsed form of `update.date_of_birth`.
    pub fn apply_update(&mut self, update: UpdateUser, date_of_birth: Option<NaiveDate>) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(date_of_birth) = date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(phone_number) = update.phone_number {
            self.phone_number = Some(phone_number);
        }
    }
}

/// A user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl NewUser {
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            address: self.address,
            phone_number: self.phone_number,
        }
    }
}

/// Argument to `UserRepository::save`: insert or overwrite by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRecord {
    New(NewUser),
    Existing(User),
}

impl UserRecord {
    pub fn email(&self) -> &str {
        match self {
            UserRecord::New(user) => &user.email,
            UserRecord::Existing(user) => &user.email,
        }
    }
}

/// DTO for registering a user
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    /// `YYYY-MM-DD`, strictly before today
    #[schema(example = "1990-01-31")]
    pub date_of_birth: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// DTO for a partial update; absent fields keep their stored value.
///
/// JSON `null` reads the same as an absent field, so `address` and
/// `phoneNumber` cannot be cleared through an update.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "Email must be valid"))]
    pub email: Option<String>,
    /// `YYYY-MM-DD`, strictly before today
    #[schema(example = "1990-01-31")]
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Inclusive birthday search bounds, both `YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BirthdayRange {
    #[param(example = "1990-01-01")]
    pub from: String,
    #[param(example = "1999-12-31")]
    pub to: String,
}

/// Plain confirmation body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
