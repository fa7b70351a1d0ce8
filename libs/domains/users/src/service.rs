use chrono::NaiveDate;
use core_config::users::UsersConfig;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::instrument;

use crate::dates::{meets_minimum_age, parse_date};
use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, UpdateUser, User, UserRecord};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    config: UsersConfig,
    clock: Arc<dyn Clock>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, config: UsersConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            config,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Replaces the source of "today" used by the date of birth checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current UTC calendar date
    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Date of birth must lie strictly before today and be at least
    /// `minimum_age` whole years back.
    fn check_date_of_birth(&self, date_of_birth: NaiveDate) -> UserResult<()> {
        let today = self.today();

        if date_of_birth >= today {
            return Err(UserError::DateOfBirthNotInPast);
        }
        if !meets_minimum_age(date_of_birth, today, self.config.minimum_age) {
            return Err(UserError::MinimumAgeNotMet);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: i32) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Registers a user.
    ///
    /// Checks run in order and the first failure wins: date format, date in
    /// the past, minimum age, then email uniqueness.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let date_of_birth = parse_date(&input.date_of_birth)?;
        self.check_date_of_birth(date_of_birth)?;

        if self.repository.find_by_email(&input.email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists(input.email));
        }

        let user = self
            .repository
            .save(UserRecord::New(NewUser {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                date_of_birth,
                address: input.address,
                phone_number: input.phone_number,
            }))
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Applies a partial update.
    ///
    /// A supplied date of birth is always age-checked, even when unchanged;
    /// without one the stored date is checked. Email uniqueness is only
    /// checked when the email actually changes.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let mut user = self.get_user_by_id(id).await?;

        let date_of_birth = input.date_of_birth.as_deref().map(parse_date).transpose()?;
        self.check_date_of_birth(date_of_birth.unwrap_or(user.date_of_birth))?;

        if let Some(email) = input.email.as_deref() {
            if email != user.email && self.repository.find_by_email(email).await?.is_some() {
                return Err(UserError::EmailAlreadyExists(email.to_string()));
            }
        }

        user.apply_update(input, date_of_birth);
        self.repository.save(UserRecord::Existing(user)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        self.get_user_by_id(id).await?;
        self.repository.delete_by_id(id).await
    }

    /// Users born between `from` and `to` inclusive, unsorted.
    #[instrument(skip(self))]
    pub async fn get_user_by_birthday_range(&self, from: &str, to: &str) -> UserResult<Vec<User>> {
        let from = parse_date(from)?;
        let to = parse_date(to)?;

        if from > to {
            return Err(UserError::InvalidDateRange);
        }

        self.repository.find_by_birthday_range(from, to).await
    }
}
