use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{User, UserRecord},
    repository::UserRepository,
};

/// PostgreSQL implementation of [`UserRepository`].
///
/// Email uniqueness is backed by the `users.email` unique constraint.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn internal(err: DbErr) -> UserError {
    UserError::Internal(format!("Database error: {}", err))
}

fn map_save_error(err: DbErr, email: &str) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            UserError::EmailAlreadyExists(email.to_string())
        }
        _ => internal(err),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(Into::into))
    }

    async fn find_by_birthday_range(&self, from: NaiveDate, to: NaiveDate) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .filter(entity::Column::DateOfBirth.between(from, to))
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, record: UserRecord) -> UserResult<User> {
        let email = record.email().to_string();

        let model = match record {
            UserRecord::New(new_user) => {
                let model = entity::ActiveModel::from(new_user)
                    .insert(&self.db)
                    .await
                    .map_err(|e| map_save_error(e, &email))?;
                tracing::info!(user_id = model.id, "Created user");
                model
            }
            UserRecord::Existing(user) => {
                let id = user.id;
                let model = entity::ActiveModel::from(user)
                    .update(&self.db)
                    .await
                    .map_err(|e| match e {
                        DbErr::RecordNotUpdated => UserError::NotFound(id),
                        e => map_save_error(e, &email),
                    })?;
                tracing::info!(user_id = model.id, "Updated user");
                model
            }
        };

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> UserResult<()> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(internal)?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, email: &str) -> entity::Model {
        entity::Model {
            id,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: email.into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: None,
            phone_number: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "jane@example.com")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo.find_by_id(3).await.unwrap().unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_insert_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(10, "new@example.com")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo
            .save(UserRecord::New(NewUser {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "new@example.com".into(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                address: None,
                phone_number: None,
            }))
            .await
            .unwrap();

        assert_eq!(user.id, 10);
    }

    #[tokio::test]
    async fn test_query_error_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let result = repo.find_all().await;

        assert!(matches!(result, Err(UserError::Internal(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(repo.delete_by_id(99).await.is_ok());
    }
}
