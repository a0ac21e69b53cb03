use crate::{database::Database, users::User};
use sqlx::Row;
use uuid::Uuid;

/// Extends primary database with the users-related methods.
impl Database {
    /// Retrieves user from the database using id.
    pub async fn get_user_row(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(
            sqlx::query_as::<_, User>(r#"SELECT id, email, created_at FROM users WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    /// Inserts a new user to the database.
    pub async fn insert_user_row(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(r#"INSERT INTO users (id, email, created_at) VALUES ($1, $2, $3)"#)
            .bind(user.id)
            .bind(user.email.clone())
            .bind(user.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Retrieves the email address of the user with the specified id, if there is one.
    pub async fn get_user_email(&self, id: Uuid) -> anyhow::Result<Option<String>> {
        Ok(
            sqlx::query(r#"SELECT email FROM users WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .and_then(|row| row.get::<Option<String>, _>(0)),
        )
    }
}
