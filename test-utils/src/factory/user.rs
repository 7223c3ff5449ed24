//! Local accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a user. By default the account is linked to a fresh Discord id.
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("someone@example.com")
///     .discord_id(None::<String>)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: Option<String>,
    password: Option<String>,
    discord_id: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Defaults: username `"User {n}"`, email `"user{n}@example.com"`, no password,
    /// Discord id `"{n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("User {}", id),
            email: Some(format!("user{}@example.com", id)),
            password: None,
            discord_id: Some(id.to_string()),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the stored password hash, marking the account as a password signup.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets or clears the linked Discord account id.
    pub fn discord_id(mut self, discord_id: Option<impl Into<String>>) -> Self {
        self.discord_id = discord_id.map(Into::into);
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            discord_id: ActiveValue::Set(self.discord_id),
            discord_username: ActiveValue::Set(None),
            discord_avatar: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// A Discord-linked user with default fields.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
