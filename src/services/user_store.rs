use async_trait::async_trait;
use mongodb::bson::doc;

use crate::database::MongoDB;
use crate::models::User;
use crate::utils::AppError;

/// Existence check by email plus insert: all the seeder needs from a user collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Só verifica se há documento com o email; não decodifica o documento,
    /// que pode ter sido gravado pela plataforma com outro formato.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;
    async fn insert(&self, user: &User) -> Result<(), AppError>;
}

#[async_trait]
impl UserStore for MongoDB {
    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let found = self
            .raw_users()
            .find_one(doc! { "email": email })
            .projection(doc! { "_id": 1 })
            .await?;
        Ok(found.is_some())
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        self.users().insert_one(user).await?;
        Ok(())
    }
}
