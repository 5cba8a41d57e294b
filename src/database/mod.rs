use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

use crate::config::SeedConfig;
use crate::models::User;
use crate::utils::AppError;

pub const USERS_COLLECTION: &str = "users";

pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn connect(config: &SeedConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.mongo_url).await?;

        // Falha rápido se o banco estiver fora do ar
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        if config.unique_email_index {
            mongodb.ensure_unique_email_index().await?;
        }

        Ok(mongodb)
    }

    /// Unique index on `users.email`. Off by default: uniqueness is normally
    /// enforced by the seeder's lookup before each insert.
    async fn ensure_unique_email_index(&self) -> Result<(), AppError> {
        log::info!("🔧 Creating unique index on {}(email)...", USERS_COLLECTION);

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.users().create_index(index).await?;

        log::info!("   ✅ Index ready: {}(email)", USERS_COLLECTION);
        Ok(())
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(USERS_COLLECTION)
    }

    /// Mesma collection sem tipagem: documentos gravados pela plataforma
    /// não precisam seguir o formato de `User`.
    pub fn raw_users(&self) -> Collection<Document> {
        self.db.collection(USERS_COLLECTION)
    }

    #[cfg(test)]
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Fecha o client. Consome a conexão: só pode ser chamado uma vez.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
