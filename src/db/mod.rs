use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

pub const USERS_COLLECTION: &str = "users";
pub const QUIZZES_COLLECTION: &str = "quizzes";

const APP_NAME: &str = "learnforge-server";

/// Handle to the configured database. Cloning shares the client pool.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Connects and pings the database once.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_options(client_options(config).await?)?;
        let inner = client.database(&config.mongo_db_name);

        inner.run_command(doc! { "ping": 1 }).await?;

        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);
        Ok(Self { inner })
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.inner.collection(collection_name)
    }
}

async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;

    options.app_name = Some(APP_NAME.to_string());
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.max_pool_size = Some(10);
    options.min_pool_size = Some(2);
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Database>();
    }

    #[tokio::test]
    async fn test_client_options_from_config() {
        let options = client_options(&Config::test_config()).await.unwrap();

        assert_eq!(options.app_name.as_deref(), Some(APP_NAME));
        assert_eq!(options.max_pool_size, Some(10));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(5)));
        assert!(options.server_api.is_some());
    }
}
