use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::Profile};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<Profile>>;
    /// Inserts or fully replaces the profile for `profile.user_id`.
    async fn upsert(&self, profile: Profile) -> AppResult<Profile>;
}

pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.profiles_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for profiles collection");

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_id_index).await?;

        log::info!("Successfully created indexes for profiles collection");
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<Profile>> {
        let profile = self
            .collection
            .find_one(doc! { "user_id": user_id })
            .await?;
        Ok(profile)
    }

    async fn upsert(&self, profile: Profile) -> AppResult<Profile> {
        self.collection
            .replace_one(doc! { "user_id": &profile.user_id }, &profile)
            .upsert(true)
            .await?;
        Ok(profile)
    }
}
