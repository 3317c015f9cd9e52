//! MongoDB seeding utilities.

use std::time::Duration;

use bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::MongoConfig;
use crate::generators::{GeneratedExamination, GeneratedLabTest, GeneratedShop, GeneratedUser};
use crate::pipeline::Dataset;

/// Delay between connection attempts.
const RETRY_DELAY: Duration = Duration::from_secs(5);

pub const USERS_COLLECTION: &str = "users";
pub const SHOPS_COLLECTION: &str = "shops";
pub const EXAMINATIONS_COLLECTION: &str = "examinations";
pub const TESTS_COLLECTION: &str = "tests";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("MongoDB error: {0}")]
    MongoDb(#[from] mongodb::error::Error),
}

/// Database seeder for inserting a generated dataset.
///
/// Records keep their string ids as `_id`; no surrogate ids are generated.
pub struct Seeder {
    client: Client,
    database: Database,
}

impl Seeder {
    /// Connects to MongoDB, retrying indefinitely with a fixed delay until
    /// the server answers a ping.
    ///
    /// Only a malformed connection string fails immediately; an unreachable
    /// server keeps the retry loop running.
    pub async fn connect(config: &MongoConfig) -> Result<Self, SeedError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.database);

        let mut attempt = 0u32;
        loop {
            match database.run_command(doc! { "ping": 1 }).await {
                Ok(_) => break,
                Err(err) => {
                    attempt += 1;
                    warn!(
                        "MongoDB connection unsuccessful (retry #{attempt} after {}s): {err}",
                        RETRY_DELAY.as_secs()
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }

        info!("MongoDB is connected");
        Ok(Self { client, database })
    }

    /// Deletes every document from the existing collections. The collections
    /// themselves are kept.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        for name in self.database.list_collection_names().await? {
            self.database
                .collection::<Document>(&name)
                .delete_many(doc! {})
                .await?;
        }

        info!("Cleared existing collections");
        Ok(())
    }

    /// Seeds all four collections in dependency order, one awaited insert per
    /// record.
    pub async fn seed_all(&self, dataset: &Dataset) -> Result<(), SeedError> {
        self.seed_users(&dataset.users).await?;
        self.seed_shops(&dataset.shops).await?;
        self.seed_examinations(&dataset.examinations).await?;
        self.seed_tests(&dataset.tests).await?;
        Ok(())
    }

    /// Seeds users into the database.
    pub async fn seed_users(&self, users: &[GeneratedUser]) -> Result<(), SeedError> {
        info!("Seeding {} users...", users.len());

        let collection = self.collection(USERS_COLLECTION);
        for user in users {
            collection.insert_one(user_document(user)).await?;
        }

        info!("Seeded {} users", users.len());
        Ok(())
    }

    /// Seeds shops into the database.
    pub async fn seed_shops(&self, shops: &[GeneratedShop]) -> Result<(), SeedError> {
        info!("Seeding {} shops...", shops.len());

        let collection = self.collection(SHOPS_COLLECTION);
        for shop in shops {
            collection.insert_one(shop_document(shop)).await?;
        }

        info!("Seeded {} shops", shops.len());
        Ok(())
    }

    /// Seeds examinations into the database.
    pub async fn seed_examinations(
        &self,
        examinations: &[GeneratedExamination],
    ) -> Result<(), SeedError> {
        info!("Seeding {} examinations...", examinations.len());

        let collection = self.collection(EXAMINATIONS_COLLECTION);
        for examination in examinations {
            collection
                .insert_one(examination_document(examination))
                .await?;
        }

        info!("Seeded {} examinations", examinations.len());
        Ok(())
    }

    /// Seeds lab tests into the database.
    pub async fn seed_tests(&self, tests: &[GeneratedLabTest]) -> Result<(), SeedError> {
        info!("Seeding {} tests...", tests.len());

        let collection = self.collection(TESTS_COLLECTION);
        for test in tests {
            collection.insert_one(lab_test_document(test)).await?;
        }

        info!("Seeded {} tests", tests.len());
        Ok(())
    }

    /// Closes the connection; call after the last write.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

fn user_document(user: &GeneratedUser) -> Document {
    doc! {
        "_id": &user.id,
        "email": &user.email,
        "password": &user.password,
        "ward": &user.ward,
        "firstName": &user.first_name,
        "lastName": &user.last_name,
        "permissionFlags": user.permission_flags,
    }
}

fn shop_document(shop: &GeneratedShop) -> Document {
    let mut document = doc! {
        "_id": &shop.id,
        "name": &shop.name,
        "address": &shop.address,
        "ward": &shop.ward,
        "phone": &shop.phone,
        "type": &shop.shop_type,
    };

    // Uncertified shops carry neither field, matching the import format.
    if let Some(is_valid) = shop.is_valid {
        document.insert("isValid", is_valid);
    }
    if let Some(valid_before) = shop.valid_before {
        document.insert("validBefore", bson::DateTime::from_time_0_3(valid_before));
    }

    document
}

fn examination_document(examination: &GeneratedExamination) -> Document {
    doc! {
        "_id": &examination.id,
        "from": bson::DateTime::from_time_0_3(examination.from),
        "to": bson::DateTime::from_time_0_3(examination.to),
        "shop_id": &examination.shop_id,
        "status": &examination.status,
        "test_id": &examination.test_id,
    }
}

fn lab_test_document(test: &GeneratedLabTest) -> Document {
    doc! {
        "_id": &test.id,
        "taken": bson::DateTime::from_time_0_3(test.taken),
        "status": &test.status,
        "result": &test.result,
        "processing_unit": &test.processing_unit,
        "result_date": bson::DateTime::from_time_0_3(test.result_date),
    }
}
