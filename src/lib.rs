//! Test data generation for a food-safety inspection service.
//!
//! This crate generates internally consistent wards, users, shops,
//! examinations, and lab tests from a single master seed, then hands the
//! collections to a JSON file sink and/or a MongoDB sink.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use foodsafe_data::{auth, files, pipeline};
//! use time::OffsetDateTime;
//!
//! let hash = auth::hash_password("admin")?;
//! let dataset = pipeline::generate(42, &hash, OffsetDateTime::now_utc());
//! files::write_dataset("./data".as_ref(), &dataset)?;
//! ```

pub mod auth;
pub mod config;
pub mod db;
pub mod files;
pub mod generators;
pub mod ids;
pub mod pipeline;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DEFAULT_SEED, MongoConfig, StageSeeds};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::files::write_dataset;
    pub use crate::generators::{
        ExaminationGenerator, GeneratedExamination, GeneratedLabTest, GeneratedShop, GeneratedUser,
        LabTestGenerator, ShopGenerator, UserGenerator, WardGenerator,
    };
    pub use crate::pipeline::{Dataset, generate};
}
