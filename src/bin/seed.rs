//! Seed binary: generates the dataset and writes it to the enabled sinks.
//!
//! Run with:
//! ```
//! cargo run --bin seed -- --file --db --seed 42
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use time::OffsetDateTime;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use foodsafe_data::auth;
use foodsafe_data::config::{DEFAULT_SEED, MongoConfig};
use foodsafe_data::db::Seeder;
use foodsafe_data::files;
use foodsafe_data::pipeline;

/// Test data seeder for the food-safety inspection service.
#[derive(Debug, Parser)]
#[command(name = "seed")]
struct Args {
    /// Write the dataset as JSON files.
    #[arg(long)]
    file: bool,

    /// Write the dataset to MongoDB.
    #[arg(long)]
    db: bool,

    /// Master seed (same seed = same data). Non-numeric values fall back to
    /// the default with a warning instead of aborting.
    #[arg(long)]
    seed: Option<String>,

    /// Plaintext password, hashed once and shared by every generated user.
    #[arg(long, default_value = "admin")]
    password: String,

    /// Output directory for the file sink.
    #[arg(long, default_value = files::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// MongoDB connection string; required when --db is set.
    #[arg(long, env = "MONGO_URI")]
    mongo_uri: Option<String>,

    /// MongoDB database name.
    #[arg(long, env = "MONGO_DB", default_value = "food_safety")]
    mongo_db: String,
}

impl Args {
    /// Parses the raw seed argument, recovering to the default on bad input.
    fn master_seed(&self) -> u64 {
        match self.seed.as_deref() {
            Some(raw) => parse_seed(raw),
            None => DEFAULT_SEED,
        }
    }
}

fn parse_seed(raw: &str) -> u64 {
    raw.parse().unwrap_or_else(|_| {
        warn!("Invalid seed {raw:?}, using default {DEFAULT_SEED}");
        DEFAULT_SEED
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.master_seed();

    let hashed_password = auth::hash_password(&args.password)?;
    let dataset = pipeline::generate(seed, &hashed_password, OffsetDateTime::now_utc());

    info!("Generated dataset with seed {seed}");
    info!("  Wards: {}", dataset.wards.len());
    info!("  Users: {}", dataset.users.len());
    info!("  Shops: {}", dataset.shops.len());
    info!("  Examinations: {}", dataset.examinations.len());
    info!("  Tests: {}", dataset.tests.len());

    if args.file {
        files::write_dataset(&args.out_dir, &dataset)?;
        info!("Data generated and written to file");
    }

    if args.db {
        let uri = args
            .mongo_uri
            .clone()
            .context("MONGO_URI must be set (or pass --mongo-uri) when --db is enabled")?;
        let config = MongoConfig {
            uri,
            database: args.mongo_db.clone(),
        };

        let seeder = Seeder::connect(&config).await?;
        seeder.clear_all().await?;
        seeder.seed_all(&dataset).await?;
        seeder.shutdown().await;
        info!("Data generated and written to db");
    }

    info!("Done");
    Ok(())
}
