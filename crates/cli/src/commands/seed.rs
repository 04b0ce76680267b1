//! Seed the catalog with sample appliance products.
//!
//! Intended for local development: gives the storefront and admin panel
//! something to render before any real products are entered.
//!
//! # Usage
//!
//! ```bash
//! basha-cli seed
//! ```

use rust_decimal::Decimal;
use secrecy::SecretString;
use thiserror::Error;

use basha_admin::db::{self, RepositoryError, products::ProductRepository};
use basha_admin::models::NewProduct;
use basha_core::Price;

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Sample data is invalid.
    #[error("Invalid sample data: {0}")]
    InvalidSample(String),
}

/// Sample product used for seeding.
struct Sample {
    name: &'static str,
    description: &'static str,
    specs: Option<&'static str>,
    price: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Electric Kettle 1.5L",
        description: "Stainless steel kettle with auto shut-off and boil-dry protection.",
        specs: Some("1500W, 1.5L capacity, 360-degree swivel base"),
        price: "999",
    },
    Sample {
        name: "Double Door Refrigerator 253L",
        description: "Frost-free double door refrigerator with vegetable crisper.",
        specs: Some("253L, 3 star rating, inverter compressor"),
        price: "23490",
    },
    Sample {
        name: "Split Air Conditioner 1.5 Ton",
        description: "Energy-efficient split AC with copper condenser and fast cooling.",
        specs: Some("1.5 ton, 5 star rating, inverter"),
        price: "34999",
    },
    Sample {
        name: "Front Load Washing Machine 7kg",
        description: "Fully automatic front load washer with steam wash.",
        specs: Some("7kg, 1200 RPM, 12 wash programs"),
        price: "28990",
    },
    Sample {
        name: "Mixer Grinder 750W",
        description: "Three-jar mixer grinder for wet and dry grinding.",
        specs: None,
        price: "2799.50",
    },
];

/// Insert the sample products.
///
/// Runs against an empty or populated catalog alike; duplicates are possible
/// on repeated runs, which is acceptable for development data.
///
/// # Errors
///
/// Returns `SeedError` if the connection or an insert fails.
pub async fn catalog() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;
    let repo = ProductRepository::new(&pool);

    for sample in SAMPLES {
        let amount: Decimal = sample
            .price
            .parse()
            .map_err(|_| SeedError::InvalidSample(format!("price for {}", sample.name)))?;
        let price = Price::new(amount)
            .map_err(|e| SeedError::InvalidSample(format!("{} ({e})", sample.name)))?;

        let product = repo
            .create(&NewProduct {
                name: sample.name.to_string(),
                description: sample.description.to_string(),
                specs: sample.specs.map(str::to_string),
                price,
                images: Vec::new(),
            })
            .await?;

        tracing::info!(product_id = %product.id, name = %product.name, "Seeded product");
    }

    tracing::info!("Seeded {} products", SAMPLES.len());
    Ok(())
}

fn database_url() -> Result<SecretString, SeedError> {
    std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("ADMIN_DATABASE_URL"))
}
