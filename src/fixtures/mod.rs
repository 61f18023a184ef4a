//! Fixtures
//!
//! Scenario files under `fixtures/scenarios/<name>.yml` pair catalog text with
//! named stay queries and the outcome each one should produce.

use std::{fs, path::PathBuf};

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    offers::OfferKind,
    quotes::{QueryError, Quote, StayRequest},
    records::load_catalog,
};

pub mod builder;

pub use builder::CatalogTextBuilder;

/// Fixture Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Query not found
    #[error("Query not found: {0}")]
    QueryNotFound(String),

    /// Query in the fixture is not a valid stay request
    #[error("Invalid query {name}: {source}")]
    InvalidQuery {
        /// Query name
        name: String,
        /// Validation failure
        source: QueryError,
    },
}

/// A stay query from a scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryFixture {
    /// Property to quote
    pub property: String,

    /// Check-in date
    pub check_in: Option<Date>,

    /// Stay length
    pub nights: u32,

    /// Expected outcome, if the scenario states one
    #[serde(default)]
    pub expect: Option<ExpectedQuote>,
}

/// Outcome a scenario expects for a query.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedQuote {
    /// Kind of the winning offer
    pub kind: OfferKind,

    /// Promotional text of the winning offer
    #[serde(default)]
    pub promotional_text: Option<String>,

    /// Final price; absent for unknown properties
    #[serde(default)]
    pub final_price: Option<i64>,
}

/// Scenario file contents
#[derive(Debug, Deserialize)]
struct ScenarioFixture {
    catalog: String,

    #[serde(default)]
    queries: FxHashMap<String, QueryFixture>,
}

/// A loaded scenario: its catalog and its named queries.
#[derive(Debug)]
pub struct Fixture {
    catalog: Catalog,
    queries: FxHashMap<String, QueryFixture>,
}

impl Fixture {
    /// Base path for fixture files
    pub fn base_path() -> PathBuf {
        PathBuf::from("./fixtures")
    }

    /// Load `fixtures/scenarios/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(
            Self::base_path()
                .join("scenarios")
                .join(format!("{name}.yml")),
        )
    }

    /// Load a scenario file from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path.into())?;

        Self::from_yaml(&contents)
    }

    /// Parse a scenario from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not describe a scenario.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let scenario: ScenarioFixture = serde_norway::from_str(contents)?;

        Ok(Self {
            catalog: load_catalog(&scenario.catalog),
            queries: scenario.queries,
        })
    }

    /// The scenario's catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a query by name
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario has no query with that name.
    pub fn query(&self, name: &str) -> Result<&QueryFixture, FixtureError> {
        self.queries
            .get(name)
            .ok_or_else(|| FixtureError::QueryNotFound(name.to_string()))
    }

    /// Names of every query in the scenario, sorted.
    pub fn query_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.queries.keys().map(String::as_str).collect();

        names.sort_unstable();
        names
    }

    /// Validate the named query as a stay request.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is missing or invalid.
    pub fn request(&self, name: &str) -> Result<StayRequest, FixtureError> {
        let query = self.query(name)?;

        StayRequest::new(query.property.clone(), query.check_in, query.nights).map_err(|source| {
            FixtureError::InvalidQuery {
                name: name.to_string(),
                source,
            }
        })
    }

    /// Run the named query against the scenario's catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is missing or invalid.
    pub fn quote(&self, name: &str) -> Result<Quote, FixtureError> {
        Ok(self.catalog.quote(&self.request(name)?))
    }
}
