//! Application configuration.
//!
//! Settings come from the environment (a `.env` file is honored when
//! present), prefixed `PETCLINIC` with `__` separating nesting levels:
//! `PETCLINIC__PAGINATION__OWNER_PAGE_SIZE=10`.

use serde::Deserialize;

mod error;

pub use error::ConfigError;

/// Page sizes for the list views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Owners per page in the find-owners listing.
    pub owner_page_size: u32,
    /// Vets per page in the vet directory.
    pub vet_page_size: u32,
    /// Items per page for programmatic consumers.
    pub api_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            owner_page_size: 5,
            vet_page_size: 5,
            api_page_size: 10,
        }
    }
}

/// Top-level configuration for the clinic services.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    pub pagination: PaginationConfig,
}

impl ClinicConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// - `Load` if the environment cannot be deserialized
    /// - `Validation` if a loaded value is unusable
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("PETCLINIC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks that every page size is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, size) in [
            ("pagination.owner_page_size", self.pagination.owner_page_size),
            ("pagination.vet_page_size", self.pagination.vet_page_size),
            ("pagination.api_page_size", self.pagination.api_page_size),
        ] {
            if size == 0 {
                return Err(ConfigError::validation(field, "must be positive"));
            }
            if size > 100 {
                return Err(ConfigError::validation(field, "must be at most 100"));
            }
        }
        Ok(())
    }
}
