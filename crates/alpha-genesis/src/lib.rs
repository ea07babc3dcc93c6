//! alpha-genesis
//!
//! Collaborative assembly of genesis documents. One party creates a document
//! for a chain ID; everyone else who has the chain ID appends their validator.
//!
//! - [`builder`] turns raw form fields into a checked [`GenesisValidator`].
//! - [`GenesisRegistry`] owns every document in the process and enforces the
//!   once-only creation and append-only validator rules.
//!
//! [`GenesisValidator`]: alpha_core::GenesisValidator

pub mod builder;
pub mod params;
pub mod registry;

pub use builder::{build_validator, ValidatorFields};
pub use params::{DuplicatePubKeyPolicy, RegistryConfig};
pub use registry::GenesisRegistry;
