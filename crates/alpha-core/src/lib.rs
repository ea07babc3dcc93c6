pub mod constants;
pub mod consensus;
pub mod error;
pub mod genesis;
pub mod types;

pub use consensus::ConsensusParams;
pub use constants::*;
pub use error::{ErrorKind, GenesisError};
pub use genesis::{GenesisDoc, GenesisValidator};
pub use types::*;
