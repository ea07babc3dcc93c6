use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenesisError {
    // ── Chain ID errors ──────────────────────────────────────────────────────
    #[error("chainID is required")]
    ChainIdRequired,

    #[error("invalid chainID")]
    InvalidChainId,

    #[error("chain already exists")]
    ChainExists,

    #[error("genesis with such chain ID {0} not found")]
    GenesisNotFound(String),

    // ── Validator errors ─────────────────────────────────────────────────────
    #[error("incorrect validator fields")]
    IncorrectValidatorFields,

    #[error("{0}")]
    InvalidPower(#[from] ParseIntError),

    #[error("power can't be negative")]
    NegativePower,

    #[error("failed to parse pubkey: {0}")]
    InvalidPubKey(String),

    #[error("validator with this pubkey already exists")]
    DuplicatePubKey,

    // ── App data errors ──────────────────────────────────────────────────────
    #[error("invalid app hash: {0}")]
    InvalidAppHash(String),

    // ── Serialization ────────────────────────────────────────────────────────
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification of a [`GenesisError`], used by request layers to pick
/// a status code. None of the kinds are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input: chain ID, validator fields, power, public key.
    Validation,
    /// Unknown chain ID.
    NotFound,
    /// Chain ID already taken.
    Conflict,
    /// A stored document could not be encoded.
    Internal,
}

impl GenesisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenesisError::ChainIdRequired
            | GenesisError::InvalidChainId
            | GenesisError::IncorrectValidatorFields
            | GenesisError::InvalidPower(_)
            | GenesisError::NegativePower
            | GenesisError::InvalidPubKey(_)
            | GenesisError::DuplicatePubKey
            | GenesisError::InvalidAppHash(_) => ErrorKind::Validation,
            GenesisError::GenesisNotFound(_) => ErrorKind::NotFound,
            GenesisError::ChainExists => ErrorKind::Conflict,
            GenesisError::Serialization(_) => ErrorKind::Internal,
        }
    }
}

impl ErrorKind {
    /// HTTP status for a front-end serving this error. Conflicts share 406
    /// with validation failures.
    pub fn http_status(self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::Conflict => 406,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }

    /// JSON-RPC 2.0 error code.
    pub fn rpc_code(self) -> i32 {
        match self {
            ErrorKind::Validation => -32602,
            ErrorKind::NotFound => -32004,
            ErrorKind::Conflict => -32009,
            ErrorKind::Internal => -32603,
        }
    }
}
