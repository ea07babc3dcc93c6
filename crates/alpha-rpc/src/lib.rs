//! alpha-rpc
//!
//! JSON-RPC 2.0 front for the genesis registry.
//!
//! Namespace: "alpha"
//! Methods:
//!   alpha_listChains       — known chain IDs
//!   alpha_createChain      — create a genesis document, optionally with a validator
//!   alpha_getChain         — summary of one document (validators checked in so far)
//!   alpha_addValidator     — append a validator to an existing document
//!   alpha_viewGenesis      — canonical genesis JSON
//!   alpha_downloadGenesis  — canonical genesis JSON plus file metadata
//!   alpha_getVersion       — node and API versions

pub mod api;
pub mod server;
pub mod types;

pub use server::RpcServer;
pub use server::RpcServerState;
pub use types::{
    RpcChainSummary, RpcCreateChain, RpcGenesisFile, RpcValidator, RpcValidatorFields,
    RpcVersionInfo,
};
