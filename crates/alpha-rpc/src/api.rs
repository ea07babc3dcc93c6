use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;

use crate::types::{
    RpcChainSummary, RpcCreateChain, RpcGenesisFile, RpcValidatorFields, RpcVersionInfo,
};

/// Alpha JSON-RPC 2.0 API definition.
///
/// All method names are prefixed with "alpha_" via `namespace = "alpha"`.
#[rpc(server, namespace = "alpha")]
pub trait AlphaApi {
    /// List every chain ID that has a genesis document, sorted.
    #[method(name = "listChains")]
    async fn list_chains(&self) -> RpcResult<Vec<String>>;

    /// Create a genesis document. Validator fields are optional but must be
    /// given all together.
    #[method(name = "createChain")]
    async fn create_chain(&self, request: RpcCreateChain) -> RpcResult<RpcChainSummary>;

    /// Summary of the document for `chain_id`.
    #[method(name = "getChain")]
    async fn get_chain(&self, chain_id: String) -> RpcResult<RpcChainSummary>;

    /// Append a validator to the document for `chain_id`. All fields required.
    #[method(name = "addValidator")]
    async fn add_validator(
        &self,
        chain_id: String,
        validator: RpcValidatorFields,
    ) -> RpcResult<RpcChainSummary>;

    /// Canonical genesis JSON for `chain_id`.
    #[method(name = "viewGenesis")]
    async fn view_genesis(&self, chain_id: String) -> RpcResult<String>;

    /// Canonical genesis JSON with the headers a file download needs.
    #[method(name = "downloadGenesis")]
    async fn download_genesis(&self, chain_id: String) -> RpcResult<RpcGenesisFile>;

    /// Return node and API version information.
    #[method(name = "getVersion")]
    async fn get_version(&self) -> RpcResult<RpcVersionInfo>;
}
