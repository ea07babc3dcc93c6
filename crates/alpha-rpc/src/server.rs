use std::net::SocketAddr;
use std::sync::Arc;

use jsonrpsee::core::{async_trait, RpcResult};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::ErrorObject;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use alpha_core::error::GenesisError;
use alpha_core::types::ChainId;
use alpha_genesis::{GenesisRegistry, ValidatorFields};

use crate::api::AlphaApiServer;
use crate::types::{
    RpcChainSummary, RpcCreateChain, RpcGenesisFile, RpcValidatorFields, RpcVersionInfo,
};

const API_VERSION: &str = "1";

fn rpc_err(code: i32, msg: impl Into<String>) -> ErrorObject<'static> {
    ErrorObject::owned(code, msg.into(), None::<()>)
}

/// Map a registry error to a JSON-RPC error, logging the rejection.
fn genesis_err(method: &str, e: GenesisError) -> ErrorObject<'static> {
    let kind = e.kind();
    warn!(method, status = kind.http_status(), error = %e, "request rejected");
    rpc_err(kind.rpc_code(), e.to_string())
}

/// Chain IDs arriving as route parameters. Anything outside the chain ID
/// charset cannot name a document, so it is reported as not found.
fn route_chain_id(chain_id: &str) -> Result<ChainId, GenesisError> {
    ChainId::parse(chain_id).map_err(|_| GenesisError::GenesisNotFound(chain_id.to_string()))
}

/// Shared state passed to the RPC server.
pub struct RpcServerState {
    pub registry: Arc<GenesisRegistry>,
}

/// The RPC server implementation.
pub struct RpcServer {
    state: Arc<RpcServerState>,
}

impl RpcServer {
    pub fn new(state: Arc<RpcServerState>) -> Self {
        Self { state }
    }

    /// Start the JSON-RPC server on `addr`. Returns the bound address and a
    /// handle to stop it.
    pub async fn start(self, addr: SocketAddr) -> anyhow::Result<(SocketAddr, ServerHandle)> {
        // Browser front-ends post the genesis forms from another origin.
        let middleware = tower::ServiceBuilder::new().layer(CorsLayer::permissive());
        let server = Server::builder()
            .set_http_middleware(middleware)
            .build(addr)
            .await?;
        let local_addr = server.local_addr()?;
        let module = self.into_rpc();
        let handle = server.start(module);
        info!(addr = %local_addr, "RPC server started");
        Ok((local_addr, handle))
    }

    fn export(&self, chain_id: &str) -> Result<String, GenesisError> {
        let id = route_chain_id(chain_id)?;
        let bytes = self.state.registry.export(id.as_str())?;
        String::from_utf8(bytes).map_err(|e| GenesisError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl AlphaApiServer for RpcServer {
    async fn list_chains(&self) -> RpcResult<Vec<String>> {
        let mut ids: Vec<String> = self
            .state
            .registry
            .list()
            .into_iter()
            .map(String::from)
            .collect();
        ids.sort();
        Ok(ids)
    }

    async fn create_chain(&self, request: RpcCreateChain) -> RpcResult<RpcChainSummary> {
        let create = || -> Result<RpcChainSummary, GenesisError> {
            // Chain ID problems are reported before the optional fields.
            // `create` repeats the existence check atomically for racing callers.
            let id = ChainId::parse(&request.chain_id)?;
            if self.state.registry.contains(id.as_str()) {
                return Err(GenesisError::ChainExists);
            }
            let validator = request.validator_fields().build()?;
            let doc = self.state.registry.create(
                id.as_str(),
                validator,
                request.app_hash(),
                request.app_state(),
            )?;
            Ok(RpcChainSummary::from_doc(&doc))
        };
        create().map_err(|e| genesis_err("createChain", e))
    }

    async fn get_chain(&self, chain_id: String) -> RpcResult<RpcChainSummary> {
        route_chain_id(&chain_id)
            .and_then(|id| self.state.registry.get(id.as_str()))
            .map(|doc| RpcChainSummary::from_doc(&doc))
            .map_err(|e| genesis_err("getChain", e))
    }

    async fn add_validator(
        &self,
        chain_id: String,
        validator: RpcValidatorFields,
    ) -> RpcResult<RpcChainSummary> {
        let add = || -> Result<RpcChainSummary, GenesisError> {
            let id = route_chain_id(&chain_id)?;
            // Unknown chains are reported before field errors.
            if !self.state.registry.contains(id.as_str()) {
                return Err(GenesisError::GenesisNotFound(chain_id.clone()));
            }
            let entry = ValidatorFields::from(validator).require()?;
            let doc = self.state.registry.add_validator(id.as_str(), entry)?;
            Ok(RpcChainSummary::from_doc(&doc))
        };
        add().map_err(|e| genesis_err("addValidator", e))
    }

    async fn view_genesis(&self, chain_id: String) -> RpcResult<String> {
        self.export(&chain_id)
            .map_err(|e| genesis_err("viewGenesis", e))
    }

    async fn download_genesis(&self, chain_id: String) -> RpcResult<RpcGenesisFile> {
        self.export(&chain_id)
            .map(|content| RpcGenesisFile::new(&chain_id, content))
            .map_err(|e| genesis_err("downloadGenesis", e))
    }

    async fn get_version(&self) -> RpcResult<RpcVersionInfo> {
        Ok(RpcVersionInfo {
            node_version: env!("CARGO_PKG_VERSION").to_string(),
            api_version: API_VERSION.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_JSON: &str = r#"{"type":"ed25519","data":"5B1F0C2E4A6D8F0B1C3E5A7D9F1B3C5E7A9D1F3B5C7E9A1D3F5B7C9E1A3D5F7B"}"#;

    fn server() -> RpcServer {
        RpcServer::new(Arc::new(RpcServerState {
            registry: Arc::new(GenesisRegistry::default()),
        }))
    }

    fn validator(power: &str, name: &str) -> RpcValidatorFields {
        RpcValidatorFields {
            pub_key: KEY_JSON.into(),
            power: power.into(),
            name: name.into(),
        }
    }

    #[tokio::test]
    async fn create_add_and_view() {
        let rpc = server();
        let request = RpcCreateChain {
            chain_id: "testnet".into(),
            app_hash: "my-app-hash".into(),
            app_state: r#"{"accounts":[]}"#.into(),
            ..Default::default()
        };
        let created = rpc.create_chain(request).await.unwrap();
        assert_eq!(created.validator_count, 0);

        rpc.add_validator("testnet".into(), validator("10", "v1"))
            .await
            .unwrap();
        let summary = rpc
            .add_validator("testnet".into(), validator("20", "v2"))
            .await
            .unwrap();
        let names: Vec<_> = summary.validators.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["v2", "v1"]);
        assert_eq!(summary.total_power, "30");

        let view = rpc.view_genesis("testnet".into()).await.unwrap();
        let again = rpc.view_genesis("testnet".into()).await.unwrap();
        assert_eq!(view, again);
        // Raw bytes of "my-app-hash", upper-case hex.
        assert!(view.contains("\"app_hash\": \"6D792D6170702D68617368\""));
        assert!(view.contains("\"app_state\": {\"accounts\":[]}"));

        let file = rpc.download_genesis("testnet".into()).await.unwrap();
        assert_eq!(file.content, view);
        assert_eq!(file.content_type, "application/json");
        assert!(file.content_disposition.starts_with("attachment"));

        assert_eq!(rpc.list_chains().await.unwrap(), ["testnet"]);
    }

    #[tokio::test]
    async fn max_power_validators_summarise() {
        let rpc = server();
        let request = RpcCreateChain {
            chain_id: "big".into(),
            ..Default::default()
        };
        rpc.create_chain(request).await.unwrap();

        let max = i64::MAX.to_string();
        rpc.add_validator("big".into(), validator(&max, "a"))
            .await
            .unwrap();
        let summary = rpc
            .add_validator("big".into(), validator(&max, "b"))
            .await
            .unwrap();
        assert_eq!(summary.validator_count, 2);
        assert_eq!(summary.total_power, (2 * i128::from(i64::MAX)).to_string());
    }

    #[tokio::test]
    async fn error_codes() {
        let rpc = server();

        let missing = rpc.get_chain("nope".into()).await.unwrap_err();
        assert_eq!(missing.code(), -32004);
        assert_eq!(missing.message(), "genesis with such chain ID nope not found");

        let bad_route = rpc.view_genesis("../etc".into()).await.unwrap_err();
        assert_eq!(bad_route.code(), -32004);

        let request = RpcCreateChain {
            chain_id: "dup".into(),
            ..Default::default()
        };
        rpc.create_chain(request.clone()).await.unwrap();
        let conflict = rpc.create_chain(request).await.unwrap_err();
        assert_eq!(conflict.code(), -32009);
        assert_eq!(conflict.message(), "chain already exists");

        // An existing chain ID wins over bad validator fields.
        let dup_with_bad_fields = RpcCreateChain {
            chain_id: "dup".into(),
            validator_power: "-5".into(),
            ..Default::default()
        };
        let conflict = rpc.create_chain(dup_with_bad_fields).await.unwrap_err();
        assert_eq!(conflict.message(), "chain already exists");

        let partial = RpcCreateChain {
            chain_id: "partial".into(),
            validator_name: "only-name".into(),
            ..Default::default()
        };
        let rejected = rpc.create_chain(partial).await.unwrap_err();
        assert_eq!(rejected.code(), -32602);
        assert_eq!(rejected.message(), "incorrect validator fields");

        let bad_id = RpcCreateChain {
            chain_id: "no spaces".into(),
            ..Default::default()
        };
        let rejected = rpc.create_chain(bad_id).await.unwrap_err();
        assert_eq!(rejected.message(), "invalid chainID");

        let negative = rpc
            .add_validator("dup".into(), validator("-1", "n"))
            .await
            .unwrap_err();
        assert_eq!(negative.code(), -32602);

        let omitted = rpc
            .add_validator("dup".into(), RpcValidatorFields::default())
            .await
            .unwrap_err();
        assert_eq!(omitted.code(), -32602);

        let unknown = rpc
            .add_validator("ghost".into(), RpcValidatorFields::default())
            .await
            .unwrap_err();
        assert_eq!(unknown.code(), -32004);

        assert_eq!(rpc.list_chains().await.unwrap(), ["dup"]);
        assert!(rpc.get_chain("dup".into()).await.unwrap().validators.is_empty());
    }
}
