use anyhow::{bail, Context};

use alpha_rpc::{RpcChainSummary, RpcCreateChain, RpcGenesisFile, RpcValidatorFields};

/// Simple JSON-RPC 2.0 client used by the CLI to talk to a running node.
///
/// Uses raw HTTP POST with serde_json rather than the full jsonrpsee client.
pub struct NodeRpcClient {
    url: String,
    client: reqwest::Client,
}

impl NodeRpcClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Call a JSON-RPC method and return the `result` field.
    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> anyhow::Result<serde_json::Value> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("connecting to node at {}", self.url))?;

        let json: serde_json::Value = resp.json().await.context("parsing RPC response")?;

        if let Some(err) = json.get("error") {
            let message = err["message"].as_str().unwrap_or("unknown error");
            bail!("{message} (code {})", err["code"]);
        }

        Ok(json["result"].clone())
    }

    async fn call_typed<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> anyhow::Result<T> {
        let result = self.call(method, params).await?;
        serde_json::from_value(result).with_context(|| format!("parsing {method} response"))
    }

    pub async fn list_chains(&self) -> anyhow::Result<Vec<String>> {
        self.call_typed("alpha_listChains", serde_json::json!([])).await
    }

    pub async fn create_chain(&self, request: &RpcCreateChain) -> anyhow::Result<RpcChainSummary> {
        self.call_typed("alpha_createChain", serde_json::json!([request]))
            .await
    }

    pub async fn get_chain(&self, chain_id: &str) -> anyhow::Result<RpcChainSummary> {
        self.call_typed("alpha_getChain", serde_json::json!([chain_id]))
            .await
    }

    pub async fn add_validator(
        &self,
        chain_id: &str,
        fields: &RpcValidatorFields,
    ) -> anyhow::Result<RpcChainSummary> {
        self.call_typed("alpha_addValidator", serde_json::json!([chain_id, fields]))
            .await
    }

    pub async fn view_genesis(&self, chain_id: &str) -> anyhow::Result<String> {
        self.call_typed("alpha_viewGenesis", serde_json::json!([chain_id]))
            .await
    }

    pub async fn download_genesis(&self, chain_id: &str) -> anyhow::Result<RpcGenesisFile> {
        self.call_typed("alpha_downloadGenesis", serde_json::json!([chain_id]))
            .await
    }
}
