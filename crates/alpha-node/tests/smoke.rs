//! End-to-end smoke test for alpha-node.
//!
//! Starts a real node process, drives the create / add-validator / download
//! flow over JSON-RPC, and checks the downloaded genesis file.
//!
//! Run with:
//!   cargo test -p alpha-node --test smoke

use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use alpha_core::GenesisDoc;

const VALIDATOR_A: &str =
    r#"{"type":"ed25519","data":"1A2B3C4D5E6F708192A3B4C5D6E7F8091A2B3C4D5E6F708192A3B4C5D6E7F809"}"#;
const VALIDATOR_B: &str =
    r#"{"type":"secp256k1","data":"02F1E2D3C4B5A6978869504132231405F6E7D8C9BAAB9C8D7E6F5041322314056A"}"#;

// ── Node lifecycle ────────────────────────────────────────────────────────────

struct NodeGuard {
    child: Child,
}

impl Drop for NodeGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Find a free TCP port on loopback.
fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

// ── RPC helpers ───────────────────────────────────────────────────────────────

/// Returns the full JSON-RPC response object.
async fn rpc_raw(
    client: &reqwest::Client,
    url: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": 1
    });
    let resp = client
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap_or_else(|e| panic!("RPC call {method} failed: {e}"));
    resp.json().await.expect("parse RPC JSON")
}

async fn rpc_call(
    client: &reqwest::Client,
    url: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let json = rpc_raw(client, url, method, params).await;
    if let Some(err) = json.get("error") {
        panic!("RPC error from {method}: {err}");
    }
    json["result"].clone()
}

/// Call a method that must fail; returns `(code, message)`.
async fn rpc_error(
    client: &reqwest::Client,
    url: &str,
    method: &str,
    params: serde_json::Value,
) -> (i64, String) {
    let json = rpc_raw(client, url, method, params).await;
    let err = json
        .get("error")
        .unwrap_or_else(|| panic!("{method} unexpectedly succeeded: {json}"));
    (
        err["code"].as_i64().expect("error code"),
        err["message"].as_str().expect("error message").to_string(),
    )
}

/// Poll until the RPC server responds or the timeout elapses.
async fn wait_for_rpc(client: &reqwest::Client, url: &str, timeout: Duration) -> bool {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "method": "alpha_getVersion",
        "params": [],
        "id": 1
    });
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Ok(resp) = client.post(url).json(&body).send().await {
            if resp.status().is_success() {
                return true;
            }
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    false
}

fn validator(pub_key: &str, power: &str, name: &str) -> serde_json::Value {
    serde_json::json!({ "pub_key": pub_key, "power": power, "name": name })
}

// ── Smoke test ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn smoke_collect_validators_and_download() {
    // ── 1. Start node ─────────────────────────────────────────────────────────
    let rpc_port = free_port();
    let rpc_url = format!("http://127.0.0.1:{}", rpc_port);

    let node_bin = env!("CARGO_BIN_EXE_alpha-node");
    let child = Command::new(node_bin)
        .args(["--rpc-addr", &format!("127.0.0.1:{}", rpc_port)])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn alpha-node");

    let _guard = NodeGuard { child };

    let http = reqwest::Client::new();
    assert!(
        wait_for_rpc(&http, &rpc_url, Duration::from_secs(20)).await,
        "alpha-node did not become ready within 20 seconds"
    );

    // ── 2. Fresh node has no chains ───────────────────────────────────────────
    let chains = rpc_call(&http, &rpc_url, "alpha_listChains", serde_json::json!([])).await;
    assert_eq!(chains, serde_json::json!([]));

    // ── 3. Create "testnet" with no validator ─────────────────────────────────
    let created = rpc_call(
        &http,
        &rpc_url,
        "alpha_createChain",
        serde_json::json!([{ "chain_id": "testnet", "app_state": "{\"accounts\":[]}" }]),
    )
    .await;
    assert_eq!(created["validator_count"], 0);

    let (code, message) = rpc_error(
        &http,
        &rpc_url,
        "alpha_createChain",
        serde_json::json!([{ "chain_id": "testnet" }]),
    )
    .await;
    assert_eq!(code, -32009);
    assert_eq!(message, "chain already exists");

    // ── 4. Two validators check in ────────────────────────────────────────────
    rpc_call(
        &http,
        &rpc_url,
        "alpha_addValidator",
        serde_json::json!(["testnet", validator(VALIDATOR_A, "10", "v1")]),
    )
    .await;
    let summary = rpc_call(
        &http,
        &rpc_url,
        "alpha_addValidator",
        serde_json::json!(["testnet", validator(VALIDATOR_B, "20", "v2")]),
    )
    .await;
    assert_eq!(summary["validator_count"], 2);
    assert_eq!(summary["validators"][0]["name"], "v2");

    let (code, _) = rpc_error(
        &http,
        &rpc_url,
        "alpha_addValidator",
        serde_json::json!(["testnet", validator(VALIDATOR_A, "abc", "v3")]),
    )
    .await;
    assert_eq!(code, -32602);

    let (code, message) = rpc_error(
        &http,
        &rpc_url,
        "alpha_viewGenesis",
        serde_json::json!(["mainnet"]),
    )
    .await;
    assert_eq!(code, -32004);
    assert_eq!(message, "genesis with such chain ID mainnet not found");

    // ── 5. Download and parse the genesis file ────────────────────────────────
    let file = rpc_call(
        &http,
        &rpc_url,
        "alpha_downloadGenesis",
        serde_json::json!(["testnet"]),
    )
    .await;
    assert_eq!(file["content_type"], "application/json");
    let content = file["content"].as_str().expect("content string");

    let doc = GenesisDoc::from_json(content.as_bytes()).expect("downloaded genesis parses");
    assert_eq!(doc.chain_id.as_str(), "testnet");
    let powers: Vec<_> = doc.validators.iter().map(|v| v.power).collect();
    assert_eq!(powers, [20, 10]);
    assert_eq!(doc.to_canonical_json().unwrap(), content.as_bytes());

    let view = rpc_call(&http, &rpc_url, "alpha_viewGenesis", serde_json::json!(["testnet"])).await;
    assert_eq!(view.as_str(), Some(content));
}
