use alpha_core::constants::{GENESIS_CONTENT_TYPE, GENESIS_FILE_NAME};
use alpha_core::genesis::GenesisDoc;
use alpha_core::types::{AppHash, AppState};
use alpha_genesis::ValidatorFields;
use serde::{Deserialize, Serialize};

/// Parameters of `alpha_createChain`. Mirrors the fields of the "new genesis"
/// form; every field except `chain_id` may be left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcCreateChain {
    pub chain_id: String,
    /// Validator public key JSON (output of the node's `show_validator`).
    pub validator_pub_key: String,
    pub validator_power: String,
    pub validator_name: String,
    /// App hash, stored as the raw bytes of this text.
    pub app_hash: String,
    /// Raw app state JSON.
    pub app_state: String,
}

impl RpcCreateChain {
    pub fn validator_fields(&self) -> ValidatorFields {
        ValidatorFields::new(
            self.validator_pub_key.clone(),
            self.validator_power.clone(),
            self.validator_name.clone(),
        )
    }

    /// The submitted text, byte for byte. It is hex-encoded in the document.
    pub fn app_hash(&self) -> AppHash {
        AppHash(self.app_hash.as_bytes().to_vec())
    }

    /// `None` when the field was left empty.
    pub fn app_state(&self) -> Option<AppState> {
        (!self.app_state.is_empty()).then(|| AppState::new(self.app_state.clone()))
    }
}

/// Parameters of `alpha_addValidator`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcValidatorFields {
    pub pub_key: String,
    pub power: String,
    pub name: String,
}

impl From<RpcValidatorFields> for ValidatorFields {
    fn from(f: RpcValidatorFields) -> Self {
        ValidatorFields::new(f.pub_key, f.power, f.name)
    }
}

/// JSON-serializable validator entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcValidator {
    pub name: String,
    /// i64 as string.
    pub power: String,
    /// `<type>:<HEX>`.
    pub pub_key: String,
}

/// Document summary returned by create, get and add calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcChainSummary {
    pub chain_id: String,
    /// RFC 3339.
    pub genesis_time: String,
    /// How many validators have checked in so far.
    pub validator_count: usize,
    pub total_power: String,
    /// Sorted by power, highest first.
    pub validators: Vec<RpcValidator>,
}

impl RpcChainSummary {
    pub fn from_doc(doc: &GenesisDoc) -> Self {
        Self {
            chain_id: doc.chain_id.to_string(),
            genesis_time: doc.genesis_time.to_rfc3339(),
            validator_count: doc.validators.len(),
            total_power: doc.total_power().to_string(),
            validators: doc
                .validators
                .iter()
                .map(|v| RpcValidator {
                    name: v.name.clone(),
                    power: v.power.to_string(),
                    pub_key: v.pub_key.to_string(),
                })
                .collect(),
        }
    }
}

/// Downloadable genesis file returned by `alpha_downloadGenesis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcGenesisFile {
    pub chain_id: String,
    pub file_name: String,
    pub content_type: String,
    pub content_disposition: String,
    /// Canonical genesis JSON.
    pub content: String,
}

impl RpcGenesisFile {
    pub fn new(chain_id: &str, content: String) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            file_name: GENESIS_FILE_NAME.to_string(),
            content_type: GENESIS_CONTENT_TYPE.to_string(),
            content_disposition: format!("attachment; filename=\"{GENESIS_FILE_NAME}\""),
            content,
        }
    }
}

/// Node / API version information returned by `alpha_getVersion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcVersionInfo {
    pub node_version: String,
    pub api_version: String,
}
