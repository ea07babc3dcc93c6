use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consensus::ConsensusParams;
use crate::error::GenesisError;
use crate::types::{AppHash, AppState, ChainId, PubKey};

/// One entry of the initial validator set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisValidator {
    pub pub_key: PubKey,
    /// Voting power, never negative. Encoded as a decimal string.
    #[serde(with = "power_string")]
    pub power: i64,
    pub name: String,
}

/// A genesis document as a node loads it at first start.
///
/// Field order here is the field order of the serialized file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisDoc {
    pub genesis_time: DateTime<Utc>,
    pub chain_id: ChainId,
    pub consensus_params: ConsensusParams,
    #[serde(default)]
    pub validators: Vec<GenesisValidator>,
    #[serde(default)]
    pub app_hash: AppHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_state: Option<AppState>,
}

impl GenesisDoc {
    /// New document with default consensus parameters and at most one validator.
    pub fn new(
        chain_id: ChainId,
        genesis_time: DateTime<Utc>,
        validator: Option<GenesisValidator>,
        app_hash: AppHash,
        app_state: Option<AppState>,
    ) -> Self {
        Self {
            genesis_time,
            chain_id,
            consensus_params: ConsensusParams::default(),
            validators: validator.into_iter().collect(),
            app_hash,
            app_state,
        }
    }

    /// Append `validator` and restore descending-power order. Equal powers keep
    /// their append order.
    pub fn push_validator(&mut self, validator: GenesisValidator) {
        self.validators.push(validator);
        // sort_by is stable
        self.validators.sort_by(|a, b| b.power.cmp(&a.power));
    }

    pub fn has_pub_key(&self, key: &PubKey) -> bool {
        self.validators.iter().any(|v| &v.pub_key == key)
    }

    /// Sum of all voting power. Widened so any number of `i64` powers fits.
    pub fn total_power(&self) -> i128 {
        self.validators.iter().map(|v| i128::from(v.power)).sum()
    }

    /// Canonical encoding: pretty JSON with two-space indentation and schema
    /// field order. Identical documents always produce identical bytes.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, GenesisError> {
        serde_json::to_vec_pretty(self).map_err(|e| GenesisError::Serialization(e.to_string()))
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, GenesisError> {
        serde_json::from_slice(bytes).map_err(|e| GenesisError::Serialization(e.to_string()))
    }
}

/// `i64` as a decimal string on output; string or integer accepted on input.
mod power_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(power: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(power)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Int(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => s.parse().map_err(D::Error::custom),
            Repr::Int(n) => Ok(n),
        }
    }
}
