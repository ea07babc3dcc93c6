use std::collections::hash_map::Entry;
use std::collections::HashMap;

use alpha_core::error::GenesisError;
use alpha_core::genesis::{GenesisDoc, GenesisValidator};
use alpha_core::types::{AppHash, AppState, ChainId};
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::params::{DuplicatePubKeyPolicy, RegistryConfig};

/// In-memory store of genesis documents keyed by chain ID.
///
/// Construct one per process and share it behind an `Arc`. Documents are
/// created once, only ever gain validators, and are never removed. Nothing is
/// persisted; the store is empty at startup.
#[derive(Debug, Default)]
pub struct GenesisRegistry {
    docs: RwLock<HashMap<ChainId, GenesisDoc>>,
    config: RegistryConfig,
}

impl GenesisRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create the genesis document for `chain_id`.
    ///
    /// The chain ID is checked before the store is touched. The existence
    /// check and the insert happen under one write lock, so of two concurrent
    /// creates for the same ID exactly one succeeds.
    pub fn create(
        &self,
        chain_id: &str,
        validator: Option<GenesisValidator>,
        app_hash: AppHash,
        app_state: Option<AppState>,
    ) -> Result<GenesisDoc, GenesisError> {
        let chain_id = ChainId::parse(chain_id)?;
        let doc = GenesisDoc::new(chain_id.clone(), Utc::now(), validator, app_hash, app_state);

        let mut docs = self.docs.write();
        match docs.entry(chain_id) {
            Entry::Occupied(_) => Err(GenesisError::ChainExists),
            Entry::Vacant(slot) => {
                info!(
                    chain_id = %doc.chain_id,
                    validators = doc.validators.len(),
                    "genesis document created"
                );
                Ok(slot.insert(doc).clone())
            }
        }
    }

    /// Append `validator` to an existing document and re-sort its validator
    /// set by descending power. Returns the updated document.
    pub fn add_validator(
        &self,
        chain_id: &str,
        validator: GenesisValidator,
    ) -> Result<GenesisDoc, GenesisError> {
        let mut docs = self.docs.write();
        let doc = docs
            .get_mut(chain_id)
            .ok_or_else(|| GenesisError::GenesisNotFound(chain_id.to_string()))?;

        if self.config.duplicate_pub_keys == DuplicatePubKeyPolicy::Reject
            && doc.has_pub_key(&validator.pub_key)
        {
            return Err(GenesisError::DuplicatePubKey);
        }

        info!(
            chain_id,
            name = %validator.name,
            power = validator.power,
            pub_key = %validator.pub_key,
            "validator added"
        );
        doc.push_validator(validator);
        Ok(doc.clone())
    }

    pub fn get(&self, chain_id: &str) -> Result<GenesisDoc, GenesisError> {
        debug!(chain_id, "genesis lookup");
        self.docs
            .read()
            .get(chain_id)
            .cloned()
            .ok_or_else(|| GenesisError::GenesisNotFound(chain_id.to_string()))
    }

    pub fn contains(&self, chain_id: &str) -> bool {
        self.docs.read().contains_key(chain_id)
    }

    /// All known chain IDs, in no particular order.
    pub fn list(&self) -> Vec<ChainId> {
        self.docs.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }

    /// Canonical JSON bytes for `doc`.
    pub fn serialize(doc: &GenesisDoc) -> Result<Vec<u8>, GenesisError> {
        doc.to_canonical_json()
    }

    /// Look up `chain_id` and encode it in one step.
    pub fn export(&self, chain_id: &str) -> Result<Vec<u8>, GenesisError> {
        Self::serialize(&self.get(chain_id)?)
    }
}
