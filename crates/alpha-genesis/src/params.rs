use serde::{Deserialize, Serialize};

/// What the registry does when a validator's public key is already present
/// in the target document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePubKeyPolicy {
    /// Accept the entry; the document may list the same key twice.
    #[default]
    Allow,
    /// Reject the entry with `GenesisError::DuplicatePubKey`.
    Reject,
}

/// Registry settings, loadable from a JSON file by the node.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub duplicate_pub_keys: DuplicatePubKeyPolicy,
}
