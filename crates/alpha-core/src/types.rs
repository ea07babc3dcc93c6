use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::borrow::Borrow;
use std::fmt;

use crate::constants::{
    CHAIN_ID_EXTRA_CHARS, ED25519_PUB_KEY_LEN, PUB_KEY_TYPE_ED25519, PUB_KEY_TYPE_SECP256K1,
    SECP256K1_PUB_KEY_LEN,
};
use crate::error::GenesisError;

// ── ChainId ──────────────────────────────────────────────────────────────────

/// Unique name of a genesis document. Non-empty, `[A-Za-z0-9_-]+`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    pub fn parse(s: &str) -> Result<Self, GenesisError> {
        if s.is_empty() {
            return Err(GenesisError::ChainIdRequired);
        }
        let valid = s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || CHAIN_ID_EXTRA_CHARS.contains(&c));
        if !valid {
            return Err(GenesisError::InvalidChainId);
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChainId {
    type Error = GenesisError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ChainId> for String {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl Borrow<str> for ChainId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", self.0)
    }
}

// ── Public keys ──────────────────────────────────────────────────────────────

/// Fixed-length key material, hex-encoded (upper case) on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> KeyBytes<N> {
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl<const N: usize> TryFrom<String> for KeyBytes<N> {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let bytes = hex::decode(&s).map_err(|e| format!("invalid hex: {e}"))?;
        let arr = <[u8; N]>::try_from(bytes.as_slice())
            .map_err(|_| format!("expected {N} bytes, got {}", bytes.len()))?;
        Ok(Self(arr))
    }
}

impl<const N: usize> From<KeyBytes<N>> for String {
    fn from(key: KeyBytes<N>) -> Self {
        key.to_hex()
    }
}

pub type Ed25519PubKey = KeyBytes<ED25519_PUB_KEY_LEN>;
pub type Secp256k1PubKey = KeyBytes<SECP256K1_PUB_KEY_LEN>;

/// Validator public key, tagged by algorithm.
///
/// JSON form: `{"type": "ed25519", "data": "<HEX>"}`. An unknown `type`, bad
/// hex, or a key of the wrong length fails to deserialize.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PubKey {
    #[serde(rename = "ed25519")]
    Ed25519(Ed25519PubKey),
    #[serde(rename = "secp256k1")]
    Secp256k1(Secp256k1PubKey),
}

impl PubKey {
    /// Parse the JSON a node prints for its validator key.
    pub fn from_json(raw: &str) -> Result<Self, GenesisError> {
        serde_json::from_str(raw).map_err(|e| GenesisError::InvalidPubKey(e.to_string()))
    }

    pub fn type_tag(&self) -> &'static str {
        match self {
            PubKey::Ed25519(_) => PUB_KEY_TYPE_ED25519,
            PubKey::Secp256k1(_) => PUB_KEY_TYPE_SECP256K1,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PubKey::Ed25519(k) => k.as_bytes(),
            PubKey::Secp256k1(k) => k.as_bytes(),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.as_bytes())
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_tag(), self.to_hex())
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubKey({}:{}…)", self.type_tag(), &self.to_hex()[..16])
    }
}

// ── AppHash ──────────────────────────────────────────────────────────────────

/// Opaque application hash. Upper-case hex on the wire, empty string when unset.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppHash(pub Vec<u8>);

impl AppHash {
    pub fn from_hex(s: &str) -> Result<Self, GenesisError> {
        hex::decode(s)
            .map(Self)
            .map_err(|e| GenesisError::InvalidAppHash(e.to_string()))
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for AppHash {
    type Error = GenesisError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<AppHash> for String {
    fn from(hash: AppHash) -> Self {
        hash.to_hex()
    }
}

impl fmt::Debug for AppHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppHash({})", self.to_hex())
    }
}

// ── AppState ─────────────────────────────────────────────────────────────────

/// Raw application state JSON, kept exactly as supplied.
///
/// The text is not checked when stored. It is embedded verbatim into the
/// serialized document, so encoding fails if it is not valid JSON.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AppState(String);

impl AppState {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for AppState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.0.clone())
            .map_err(|e| serde::ser::Error::custom(format!("app_state is not valid JSON: {e}")))?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AppState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(Self(raw.get().to_string()))
    }
}
