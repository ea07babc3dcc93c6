// ── Chain identifiers ────────────────────────────────────────────────────────

/// Characters allowed in a chain ID besides ASCII letters and digits.
pub const CHAIN_ID_EXTRA_CHARS: [char; 2] = ['-', '_'];

// ── Public keys ──────────────────────────────────────────────────────────────

/// JSON type tag for Ed25519 validator keys.
pub const PUB_KEY_TYPE_ED25519: &str = "ed25519";

/// JSON type tag for secp256k1 validator keys.
pub const PUB_KEY_TYPE_SECP256K1: &str = "secp256k1";

/// Raw Ed25519 public key length in bytes.
pub const ED25519_PUB_KEY_LEN: usize = 32;

/// Compressed secp256k1 public key length in bytes (SEC1 tag + X coordinate).
pub const SECP256K1_PUB_KEY_LEN: usize = 33;

// ── Default consensus parameters ─────────────────────────────────────────────

/// Maximum block size: 21 MiB.
pub const DEFAULT_BLOCK_MAX_BYTES: i64 = 22_020_096;

pub const DEFAULT_BLOCK_MAX_TXS: i64 = 100_000;

/// `-1` means "no gas limit".
pub const DEFAULT_BLOCK_MAX_GAS: i64 = -1;

/// Maximum transaction size: 10 KiB.
pub const DEFAULT_TX_MAX_BYTES: i64 = 10_240;

pub const DEFAULT_TX_MAX_GAS: i64 = -1;

/// Block parts are gossiped in 64 KiB chunks.
pub const DEFAULT_BLOCK_PART_SIZE_BYTES: i64 = 65_536;

/// Evidence older than this many blocks is rejected.
pub const DEFAULT_EVIDENCE_MAX_AGE: i64 = 100_000;

// ── Genesis file ─────────────────────────────────────────────────────────────

/// File name a node expects its genesis document under.
pub const GENESIS_FILE_NAME: &str = "genesis.json";

pub const GENESIS_CONTENT_TYPE: &str = "application/json";
