use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BLOCK_MAX_BYTES, DEFAULT_BLOCK_MAX_GAS, DEFAULT_BLOCK_MAX_TXS,
    DEFAULT_BLOCK_PART_SIZE_BYTES, DEFAULT_EVIDENCE_MAX_AGE, DEFAULT_TX_MAX_BYTES,
    DEFAULT_TX_MAX_GAS,
};

/// Consensus parameters embedded in every genesis document.
///
/// Documents are always created with [`ConsensusParams::default`]; there is no
/// way to customise them per chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    pub block_size_params: BlockSizeParams,
    pub tx_size_params: TxSizeParams,
    pub block_gossip_params: BlockGossipParams,
    pub evidence_params: EvidenceParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSizeParams {
    pub max_bytes: i64,
    pub max_txs: i64,
    pub max_gas: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxSizeParams {
    pub max_bytes: i64,
    pub max_gas: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockGossipParams {
    pub block_part_size_bytes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceParams {
    /// Measured in blocks.
    pub max_age: i64,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            block_size_params: BlockSizeParams {
                max_bytes: DEFAULT_BLOCK_MAX_BYTES,
                max_txs: DEFAULT_BLOCK_MAX_TXS,
                max_gas: DEFAULT_BLOCK_MAX_GAS,
            },
            tx_size_params: TxSizeParams {
                max_bytes: DEFAULT_TX_MAX_BYTES,
                max_gas: DEFAULT_TX_MAX_GAS,
            },
            block_gossip_params: BlockGossipParams {
                block_part_size_bytes: DEFAULT_BLOCK_PART_SIZE_BYTES,
            },
            evidence_params: EvidenceParams {
                max_age: DEFAULT_EVIDENCE_MAX_AGE,
            },
        }
    }
}
