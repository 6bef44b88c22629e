//! # Merkle Tree — Yield Snapshot Authentication
//!
//! A plain binary Merkle tree over 32-byte leaves. The yield accumulator
//! publishes the root of a tree whose leaves bind (commitment, accrued
//! yield) pairs; a prover can later show inclusion of its leaf under a
//! published epoch root without revealing any sibling contents.
//!
//! ## Hashing
//!
//! Domain-separated SHA-256:
//! - Leaf: `SHA256(0x00 || leaf_bytes)`.
//! - Node: `SHA256(0x01 || left || right)`.
//!
//! The prefix bytes make leaf/node confusion attacks impossible. A level
//! with an odd node count carries the last node up unchanged (no
//! duplication, so a single-leaf tree's root is its leaf hash).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use vlp_core::{Amount, Commitment, MerkleRoot};

/// Error building or querying a Merkle tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// A tree must have at least one leaf.
    #[error("merkle tree requires at least one leaf")]
    Empty,
    /// Requested a proof for a leaf index outside the tree.
    #[error("leaf index {index} out of range (leaf count {count})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of leaves in the tree.
        count: usize,
    },
}

fn sha256_prefixed(prefix: u8, parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([prefix]);
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Compute the leaf hash: `SHA256(0x00 || leaf)`.
pub fn leaf_hash(leaf: &[u8; 32]) -> [u8; 32] {
    sha256_prefixed(0x00, &[leaf])
}

/// Compute a parent node hash: `SHA256(0x01 || left || right)`.
pub fn node_hash(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    sha256_prefixed(0x01, &[left, right])
}

/// The leaf content binding a commitment to its accrued yield at a snapshot.
pub fn yield_leaf(commitment: &Commitment, accrued: Amount) -> [u8; 32] {
    sha256_prefixed(
        0x00,
        &[
            b"VEILPOOL_YIELD_LEAF_V1",
            commitment.as_bytes(),
            &accrued.value().to_be_bytes(),
        ],
    )
}

/// One step of an inclusion proof: the sibling hash and which side it is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// The sibling's hash at this level.
    pub sibling: [u8; 32],
    /// True when the sibling sits to the left of the running hash.
    pub sibling_is_left: bool,
}

/// An inclusion proof from a leaf up to the root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Bottom-up proof steps.
    pub steps: Vec<ProofStep>,
}

impl MerkleProof {
    /// Verify this proof for `leaf` (raw leaf content, pre-hash) against
    /// `root`.
    pub fn verify(&self, leaf: &[u8; 32], root: &MerkleRoot) -> bool {
        let mut running = leaf_hash(leaf);
        for step in &self.steps {
            running = if step.sibling_is_left {
                node_hash(&step.sibling, &running)
            } else {
                node_hash(&running, &step.sibling)
            };
        }
        running == *root.as_bytes()
    }
}

/// A binary Merkle tree over fixed 32-byte leaves.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Hashed leaves in insertion order (level 0).
    leaves: Vec<[u8; 32]>,
    /// All levels, bottom-up; the last level holds the single root.
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    /// Build a tree from raw leaf contents.
    pub fn build(leaves: &[[u8; 32]]) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::Empty);
        }
        let hashed: Vec<[u8; 32]> = leaves.iter().map(leaf_hash).collect();
        let mut levels = vec![hashed.clone()];
        while levels.last().map(Vec::len) != Some(1) {
            let prev = levels.last().cloned().unwrap_or_default();
            let mut next = Vec::with_capacity(prev.len().div_ceil(2));
            for pair in prev.chunks(2) {
                match pair {
                    [left, right] => next.push(node_hash(left, right)),
                    // Odd node carried up unchanged.
                    [last] => next.push(*last),
                    _ => {}
                }
            }
            levels.push(next);
        }
        Ok(Self {
            leaves: hashed,
            levels,
        })
    }

    /// The number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The tree root.
    pub fn root(&self) -> MerkleRoot {
        // build() guarantees a final level with exactly one node.
        let root = self
            .levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or([0u8; 32]);
        MerkleRoot(root)
    }

    /// Produce an inclusion proof for the leaf at `index`.
    pub fn proof(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        if index >= self.leaves.len() {
            return Err(MerkleError::IndexOutOfRange {
                index,
                count: self.leaves.len(),
            });
        }
        let mut steps = Vec::new();
        let mut pos = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling_pos = if pos % 2 == 0 { pos + 1 } else { pos - 1 };
            if let Some(sibling) = level.get(sibling_pos) {
                steps.push(ProofStep {
                    sibling: *sibling,
                    sibling_is_left: sibling_pos < pos,
                });
            }
            // No sibling: the node was carried up unchanged.
            pos /= 2;
        }
        Ok(MerkleProof { steps })
    }
}
