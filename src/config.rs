use crate::error::{DiffError, Result};
use crate::tokenize::TokenSequence;
use std::net::SocketAddr;

pub const DEFAULT_MAX_TABLE_CELLS: usize = 4_000_000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Bounds applied to a diff request before the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffLimits {
    /// Largest `left tokens x right tokens` product accepted.
    pub max_table_cells: usize,
    pub max_body_bytes: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        DiffLimits {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl DiffLimits {
    pub fn check(&self, left: &TokenSequence, right: &TokenSequence) -> Result<()> {
        let cells = left.len().saturating_mul(right.len());
        if cells > self.max_table_cells {
            return Err(DiffError::InputTooLarge {
                cells,
                limit: self.max_table_cells,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub limits: DiffLimits,
}
