//! Run configuration shared by both kernel variants.

use crate::error::{BenchError, Result};
use crate::{BLOCK_SIZE, SIZE};

/// Dimension and tile size for one naive-vs-blocked comparison.
///
/// Both runs of a comparison use the same configuration, so the inputs
/// they generate are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    size: usize,
    block_size: usize,
}

impl RunConfig {
    /// Validates and builds a configuration.
    ///
    /// A `block_size` larger than `size` is accepted: the blocked kernel
    /// clamps tiles to the matrix edge, so it degenerates to one tile.
    pub fn new(size: usize, block_size: usize) -> Result<Self> {
        if size == 0 {
            return Err(BenchError::InvalidSize(size));
        }
        if block_size == 0 {
            return Err(BenchError::InvalidBlockSize(block_size));
        }
        Ok(Self { size, block_size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Floating-point operations in one N×N multiply: one mul + one add per (i, j, k).
    pub fn flop_count(&self) -> f64 {
        let n = self.size as f64;
        2.0 * n * n * n
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: SIZE,
            block_size: BLOCK_SIZE,
        }
    }
}
