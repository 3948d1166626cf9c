use crate::consts::{BLOCK_COUNT, BLOCK_SIZE, INODE_COUNT};
use crate::util::error::{Error, Result};

/// Geometry of the simulated filesystem and its live usage counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperBlock {
    pub block_size: usize,
    pub block_count: usize,
    pub inode_count: usize,
    pub free_blocks: usize,
    pub free_inodes: usize,
}

impl SuperBlock {
    pub fn new(block_size: usize, block_count: usize, inode_count: usize) -> Result<SuperBlock> {
        if block_size == 0 {
            return Err(Error::InvalidGeometry("block size must be greater than 0".to_string()));
        }
        if block_count == 0 {
            return Err(Error::InvalidGeometry("block count must be greater than 0".to_string()));
        }
        if inode_count == 0 {
            return Err(Error::InvalidGeometry("inode count must be greater than 0".to_string()));
        }
        if (block_size as u64).checked_mul(block_count as u64).is_none() {
            return Err(Error::InvalidGeometry(format!(
                "{} blocks of {} bytes exceed the addressable size",
                block_count, block_size
            )));
        }

        Ok(SuperBlock {
            block_size,
            block_count,
            inode_count,
            free_blocks: block_count,
            free_inodes: inode_count,
        })
    }

    pub fn capacity(&self) -> u64 {
        self.block_size as u64 * self.block_count as u64
    }

    pub fn used_bytes(&self) -> u64 {
        self.block_size as u64 * (self.block_count - self.free_blocks) as u64
    }
}

impl Default for SuperBlock {
    fn default() -> SuperBlock {
        SuperBlock {
            block_size: BLOCK_SIZE,
            block_count: BLOCK_COUNT,
            inode_count: INODE_COUNT,
            free_blocks: BLOCK_COUNT,
            free_inodes: INODE_COUNT,
        }
    }
}
