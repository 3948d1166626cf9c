use std::collections::HashMap;

use crate::consts::{BlockList, InodePointer};
use crate::structure::blockmap::BlockMap;
use crate::structure::inode::Inode;
use crate::structure::inode_table::{InodeTable, Slot};
use crate::structure::superblock::SuperBlock;
use crate::util::error::{Error, Result};

pub mod blockmap;
pub mod inode;
pub mod inode_table;
pub mod superblock;

/// Read-only copy of a file's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub size: u64,
    pub blocks: BlockList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatus {
    pub used: bool,
    pub owner: Option<String>,
}

/// Consistent view of every block and inode slot at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub super_block: SuperBlock,
    pub blocks: Vec<BlockStatus>,
    pub inodes: Vec<Slot>,
}

/// The allocator: block bitmap, inode table and the name index over it.
///
/// Every public mutation either completes fully or returns an error before
/// touching any of the three, so they always agree with each other.
pub struct Structure {
    super_block: SuperBlock,
    block_map: BlockMap,
    inode_table: InodeTable,
    registry: HashMap<String, InodePointer>,
}

impl Structure {
    pub fn new(super_block: SuperBlock) -> Structure {
        let block_map = BlockMap::new(super_block.block_count);
        let inode_table = InodeTable::new(super_block.inode_count);
        let mut super_block = super_block;
        super_block.free_blocks = super_block.block_count;
        super_block.free_inodes = super_block.inode_count;
        Structure { super_block, block_map, inode_table, registry: HashMap::new() }
    }

    pub fn super_block(&self) -> &SuperBlock {
        &self.super_block
    }

    pub fn get_block_size(&self) -> usize {
        self.super_block.block_size
    }

    pub fn create(&mut self, name: &str, size: i64) -> Result<BlockList> {
        if self.registry.contains_key(name) {
            log::warn!("create '{}' rejected: name taken", name);
            return Err(Error::AlreadyExists(name.to_string()));
        }
        if size <= 0 {
            log::warn!("create '{}' rejected: size {}", name, size);
            return Err(Error::InvalidSize(size));
        }

        let size = size as u64;
        let needed = Inode::required_blocks(size, self.get_block_size());
        let blocks = self.block_map.find_free(needed).ok_or_else(|| {
            log::warn!("create '{}' rejected: {} blocks needed", name, needed);
            Error::InsufficientSpace { needed, available: self.block_map.free_count() }
        })?;
        // nothing is marked yet, so a missing inode leaves the bitmap untouched
        let index = self.inode_table.find_free().ok_or_else(|| {
            log::warn!("create '{}' rejected: inode table full", name);
            Error::NoFreeInode
        })?;

        for &block in &blocks {
            self.block_map.mark_used(block);
        }
        self.inode_table.write(index, Inode::new(name, size, blocks.clone()));
        self.registry.insert(name.to_string(), index);
        self.super_block.free_blocks -= blocks.len();
        self.super_block.free_inodes -= 1;

        log::info!("created '{}' ({} bytes) in inode {} with blocks {:?}", name, size, index, blocks);
        Ok(blocks)
    }

    /// Removes `name`, returning the blocks it released.
    pub fn delete(&mut self, name: &str) -> Result<BlockList> {
        let index = self.lookup(name)?;
        let inode = self.inode_table.clear(index).ok_or_else(|| Error::NotFound(name.to_string()))?;
        self.registry.remove(name);

        for &block in &inode.blocks {
            self.block_map.mark_free(block);
        }
        self.super_block.free_blocks += inode.blocks.len();
        self.super_block.free_inodes += 1;

        log::info!("deleted '{}' from inode {}, freed blocks {:?}", name, index, inode.blocks);
        Ok(inode.blocks)
    }

    pub fn retrieve(&self, name: &str) -> Result<FileInfo> {
        let index = self.lookup(name)?;
        let inode = self.inode_table.read(index).ok_or_else(|| Error::NotFound(name.to_string()))?;
        Ok(FileInfo { size: inode.size, blocks: inode.blocks.clone() })
    }

    /// Relocates `name` onto the lowest blocks that are free right now.
    ///
    /// The new blocks are chosen before the old ones are released, so they
    /// never overlap, and a failure leaves the file where it was.
    pub fn move_file(&mut self, name: &str) -> Result<BlockList> {
        let index = self.lookup(name)?;
        let needed = self
            .inode_table
            .read(index)
            .map(|inode| inode.blocks.len())
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let new_blocks = self.block_map.find_free(needed).ok_or_else(|| {
            log::warn!("move '{}' rejected: {} blocks needed", name, needed);
            Error::InsufficientSpace { needed, available: self.block_map.free_count() }
        })?;

        let inode = self.inode_table.read_mut(index).ok_or_else(|| Error::NotFound(name.to_string()))?;
        for &block in &inode.blocks {
            self.block_map.mark_free(block);
        }
        for &block in &new_blocks {
            self.block_map.mark_used(block);
        }
        let old_blocks = std::mem::replace(&mut inode.blocks, new_blocks.clone());

        log::info!("moved '{}' from blocks {:?} to {:?}", name, old_blocks, new_blocks);
        Ok(new_blocks)
    }

    /// Occupied inodes in slot order.
    pub fn files(&self) -> impl Iterator<Item = &Inode> {
        self.inode_table.iter().filter_map(Slot::inode)
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut blocks: Vec<BlockStatus> = (0..self.super_block.block_count)
            .map(|i| BlockStatus { used: self.block_map.is_used(i), owner: None })
            .collect();
        for inode in self.files() {
            for &block in &inode.blocks {
                if let Some(status) = blocks.get_mut(block) {
                    status.owner = Some(inode.name.clone());
                }
            }
        }

        Snapshot {
            super_block: self.super_block.clone(),
            blocks,
            inodes: self.inode_table.iter().cloned().collect(),
        }
    }

    /// Describes every way the bitmap, inode table and registry disagree.
    /// An empty list means the structure is consistent.
    pub fn check_invariants(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let block_size = self.get_block_size();
        let mut owners: Vec<Option<&str>> = vec![None; self.super_block.block_count];

        for (index, slot) in self.inode_table.iter().enumerate() {
            let Some(inode) = slot.inode() else { continue };

            if self.registry.get(&inode.name) != Some(&index) {
                problems.push(format!("inode {} ('{}') is not registered", index, inode.name));
            }
            let expected = Inode::required_blocks(inode.size, block_size);
            if inode.blocks.len() != expected {
                problems.push(format!(
                    "inode {} ('{}') holds {} blocks, size needs {}",
                    index,
                    inode.name,
                    inode.blocks.len(),
                    expected
                ));
            }
            for &block in &inode.blocks {
                match owners.get(block) {
                    None => problems.push(format!("inode {} points past the end at block {}", index, block)),
                    Some(Some(other)) => {
                        problems.push(format!("block {} shared by '{}' and '{}'", block, other, inode.name))
                    }
                    Some(None) => owners[block] = Some(inode.name.as_str()),
                }
            }
        }

        for (name, &index) in &self.registry {
            match self.inode_table.read(index) {
                Some(inode) if inode.name == *name => {}
                _ => problems.push(format!("registry entry '{}' points to inode {} which does not hold it", name, index)),
            }
        }

        for (block, owner) in owners.iter().enumerate() {
            if self.block_map.is_used(block) != owner.is_some() {
                problems.push(format!("block {} bitmap state disagrees with inode table", block));
            }
        }

        if self.super_block.free_blocks != self.block_map.free_count() {
            problems.push(format!(
                "superblock counts {} free blocks, bitmap has {}",
                self.super_block.free_blocks,
                self.block_map.free_count()
            ));
        }
        if self.super_block.free_inodes != self.inode_table.free_count() {
            problems.push(format!(
                "superblock counts {} free inodes, table has {}",
                self.super_block.free_inodes,
                self.inode_table.free_count()
            ));
        }

        problems
    }

    fn lookup(&self, name: &str) -> Result<InodePointer> {
        self.registry.get(name).copied().ok_or_else(|| {
            log::warn!("'{}' not found", name);
            Error::NotFound(name.to_string())
        })
    }
}

impl Default for Structure {
    fn default() -> Structure {
        Structure::new(SuperBlock::default())
    }
}
