use crate::consts::{BlockList, BlockPointer};

pub struct BlockMap {
    pub(crate) block_count: usize,
    data: Vec<u8>,
}

impl BlockMap {
    pub fn new(block_count: usize) -> BlockMap {
        BlockMap { block_count, data: BlockMap::create_data(block_count) }
    }

    fn create_data(block_count: usize) -> Vec<u8> {
        let mut data = vec![0; block_count / 8];
        if block_count % 8 != 0 {
            data.push(0);
        }
        data
    }

    /// First-fit scan: the `count` lowest free indices, or `None` if there are
    /// fewer than `count` free blocks. Does not touch the map.
    pub fn find_free(&self, count: usize) -> Option<BlockList> {
        if count > self.block_count {
            return None;
        }
        let mut found = BlockList::with_capacity(count);
        if count == 0 {
            return Some(found);
        }
        for index in 0..self.block_count {
            if self.is_free(index) {
                found.push(index);
                if found.len() == count {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn free_count(&self) -> usize {
        (0..self.block_count).filter(|&i| self.is_free(i)).count()
    }

    pub fn is_free(&self, index: BlockPointer) -> bool {
        self.data[index / 8] & (1 << (index % 8)) == 0
    }

    pub fn is_used(&self, index: BlockPointer) -> bool {
        !self.is_free(index)
    }

    pub(crate) fn mark_used(&mut self, index: BlockPointer) {
        let byte_index = index / 8;
        let bit_index = index % 8;
        log::debug!("marking block {} used", index);
        self.data[byte_index] |= 1 << bit_index;
    }

    pub(crate) fn mark_free(&mut self, index: BlockPointer) {
        let byte_index = index / 8;
        let bit_index = index % 8;
        log::debug!("marking block {} free", index);
        self.data[byte_index] &= !(1 << bit_index);
    }
}
