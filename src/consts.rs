pub(crate) const BLOCK_SIZE: usize = 4096;
pub(crate) const BLOCK_COUNT: usize = 100;
pub(crate) const INODE_COUNT: usize = 20;

pub type BlockPointer = usize;
pub type InodePointer = usize;
pub type BlockList = Vec<BlockPointer>;
