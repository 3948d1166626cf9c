use crate::consts::BlockList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inode {
    pub(crate) name: String,
    pub(crate) size: u64,
    pub(crate) blocks: BlockList,
}

impl Inode {
    pub fn new(name: &str, size: u64, blocks: BlockList) -> Inode {
        Inode { name: name.to_string(), size, blocks }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn blocks(&self) -> &[usize] {
        &self.blocks
    }

    /// Number of blocks a file of `size` bytes occupies.
    pub fn required_blocks(size: u64, block_size: usize) -> usize {
        let block_size = block_size as u64;
        let mut count = size / block_size;
        if size % block_size > 0 {
            count += 1;
        }
        count as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Inode;

    #[test]
    fn required_blocks() {
        assert_eq!(Inode::required_blocks(1, 4096), 1);
        assert_eq!(Inode::required_blocks(4096, 4096), 1);
        assert_eq!(Inode::required_blocks(4097, 4096), 2);
        assert_eq!(Inode::required_blocks(5000, 4096), 2);
        assert_eq!(Inode::required_blocks(100 * 4096, 4096), 100);
    }

    #[test]
    fn accessors() {
        let inode = Inode::new("a", 5000, vec![0, 1]);
        assert_eq!(inode.name(), "a");
        assert_eq!(inode.size(), 5000);
        assert_eq!(inode.blocks(), &[0, 1]);
    }
}
