use clap::Parser;

use crate::consts::{BLOCK_COUNT, BLOCK_SIZE, INODE_COUNT};

/// In-memory simulation of Ext2 block and inode allocation
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Size of a block in bytes
    #[arg(long, default_value_t = BLOCK_SIZE)]
    pub block_size: usize,

    /// Number of blocks on the simulated disk
    #[arg(long, default_value_t = BLOCK_COUNT)]
    pub blocks: usize,

    /// Number of inode slots
    #[arg(long, default_value_t = INODE_COUNT)]
    pub inodes: usize,

    /// Run this many random operations instead of the interactive shell
    #[arg(long)]
    pub stress: Option<usize>,

    /// Seed for the stress test
    #[arg(long, requires = "stress")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["ext2sim"]);
        assert_eq!((cli.block_size, cli.blocks, cli.inodes), (4096, 100, 20));
        assert_eq!(cli.stress, None);
    }

    #[test]
    fn stress_flags() {
        let cli = Cli::parse_from(["ext2sim", "--blocks", "10", "--stress", "30", "--seed", "4"]);
        assert_eq!(cli.blocks, 10);
        assert_eq!(cli.stress, Some(30));
        assert_eq!(cli.seed, Some(4));
    }

    #[test]
    fn seed_needs_stress() {
        assert!(Cli::try_parse_from(["ext2sim", "--seed", "4"]).is_err());
    }
}
