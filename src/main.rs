mod cli;
mod consts;
mod ops;
mod shell;
mod structure;
mod util;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::structure::superblock::SuperBlock;
use crate::structure::Structure;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let super_block = match SuperBlock::new(cli.block_size, cli.blocks, cli.inodes) {
        Ok(super_block) => super_block,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(err.error_num() as u8);
        }
    };
    log::info!("geometry: {:?}", super_block);
    let mut structure = Structure::new(super_block);

    let result = match cli.stress {
        Some(operations) => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            let summary = ops::stress::run(&mut structure, operations, seed);
            println!("{}", summary);
            println!("{}", ops::report::render(&structure.snapshot()));
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            shell::run(&mut structure, stdin.lock(), &mut io::stdout())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {}", err);
            ExitCode::FAILURE
        }
    }
}
