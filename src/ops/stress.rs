use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::structure::Structure;

const MIN_FILE_SIZE: i64 = 1024;
const MAX_FILE_SIZE: i64 = 8192;
pub const MAX_OPERATIONS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Create,
    Delete,
    Retrieve,
    Move,
}

const OPERATIONS: [Operation; 4] = [Operation::Create, Operation::Delete, Operation::Retrieve, Operation::Move];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub succeeded: usize,
    pub failed: usize,
}

impl Tally {
    fn record<T, E>(&mut self, outcome: &Result<T, E>) {
        match outcome {
            Ok(_) => self.succeeded += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

#[derive(Debug, Default)]
pub struct StressSummary {
    pub seed: u64,
    pub initial: Tally,
    pub create: Tally,
    pub delete: Tally,
    pub retrieve: Tally,
    pub moves: Tally,
    pub violations: Vec<String>,
}

impl fmt::Display for StressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stress test (seed {})", self.seed)?;
        let rows = [
            ("initial", &self.initial),
            ("create", &self.create),
            ("delete", &self.delete),
            ("retrieve", &self.retrieve),
            ("move", &self.moves),
        ];
        for (name, tally) in rows {
            writeln!(
                f,
                "  {:<8} {:>5} ok {:>5} failed {:>5} total",
                name,
                tally.succeeded,
                tally.failed,
                tally.total()
            )?;
        }
        write!(f, "  invariant violations: {}", self.violations.len())
    }
}

fn file_name(index: usize) -> String {
    format!("file_{}", index)
}

/// Creates `operations / 2` files, then issues `operations` random requests
/// against a pool of `operations` candidate names. The structure is checked
/// for consistency after every step. Runs are capped at `MAX_OPERATIONS`.
pub fn run(structure: &mut Structure, operations: usize, seed: u64) -> StressSummary {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut summary = StressSummary { seed, ..StressSummary::default() };
    if operations > MAX_OPERATIONS {
        log::warn!("stress test capped at {} operations ({} requested)", MAX_OPERATIONS, operations);
    }
    let operations = operations.min(MAX_OPERATIONS);

    log::info!("stress test: {} operations, seed {}", operations, seed);

    for index in 0..operations / 2 {
        let size = rng.gen_range(MIN_FILE_SIZE..=MAX_FILE_SIZE);
        let outcome = structure.create(&file_name(index), size);
        summary.initial.record(&outcome);
        check(structure, &mut summary);
    }

    for _ in 0..operations {
        let Some(&operation) = OPERATIONS.choose(&mut rng) else {
            break;
        };
        let name = &file_name(rng.gen_range(0..operations));
        match operation {
            Operation::Create => {
                let size = rng.gen_range(MIN_FILE_SIZE..=MAX_FILE_SIZE);
                let outcome = structure.create(name, size);
                summary.create.record(&outcome);
            }
            Operation::Delete => {
                let outcome = structure.delete(name);
                summary.delete.record(&outcome);
            }
            Operation::Retrieve => {
                let outcome = structure.retrieve(name);
                summary.retrieve.record(&outcome);
            }
            Operation::Move => {
                let outcome = structure.move_file(name);
                summary.moves.record(&outcome);
            }
        }
        check(structure, &mut summary);
    }

    summary
}

fn check(structure: &Structure, summary: &mut StressSummary) {
    for problem in structure.check_invariants() {
        log::warn!("invariant violated: {}", problem);
        summary.violations.push(problem);
    }
}
