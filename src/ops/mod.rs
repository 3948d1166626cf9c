use crate::structure::Structure;
use crate::util::format::block_list;

pub mod report;
pub mod stress;

pub const HELP: &str = "\
Commands:
  create <name> <size>   create a file of <size> bytes
  delete <name>          delete a file and free its blocks
  retrieve <name>        show a file's size and blocks
  move <name>            relocate a file to other free blocks
  status                 show the block and inode tables
  stress <n> [seed]      run <n> random operations
  help                   show this message
  exit                   leave";

#[derive(Debug, PartialEq)]
pub enum Command {
    Create { name: String, size: i64 },
    Delete { name: String },
    Retrieve { name: String },
    Move { name: String },
    Status,
    Stress { operations: usize, seed: Option<u64> },
    Help,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&str> = words.collect();

        let command = match (keyword, args.as_slice()) {
            ("create", [name, size]) => {
                let size = size.parse::<i64>().map_err(|_| format!("invalid size '{}'", size))?;
                Command::Create { name: name.to_string(), size }
            }
            ("delete", [name]) => Command::Delete { name: name.to_string() },
            ("retrieve", [name]) => Command::Retrieve { name: name.to_string() },
            ("move", [name]) => Command::Move { name: name.to_string() },
            ("status", []) => Command::Status,
            ("stress", [operations, rest @ ..]) if rest.len() <= 1 => {
                let operations = operations
                    .parse::<usize>()
                    .map_err(|_| format!("invalid operation count '{}'", operations))?;
                let seed = match rest.first() {
                    Some(seed) => Some(seed.parse::<u64>().map_err(|_| format!("invalid seed '{}'", seed))?),
                    None => None,
                };
                Command::Stress { operations, seed }
            }
            ("help", []) => Command::Help,
            ("exit" | "quit", []) => Command::Exit,
            ("create" | "delete" | "retrieve" | "move" | "status" | "stress" | "help" | "exit" | "quit", _) => {
                return Err(format!("wrong arguments for '{}'", keyword))
            }
            _ => return Err(format!("unknown command '{}'", keyword)),
        };
        Ok(command)
    }
}

/// Runs one command and returns what should be shown to the user.
/// `Exit` is left to the caller.
pub fn execute(structure: &mut Structure, command: &Command) -> String {
    match command {
        Command::Create { name, size } => match structure.create(name, *size) {
            Ok(blocks) => format!("File '{}' created in blocks: {}", name, block_list(&blocks)),
            Err(err) => format!("Error: {}", err),
        },
        Command::Delete { name } => match structure.delete(name) {
            Ok(_) => format!("File '{}' deleted.", name),
            Err(err) => format!("Error: {}", err),
        },
        Command::Retrieve { name } => match structure.retrieve(name) {
            Ok(info) => format!("File '{}': size {} bytes, blocks {}.", name, info.size, block_list(&info.blocks)),
            Err(err) => format!("Error: {}", err),
        },
        Command::Move { name } => match structure.move_file(name) {
            Ok(blocks) => format!("File '{}' moved to blocks: {}", name, block_list(&blocks)),
            Err(err) => format!("Error: {}", err),
        },
        Command::Status => report::render(&structure.snapshot()),
        Command::Stress { operations, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            stress::run(structure, *operations, seed).to_string()
        }
        Command::Help => HELP.to_string(),
        Command::Exit => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, Command};
    use crate::structure::Structure;

    #[test]
    fn parse_commands() {
        assert_eq!(
            Command::parse("create a 5000"),
            Ok(Command::Create { name: "a".to_string(), size: 5000 })
        );
        assert_eq!(Command::parse("  delete   a "), Ok(Command::Delete { name: "a".to_string() }));
        assert_eq!(Command::parse("retrieve a"), Ok(Command::Retrieve { name: "a".to_string() }));
        assert_eq!(Command::parse("move a"), Ok(Command::Move { name: "a".to_string() }));
        assert_eq!(Command::parse("status"), Ok(Command::Status));
        assert_eq!(Command::parse("stress 10"), Ok(Command::Stress { operations: 10, seed: None }));
        assert_eq!(Command::parse("stress 10 7"), Ok(Command::Stress { operations: 10, seed: Some(7) }));
        assert_eq!(Command::parse("quit"), Ok(Command::Exit));
    }

    #[test]
    fn negative_size_reaches_allocator() {
        assert_eq!(
            Command::parse("create a -1"),
            Ok(Command::Create { name: "a".to_string(), size: -1 })
        );
    }

    #[test]
    fn parse_errors() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("create a").is_err());
        assert!(Command::parse("create a big").is_err());
        assert!(Command::parse("stress 1 2 3").is_err());
        assert!(Command::parse("format").is_err());
    }

    #[test]
    fn execute_messages() {
        let mut structure = Structure::default();
        let create = Command::Create { name: "a".to_string(), size: 5000 };
        assert_eq!(execute(&mut structure, &create), "File 'a' created in blocks: [0, 1]");
        assert_eq!(execute(&mut structure, &create), "Error: file 'a' already exists");
        assert_eq!(
            execute(&mut structure, &Command::Retrieve { name: "a".to_string() }),
            "File 'a': size 5000 bytes, blocks [0, 1]."
        );
        assert_eq!(
            execute(&mut structure, &Command::Move { name: "a".to_string() }),
            "File 'a' moved to blocks: [2, 3]"
        );
        assert_eq!(execute(&mut structure, &Command::Delete { name: "a".to_string() }), "File 'a' deleted.");
        assert_eq!(
            execute(&mut structure, &Command::Delete { name: "a".to_string() }),
            "Error: file 'a' does not exist"
        );
    }
}
