use std::io::{self, BufRead, Write};

use crate::ops::{execute, Command, HELP};
use crate::structure::Structure;

const PROMPT: &str = "ext2> ";

/// Reads commands line by line until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(structure: &mut Structure, input: R, output: &mut W) -> io::Result<()> {
    writeln!(output, "--- Ext2 simulator ---")?;
    writeln!(output, "{}", HELP)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Exit) => break,
            Ok(command) => writeln!(output, "{}", execute(structure, &command))?,
            Err(message) => {
                log::debug!("rejected input {:?}", line);
                writeln!(output, "Error: {}. Type 'help' for the list of commands.", message)?
            }
        }
    }

    writeln!(output, "Bye.")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::structure::Structure;

    fn session(input: &str) -> (Structure, String) {
        let mut structure = Structure::default();
        let mut output = Vec::new();
        super::run(&mut structure, Cursor::new(input), &mut output).unwrap();
        (structure, String::from_utf8(output).unwrap())
    }

    #[test]
    fn create_and_retrieve() {
        let (structure, output) = session("create a 5000\ncreate b 4096\nretrieve a\nexit\n");
        assert!(output.contains("File 'a' created in blocks: [0, 1]"));
        assert!(output.contains("File 'b' created in blocks: [2]"));
        assert!(output.contains("File 'a': size 5000 bytes, blocks [0, 1]."));
        assert!(output.ends_with("Bye.\n"));
        assert_eq!(structure.files().count(), 2);
    }

    #[test]
    fn stops_at_exit() {
        let (structure, _) = session("exit\ncreate a 10\n");
        assert_eq!(structure.files().count(), 0);
    }

    #[test]
    fn end_of_input_ends_session() {
        let (_, output) = session("status");
        assert!(output.contains("--- Inodes ---"));
        assert!(output.ends_with("Bye.\n"));
    }

    #[test]
    fn bad_input_is_reported() {
        let (_, output) = session("\nfrobnicate\ncreate a lots\ncreate a 0\n");
        assert!(output.contains("Error: unknown command 'frobnicate'."));
        assert!(output.contains("Error: invalid size 'lots'."));
        assert!(output.contains("Error: invalid file size 0, must be a positive number of bytes"));
    }

    #[test]
    fn seeded_stress() {
        let (structure, output) = session("stress 40 11\n");
        assert!(output.contains("Stress test (seed 11)"));
        assert!(output.contains("invariant violations: 0"));
        assert!(structure.check_invariants().is_empty());
    }
}
