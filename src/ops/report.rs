use crate::structure::inode_table::Slot;
use crate::structure::Snapshot;
use crate::util::format::{block_list, pretty_size_from_bytes};

struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: &[&str]) -> Table {
        Table { header: header.iter().map(|h| h.to_string()).collect(), rows: Vec::new() }
    }

    fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn render(&self) -> String {
        let widths = self.widths();
        let border = widths
            .iter()
            .fold(String::from("+"), |acc, w| acc + &"-".repeat(w + 2) + "+");
        let line = |cells: &[String]| {
            widths
                .iter()
                .zip(cells)
                .fold(String::from("|"), |acc, (w, cell)| acc + &format!(" {:<w$} |", cell, w = *w))
        };

        let mut lines = vec![border.clone(), line(&self.header[..]), border.clone()];
        lines.extend(self.rows.iter().map(|row| line(row.as_slice())));
        lines.push(border);
        lines.join("\n")
    }
}

pub fn render_blocks(snapshot: &Snapshot) -> String {
    let mut table = Table::new(&["Block", "State", "File"]);
    for (index, block) in snapshot.blocks.iter().enumerate() {
        let state = if block.used { "Used" } else { "Free" };
        let owner = block.owner.clone().unwrap_or_else(|| "-".to_string());
        table.add_row(vec![index.to_string(), state.to_string(), owner]);
    }
    table.render()
}

pub fn render_inodes(snapshot: &Snapshot) -> String {
    let mut table = Table::new(&["Inode", "State", "File", "Size", "Blocks"]);
    for (index, slot) in snapshot.inodes.iter().enumerate() {
        let row = match slot {
            Slot::Occupied(inode) => vec![
                index.to_string(),
                "Used".to_string(),
                inode.name().to_string(),
                inode.size().to_string(),
                block_list(inode.blocks()),
            ],
            Slot::Empty => vec![
                index.to_string(),
                "Free".to_string(),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
            ],
        };
        table.add_row(row);
    }
    table.render()
}

pub fn summary(snapshot: &Snapshot) -> String {
    let super_block = &snapshot.super_block;
    format!(
        "{} of {} used, {}/{} blocks free, {}/{} inodes free",
        pretty_size_from_bytes(super_block.used_bytes()),
        pretty_size_from_bytes(super_block.capacity()),
        super_block.free_blocks,
        super_block.block_count,
        super_block.free_inodes,
        super_block.inode_count,
    )
}

pub fn render(snapshot: &Snapshot) -> String {
    format!(
        "--- Blocks ---\n{}\n\n--- Inodes ---\n{}\n\n{}",
        render_blocks(snapshot),
        render_inodes(snapshot),
        summary(snapshot)
    )
}

#[cfg(test)]
mod tests {
    use crate::structure::superblock::SuperBlock;
    use crate::structure::Structure;

    #[test]
    fn block_table() {
        let mut structure = Structure::new(SuperBlock::new(4096, 3, 2).unwrap());
        structure.create("alpha", 5000).unwrap();
        let table = super::render_blocks(&structure.snapshot());
        let expected = "\
+-------+-------+-------+
| Block | State | File  |
+-------+-------+-------+
| 0     | Used  | alpha |
| 1     | Used  | alpha |
| 2     | Free  | -     |
+-------+-------+-------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn inode_table() {
        let mut structure = Structure::new(SuperBlock::new(4096, 3, 2).unwrap());
        structure.create("a", 10).unwrap();
        let table = super::render_inodes(&structure.snapshot());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "| Inode | State | File | Size | Blocks |");
        assert_eq!(lines[3], "| 0     | Used  | a    | 10   | [0]    |");
        assert_eq!(lines[4], "| 1     | Free  | -    | -    | -      |");
    }

    #[test]
    fn usage_summary() {
        let mut structure = Structure::default();
        structure.create("a", 5000).unwrap();
        assert_eq!(
            super::summary(&structure.snapshot()),
            "8.00 KB of 400.00 KB used, 98/100 blocks free, 19/20 inodes free"
        );
        let full = super::render(&structure.snapshot());
        assert!(full.starts_with("--- Blocks ---"));
        assert!(full.contains("--- Inodes ---"));
    }
}
