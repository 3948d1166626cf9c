const KILO_BYTE: u64 = 1024;
const MEGA_BYTE: u64 = KILO_BYTE * 1024;
const GIGA_BYTE: u64 = MEGA_BYTE * 1024;

pub fn pretty_size_from_bytes(bytes: u64) -> String {
    if bytes < KILO_BYTE {
        format!("{} B", bytes)
    } else if bytes < MEGA_BYTE {
        format!("{:.2} KB", bytes as f64 / KILO_BYTE as f64)
    } else if bytes < GIGA_BYTE {
        format!("{:.2} MB", bytes as f64 / MEGA_BYTE as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GIGA_BYTE as f64)
    }
}

/// Renders a block list the way it is shown to users: `[0, 1, 5]`.
pub fn block_list(blocks: &[usize]) -> String {
    let items: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
    format!("[{}]", items.join(", "))
}
