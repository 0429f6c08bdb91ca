use crate::constants::READOUT_PADDING;

// Readout text: the integer followed by padding that blanks any leftover digits
pub fn format_rpm(rpm: i64) -> String {
    format!("{}{}", rpm, " ".repeat(READOUT_PADDING))
}

pub fn format_uptime(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let (h, m, s) = (total / 3600, (total / 60) % 60, total % 60);
    if h > 0 {
        format!("{}h {:02}m {:02}s", h, m, s)
    } else if m > 0 {
        format!("{}m {:02}s", m, s)
    } else {
        format!("{:.1}s", secs.max(0.0))
    }
}
