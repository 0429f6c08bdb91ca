use std::{
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use crate::app::App;
use crate::config::SimConfig;
use crate::util::format_uptime;

mod app;
mod config;
mod constants;
mod filter;
mod signal;
mod ui;
mod util;

fn main() -> Result<(), Box<dyn Error>> {
    let config = SimConfig::default();
    let app = App::new(&config)?;

    // Ctrl-C only flips the flag; the loop notices it at the next tick
    let running = Arc::new(AtomicBool::new(true));
    let running_handler = Arc::clone(&running);
    ctrlc::set_handler(move || running_handler.store(false, Ordering::SeqCst))?;

    let summary = ui::run(app, config.tick_interval(), &running)?;

    let last = summary
        .last_reading
        .map(|rpm| format!("{} rpm", rpm))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "Stopped at {} (started {}): {} ticks in {}, last reading {}",
        summary.stopped.format("%H:%M:%S"),
        summary.started.format("%H:%M:%S"),
        summary.ticks,
        format_uptime(summary.uptime_secs),
        last,
    );
    Ok(())
}
