use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use chrono::{DateTime, Local};
use crossterm::{cursor, queue, style::Print};

use crate::app::App;
use crate::util::format_rpm;

pub struct Summary {
    pub started: DateTime<Local>,
    pub stopped: DateTime<Local>,
    pub ticks: u64,
    pub uptime_secs: f64,
    pub last_reading: Option<i64>,
}

pub fn run(app: App, tick_rate: Duration, running: &AtomicBool) -> io::Result<Summary> {
    run_to(&mut io::stdout(), app, tick_rate, running)
}

// Only the readout line is rewritten; the cursor is never hidden
fn run_to<W: Write>(
    out: &mut W,
    mut app: App,
    tick_rate: Duration,
    running: &AtomicBool,
) -> io::Result<Summary> {
    let started = Local::now();
    let res = run_loop(out, &mut app, tick_rate, running);

    // Cleanup: leave the last readout on its own line
    queue!(out, Print("\n"))?;
    out.flush()?;
    res?;

    Ok(Summary {
        started,
        stopped: Local::now(),
        ticks: app.ticks,
        uptime_secs: app.elapsed(),
        last_reading: app.last_reading,
    })
}

fn run_loop<W: Write>(
    out: &mut W,
    app: &mut App,
    tick_rate: Duration,
    running: &AtomicBool,
) -> io::Result<()> {
    let mut next_tick = Instant::now();

    while running.load(Ordering::SeqCst) {
        if let Some(rpm) = app.tick() {
            draw(out, rpm)?;
        }

        next_tick += tick_rate;
        let timeout = next_tick
            .checked_duration_since(Instant::now())
            .unwrap_or_else(|| Duration::from_secs(0));
        // Fell behind (suspended terminal, slow stdout): resync instead of bursting
        if timeout.is_zero() {
            next_tick = Instant::now();
        }
        thread::sleep(timeout);
    }
    Ok(())
}

pub fn draw<W: Write>(out: &mut W, rpm: i64) -> io::Result<()> {
    queue!(out, cursor::MoveToColumn(0), Print(format_rpm(rpm)))?;
    out.flush()
}
