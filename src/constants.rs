// Signal shape
pub const CENTRE: f64 = 1400.0; // rpm
pub const RANGE1: f64 = 80.0;
pub const FREQ1: f64 = 4.0; // Hz
pub const RANGE2: f64 = 40.0;
pub const FREQ2: f64 = 20.0; // Hz
pub const NOISE_STDDEV: f64 = 10.0;

// Loop timing
pub const LOOP_RATE_HZ: u32 = 100;
pub const DISPLAY_RATE_HZ: f64 = 4.0;

// Spaces written after the readout so a shorter value hides a longer one
pub const READOUT_PADDING: usize = 5;
