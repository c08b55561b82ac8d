//! Application constants.

/// Channel buffer size for fetch results.
pub const FETCH_CHANNEL_SIZE: usize = 4;

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 80;

/// Frames of the loading spinner, advanced once per tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
