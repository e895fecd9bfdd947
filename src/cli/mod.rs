//! # CLI Module
//!
//! User-facing commands of dailyshuffle. Each command receives the loaded
//! [`Config`](crate::config::Config) and talks to the playlist feed through
//! [`HttpPlaylistSource`](crate::source::HttpPlaylistSource).
//!
//! - [`play`] - Endless playback loop, one shuffled daily playlist per cycle
//! - [`today`] - Resolve and print today's playlist once, without delays
//! - [`list`] - Table of every date in the feed and how it relates to today
//!
//! ```bash
//! dailyshuffle play                      # play forever
//! dailyshuffle play --cycles 1 --seed 7  # one reproducible cycle
//! dailyshuffle today --date 20210702     # what would play on that day
//! dailyshuffle list                      # inspect the feed
//! ```
//!
//! Console feedback uses the crate's colored macros; anything that should end
//! up in the log file goes through `log`.

mod fetch;
mod list;
mod play;
mod today;

pub use list::list;
pub use play::play;
pub use today::today;
