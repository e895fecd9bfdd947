mod resolver;
mod shuffle;

pub use resolver::classify;
pub use resolver::latest_date_key;
pub use resolver::parse_playlist_dates;
pub use resolver::resolve;
pub use shuffle::rng_from_seed;
pub use shuffle::shuffle;
