use std::{env, time::Duration};

use dailyshuffle::config::Config;

// Kept as the only test in this binary since it changes the process environment
#[test]
fn test_config_from_env() {
    // SAFETY: no other thread of this test binary reads or writes the environment
    unsafe {
        env::set_var("PLAYLISTS_URL", "https://example.com/from-env.json");
        env::set_var("MAX_RETRIES", "7");
        env::set_var("FETCH_TIMEOUT_SECS", "12");
        env::remove_var("DATE_FORMAT");
    }

    let config = Config::from_env(None).unwrap();
    assert_eq!(config.playlists_url, "https://example.com/from-env.json");
    assert_eq!(config.max_retries, 7);
    assert_eq!(config.fetch_timeout, Duration::from_secs(12));
    assert_eq!(config.date_format, "%Y%m%d");

    // The --url flag wins over PLAYLISTS_URL, other variables still apply
    let config = Config::from_env(Some("http://localhost:8000/feed.json".into())).unwrap();
    assert_eq!(config.playlists_url, "http://localhost:8000/feed.json");
    assert_eq!(config.max_retries, 7);

    // SAFETY: see above
    unsafe {
        env::remove_var("PLAYLISTS_URL");
    }
    assert!(Config::from_env(None).is_err());
    assert!(Config::from_env(Some("http://localhost:8000/feed.json".into())).is_ok());
}
