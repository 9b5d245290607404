// Environment overrides for configuration
//
// Kept in its own test binary with a single test, since it mutates the
// process environment.

use std::io::Write;
use time_blocks::Config;

const URL_VAR: &str = "TIME_BLOCKS__SERVER__TIME_BLOCK_URL";

#[test]
fn test_env_overrides_file_and_flag_overrides_env() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(
        br#"
        [server]
        time_block_url = "http://file.example/time_blocks"
        timeout_ms = 1500
        "#,
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let previous = std::env::var(URL_VAR).ok();
    std::env::set_var(URL_VAR, "http://env.example/time_blocks");

    let from_env = Config::load(&path);
    let from_flag = Config::load_with_url(&path, Some("http://flag.example/time_blocks"));

    match previous {
        Some(value) => std::env::set_var(URL_VAR, value),
        None => std::env::remove_var(URL_VAR),
    }

    let from_env = from_env.unwrap();
    assert_eq!(from_env.server.time_block_url, "http://env.example/time_blocks");
    assert_eq!(from_env.server.timeout_ms, 1500, "other keys still come from the file");

    let from_flag = from_flag.unwrap();
    assert_eq!(from_flag.server.time_block_url, "http://flag.example/time_blocks");
}
