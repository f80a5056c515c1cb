//! Process-level behaviour of the `news-scraper` binary that does not need a
//! working browser.

use std::process::{Command, Output};

fn news_scraper() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_news-scraper"));
    cmd.env("CHROME_PATH", "/nonexistent/chrome")
        .env_remove("NEWS_SETTLE_MS")
        .env_remove("RUST_LOG");
    cmd
}

fn assert_empty_json(output: &Output) {
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[]\n");
}

#[test]
fn test_missing_coin_argument_exits_with_status_one() {
    let output = news_scraper().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Coin adı gerekli!"));
}

#[test]
fn test_browser_launch_failure_prints_empty_array() {
    let output = news_scraper().arg("bitcoin").output().unwrap();

    assert_empty_json(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Hata oluştu"));
}

#[test]
fn test_invalid_config_prints_empty_array() {
    let output = news_scraper()
        .arg("bitcoin")
        .env("NEWS_SETTLE_MS", "abc")
        .output()
        .unwrap();

    assert_empty_json(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("NEWS_SETTLE_MS"));
}

#[test]
fn test_extra_arguments_are_ignored() {
    let output = news_scraper().args(["bitcoin", "ethereum", "--verbose"]).output().unwrap();

    assert_empty_json(&output);
}

#[test]
fn test_coin_name_may_start_with_a_hyphen() {
    let output = news_scraper().arg("-bitcoin").output().unwrap();

    assert_empty_json(&output);
}

#[test]
fn test_stderr_has_no_colour_codes_when_piped() {
    let output = news_scraper().arg("bitcoin").output().unwrap();

    assert!(!output.stderr.is_empty());
    assert!(!output.stderr.contains(&0x1b));
}
