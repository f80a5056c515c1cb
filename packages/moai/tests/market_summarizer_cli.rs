//! Process-level behaviour of the `market-summarizer` binary with piped stdin
//! and an unreachable gateway.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const NO_DATA: &str = "Veri bulunamadı veya bir hata oluştu.";

fn run_with_input(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_market-summarizer"))
        .env("COINGECKO_GATEWAY_URL", "http://127.0.0.1:1")
        .env("OPENAI_API_KEY", "")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_unsupported_coin_lists_supported_coins() {
    let output = run_with_input("Dogecoin\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with(
        "Desteklenen coinler: bitcoin, ethereum, arbitrum, solana, avalanche, cardano, polkadot\n"
    ));
    assert!(stdout.contains("Hata: dogecoin desteklenen coinler arasında değil.\n"));
    assert!(stdout.trim_end().ends_with(NO_DATA));
    assert!(!stdout.contains("Veri alınırken hata oluştu"));
}

#[test]
fn test_unreachable_gateway_reports_fetch_failure() {
    let output = run_with_input("bitcoin\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    let failure = stdout.find("Veri alınırken hata oluştu").unwrap();
    let no_data = stdout.find(NO_DATA).unwrap();
    assert!(failure < no_data);
    assert!(!stdout.contains("Özet:"));
}
