use assert_cmd::Command;
use predicates::prelude::*;

const CLOUDFLARE: &str =
    "sdns://AgcAAAAAAAAABzEuMC4wLjEAEmRucy5jbG91ZGZsYXJlLmNvbQovZG5zLXF1ZXJ5";

fn dohcat(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dohcat").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--no-color")
        .env_remove("DNSCRYPT_PUBLIC_RESOLVERS_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn decode_prints_endpoint_url() {
    let dir = tempfile::TempDir::new().unwrap();
    dohcat(&dir)
        .args(["--format", "json", "decode", CLOUDFLARE])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"url\": \"https://dns.cloudflare.com/dns-query\"",
        ))
        .stdout(predicate::str::contains("\"address\": \"1.0.0.1\""));
}

#[test]
fn decode_failure_exits_non_zero() {
    let dir = tempfile::TempDir::new().unwrap();
    dohcat(&dir)
        .args(["decode", "not-a-stamp"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing sdns:// prefix"))
        .stderr(predicate::str::contains("1 of 1 stamps could not be decoded"));
}

#[test]
fn parse_reads_local_document() {
    let dir = tempfile::TempDir::new().unwrap();
    let list = dir.path().join("public-resolvers.md");
    std::fs::write(
        &list,
        format!("## public-resolvers\n{CLOUDFLARE}\n## cloudflare\n{CLOUDFLARE}\n"),
    )
    .unwrap();

    dohcat(&dir)
        .args(["--format", "json", "parse", "--endpoints"])
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"cloudflare\""))
        .stdout(predicate::str::contains("\"stamps\": 1"));
}

#[test]
fn show_lists_catalog() {
    let dir = tempfile::TempDir::new().unwrap();
    let catalog = dir.path().join("servers.json");
    std::fs::write(
        &catalog,
        r#"[
  {
    "name": "Example",
    "url": "https://doh.example.net/dns-query",
    "requestMethod": "get",
    "allowsCorsFallback": false,
    "ipHints": ["192.0.2.53"]
  }
]
"#,
    )
    .unwrap();

    dohcat(&dir)
        .args(["--verbose", "show"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://doh.example.net/dns-query"))
        .stdout(predicate::str::contains("no-logs: unknown"))
        .stdout(predicate::str::contains("1 of 1 endpoints"));
}

#[test]
fn failed_build_keeps_previous_catalog() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("servers.json");
    std::fs::write(&out, "[]\n").unwrap();

    dohcat(&dir)
        .args(["build", "--source-url", "http://127.0.0.1:9/public-resolvers.md"])
        .arg("--output")
        .arg(&out)
        .args(["--timeout", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fetch stage failed"));

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "[]\n");
}

#[test]
fn config_set_then_show() {
    let dir = tempfile::TempDir::new().unwrap();
    dohcat(&dir)
        .args(["config", "set", "max_redirects", "4"])
        .assert()
        .success();

    dohcat(&dir)
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_redirects\": 4"));
}
