use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_charforge")
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("charforge-{name}-{stamp}"));
    fs::create_dir_all(&dir).expect("temp dir should be created");
    dir
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("charforge should start");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("script should be written");
    child.wait_with_output().expect("charforge should finish")
}

#[test]
fn resolve_command_emits_json() {
    let output = Command::new(bin())
        .args(["resolve", "Leather Armor", "2 Daggers", "Holy Symbol", "8 GP", "--json"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("resolve should emit json");
    assert_eq!(payload["equipment"], serde_json::json!(["Leather Armor", "Dagger x 2"]));
    assert_eq!(payload["inventory"], serde_json::json!(["Holy Symbol"]));
    assert_eq!(payload["gold"], 8);
    assert_eq!(payload["silver"], 0);
    assert_eq!(payload["copper"], 0);
}

#[test]
fn resolve_command_prints_text() {
    let output = Command::new(bin())
        .args(["resolve", "4 Handaxes", "15 GP"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Handaxe x 4"));
    assert!(stdout.contains("Coin: 15 GP"));
}

#[test]
fn resolve_without_options_is_usage_error() {
    let output = Command::new(bin())
        .arg("resolve")
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn list_command_prints_tables() {
    let output = Command::new(bin())
        .args(["list", "classes"])
        .output()
        .expect("list should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Barbarian"));
    assert!(stdout.contains("Wizard"));

    let output = Command::new(bin())
        .args(["list", "spells"])
        .output()
        .expect("list should run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn build_command_runs_scripted_session() {
    let script = "Dwarf\n3\nMedicine, History\n1\n4\n4\n2\n3\n1\n1\nWisdom\nCharisma\n1\n1\nIlsa\ny\n";
    let output = run_with_stdin(&["build", "--json"], script);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("build should emit json");
    assert_eq!(record["name"], "Ilsa");
    assert_eq!(record["max_hp"], 11);
    assert_eq!(record["armor_class"], 15);
    assert_eq!(record["purse"]["gold"], 15);
}

#[test]
fn build_command_fails_when_input_ends() {
    let output = run_with_stdin(&["build"], "Dwarf\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("aborted"));
}

#[test]
fn config_flag_is_honored() {
    let dir = unique_temp_dir("config");
    let config = dir.join("charforge.toml");
    fs::write(
        dir.join("catalogs.toml"),
        "[simple_weapons.\"Holy Symbol\"]\ndamage = \"1d4\"\ndamage_type = \"bludgeoning\"\n",
    )
    .expect("catalog should be written");
    fs::write(&config, format!("data_dir = {:?}\n", dir.to_string_lossy()))
        .expect("config should be written");

    let output = Command::new(bin())
        .args(["resolve", "Holy Symbol", "--json", "--config"])
        .arg(&config)
        .output()
        .expect("resolve should run");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("resolve should emit json");
    assert_eq!(payload["equipment"], serde_json::json!(["Holy Symbol"]));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = unique_temp_dir("bad-config");
    let config = dir.join("charforge.toml");
    fs::write(&config, "point_buy_budget = 0\n").expect("config should be written");

    let output = Command::new(bin())
        .args(["list", "species", "--config"])
        .arg(&config)
        .output()
        .expect("list should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("point_buy_budget"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn config_source_is_logged() {
    let dir = unique_temp_dir("log-config");
    let config = dir.join("charforge.toml");
    fs::write(&config, "seed = 7\n").expect("config should be written");

    let output = Command::new(bin())
        .args(["list", "species", "--config"])
        .arg(&config)
        .env("RUST_LOG", "charforge=debug")
        .output()
        .expect("list should run");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Loaded config from"), "stderr: {}", stderr);

    let _ = fs::remove_dir_all(dir);
}
