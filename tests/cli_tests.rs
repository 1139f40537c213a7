use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

const COFFEE_CSV: &str = "Unnamed: 0,Country,Altitude\n0,Colombia,1800\n1,Brazil,1200\n";

fn csv2json() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_csv2json"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_default_output_path_replaces_extension() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("foo.csv");
    fs::write(&input, COFFEE_CSV).unwrap();

    let assert = csv2json().arg("-i").arg(&input).assert().success();

    let expected = temp_dir.path().join("foo.json");
    assert!(expected.exists());
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Success"));
    assert!(stdout.contains("foo.json"));
}

#[test]
fn test_explicit_output_and_indent() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("coffee.csv");
    let output = temp_dir.path().join("custom.json");
    fs::write(&input, COFFEE_CSV).unwrap();

    csv2json()
        .arg("--input")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--indent", "2"])
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("[\n  {\n    \"Country\": \"Colombia\""));
    assert!(!text.contains("Unnamed: 0"));
}

#[test]
fn test_indent_zero_puts_values_on_their_own_lines() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("coffee.csv");
    fs::write(&input, COFFEE_CSV).unwrap();

    csv2json()
        .arg("-i")
        .arg(&input)
        .args(["--indent", "0"])
        .assert()
        .success();

    let text = fs::read_to_string(temp_dir.path().join("coffee.json")).unwrap();
    assert!(text.starts_with("[\n{\n\"Country\": \"Colombia\",\n\"Altitude\": 1800\n}"));
}

#[test]
fn test_missing_input_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.csv");

    let assert = csv2json().arg("-i").arg(&input).assert().code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("does not exist"));
    assert!(!temp_dir.path().join("missing.json").exists());
}

#[test]
fn test_parse_failure_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.csv");
    fs::write(&input, "a,b\n1,2,3\n").unwrap();

    let assert = csv2json().arg("-i").arg(&input).assert().code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.starts_with("Error:"));
}

#[test]
fn test_write_failure_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("coffee.csv");
    fs::write(&input, COFFEE_CSV).unwrap();

    csv2json()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(temp_dir.path().join("nowhere").join("out.json"))
        .assert()
        .code(1);
}
