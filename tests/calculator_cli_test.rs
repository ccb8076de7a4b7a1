use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EXPECTED_S1: &str = "\
2.00 µM working solution of annealed adapter A1:
   1X annealing buffer:     0.000 µl
   2.00 µM adapter stock: 10.000 µl
   Total volume            10.000 µl

Ligation reaction for sample S1:
   0.050 µM digested DNA:     10.000 µl
   10X ligase buffer:          2.000 µl
   2.000 µM adapter  A1:       5.000 µl
   1.5M (~40X) NaCl:           0.500 µl
   T4 DNA ligase 2000000 U/ml: 2.000 µl
   Water:                      0.500 µl
   Total volume:              20.000 µl
";

fn calc() -> Command {
    Command::cargo_bin("ligation-calc").unwrap()
}

#[test]
fn test_prints_protocol_to_stdout() {
    calc()
        .args(["S1", "10", "100", "2.0", "--molarity", "0.05", "-i", "A1"])
        .assert()
        .success()
        .stdout(EXPECTED_S1);
}

#[test]
fn test_outfile_matches_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let outfile = temp_dir.path().join("s1.txt");

    calc()
        .args(["S1", "10", "100", "2.0", "-m", "0.05", "-i", "A1", "-o"])
        .arg(&outfile)
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(&outfile).unwrap(), EXPECTED_S1);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let args = ["S7", "8.5", "42", "15", "--fragmass", "0.33", "-e", "12"];
    let first = calc().args(args).output().unwrap();
    let second = calc().args(args).output().unwrap();

    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_working_volume_is_raised_for_dilute_samples() {
    calc()
        .args(["S2", "10", "5", "100", "--molarity", "0.005"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   Total volume            50.000 µl"))
        .stdout(predicate::str::contains("   1X annealing buffer:    49.500 µl"))
        .stdout(predicate::str::contains("   Water:                      0.125 µl"));
}

#[test]
fn test_missing_quantification_exits_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let outfile = temp_dir.path().join("never.txt");

    calc()
        .args(["S1", "10", "100", "2.0", "-o"])
        .arg(&outfile)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Please, specify either DNA molarity (pmol/µl) or the average DNA fragment molecular mass (ng/fmol)",
        ));

    assert!(!outfile.exists());
}

#[test]
fn test_zero_stock_is_rejected() {
    calc()
        .args(["S1", "10", "100", "0", "-m", "0.05"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stock"));
}

#[test]
fn test_non_numeric_argument_is_a_usage_error() {
    calc()
        .args(["S1", "ten", "100", "2.0", "-m", "0.05"])
        .assert()
        .code(2);
}

#[test]
fn test_protocol_file_changes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("protocol.toml");
    std::fs::write(&config, "[defaults]\nworking = 20.0\n").unwrap();

    calc()
        .args(["S1", "10", "100", "2.0", "-m", "0.05", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("   Total volume            20.000 µl"));
}

#[test]
fn test_json_format() {
    let output = calc()
        .args(["S1", "10", "100", "2.0", "-m", "0.05", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ligation"]["total_volume"], 20.0);
    assert_eq!(value["dilution"]["stock_molarity"], 2.0);
}
