use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fasta_rewrite() -> Command {
    Command::cargo_bin("fasta-rewrite").unwrap()
}

#[test]
fn test_rewrites_with_default_wrapping() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.fa");
    let sequence = "ACGT".repeat(20);
    std::fs::write(
        &input,
        format!(">contig_1 assembled\n{}\n{}\n\n>contig_2\nGG\nCC\n", &sequence[..50], &sequence[50..]),
    )
    .unwrap();

    let expected = format!(
        ">contig_1 assembled\n{}\n{}\n>contig_2\nGGCC\n",
        &sequence[..60],
        &sequence[60..]
    );

    fasta_rewrite()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_writes_to_output_file_unwrapped() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.fa");
    let output = temp_dir.path().join("out.fa");
    std::fs::write(&input, ">a\nAC\nGT\n").unwrap();

    fasta_rewrite()
        .arg(&input)
        .args(["--width", "0", "--output"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), ">a\nACGT\n");
}

#[test]
fn test_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    fasta_rewrite()
        .arg(temp_dir.path().join("missing.fa"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File operation failed"));
}

#[test]
fn test_headerless_input_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bad.fa");
    std::fs::write(&input, "ACGT\n").unwrap();

    fasta_rewrite()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 1"));
}
