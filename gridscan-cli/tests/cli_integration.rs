use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const SQUARE: &str = "\
# one 3x3 object
0 0 0 0 0
0 1 1 1 0
0 1 1 1 0
0 1 1 1 0
0 0 0 0 0
";

const DIAGONAL: &str = "\
0 0 0 0
0 1 0 0
0 0 1 0
0 0 0 0
";

// Helper function to get the path to the compiled binary
fn gridscan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gridscan").expect("Failed to find gridscan binary");
    cmd.env_remove("GRIDSCAN_ALLOW_DIAGONAL")
        .env_remove("GRIDSCAN_STRICT_CONSISTENCY")
        .env_remove("GRIDSCAN_CROSS_CHECK")
        .env("GRIDSCAN_LOG_LEVEL", "warn")
        .arg("--no-color");
    cmd
}

fn write_grid(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

fn stdout_json(cmd: &mut Command) -> Result<serde_json::Value, Box<dyn Error>> {
    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(serde_json::from_slice(&output)?)
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_count_single_square() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "square.txt", SQUARE)?;

    gridscan_cmd()
        .args(["count", arg(&grid)])
        .assert()
        .success()
        .stdout(contains("1 object(s)"))
        .stdout(contains("External corners: 4"));
    Ok(())
}

#[test]
fn test_count_json_output() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "square.txt", SQUARE)?;

    let value = stdout_json(gridscan_cmd().args(["--json", "count", arg(&grid)]))?;
    assert_eq!(value["status"], "counted");
    assert_eq!(value["detail"]["object_count"], 1);
    assert_eq!(value["detail"]["component_count"], 1);
    Ok(())
}

#[test]
fn test_binary_reports_levels() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "levels.txt", "5,5,5\n5,-2,5\n5,5,9\n")?;

    let value = stdout_json(gridscan_cmd().args(["binary", arg(&grid), "--json"]))?;
    assert_eq!(value["is_binary"], false);
    assert_eq!(value["min"], -2);
    assert_eq!(value["max"], 9);
    Ok(())
}

#[test]
fn test_border_violation_is_a_verdict_not_an_error() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "touching.txt", "0 1 0\n0 1 0\n0 0 0\n")?;

    gridscan_cmd()
        .args(["border", arg(&grid)])
        .assert()
        .success()
        .stdout(contains("Border is not empty"))
        .stdout(contains("sides: top"));
    Ok(())
}

#[test]
fn test_border_needs_binary_grid_or_background() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "levels.txt", "3 3 3\n3 7 3\n3 3 9\n")?;

    gridscan_cmd()
        .args(["border", arg(&grid)])
        .assert()
        .failure()
        .stderr(contains("binary grid or --background"));

    let value = stdout_json(gridscan_cmd().args([
        "--json",
        "border",
        arg(&grid),
        "--background",
        "3",
    ]))?;
    assert_eq!(value["top_empty"], true);
    assert_eq!(value["right_empty"], false);
    Ok(())
}

#[test]
fn test_connectivity_rejects_non_binary_grid() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "levels.txt", "0 0 0\n0 1 0\n0 0 2\n")?;

    gridscan_cmd()
        .args(["connectivity", arg(&grid)])
        .assert()
        .failure()
        .stderr(contains("needs a binary grid"));
    Ok(())
}

#[test]
fn test_connectivity_reports_components() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "square.txt", SQUARE)?;

    let value = stdout_json(gridscan_cmd().args(["--json", "connectivity", arg(&grid)]))?;
    assert_eq!(value["component_count"], 1);
    assert_eq!(value["background_count"], 16);
    assert_eq!(value["diagonal_contacts"], 0);
    Ok(())
}

#[test]
fn test_diagonal_contact_gates_the_count() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "diagonal.txt", DIAGONAL)?;

    gridscan_cmd()
        .args(["count", arg(&grid)])
        .assert()
        .success()
        .stdout(contains("Count unavailable: 1 diagonal-only contact(s), first at (1,1)"));

    // Allowed through, the corner balance of 6 is not a multiple of 4.
    gridscan_cmd()
        .args(["count", arg(&grid), "--allow-diagonal"])
        .assert()
        .failure()
        .stderr(contains("external 6"));

    let value = stdout_json(gridscan_cmd().args([
        "--json",
        "count",
        arg(&grid),
        "--allow-diagonal",
        "--lenient",
    ]))?;
    assert_eq!(value["status"], "unavailable");
    assert_eq!(value["detail"]["reason"], "inconsistent");
    Ok(())
}

#[test]
fn test_malformed_grid_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let grid = write_grid(&dir, "ragged.txt", "0 0 0\n0 0\n")?;

    gridscan_cmd()
        .args(["count", arg(&grid)])
        .assert()
        .failure()
        .stderr(contains("expected 3 samples, found 2"));
    Ok(())
}

#[test]
fn test_analyze_multiple_files_json() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let square = write_grid(&dir, "square.txt", SQUARE)?;
    let diagonal = write_grid(&dir, "diagonal.txt", DIAGONAL)?;

    let value = stdout_json(gridscan_cmd().args([
        "--json",
        "analyze",
        arg(&square),
        arg(&diagonal),
    ]))?;
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["report"]["objects"]["detail"]["object_count"], 1);
    assert_eq!(entries[1]["report"]["objects"]["status"], "unavailable");
    Ok(())
}

#[test]
fn test_analyze_reports_missing_file_and_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let square = write_grid(&dir, "square.txt", SQUARE)?;
    let missing = dir.path().join("missing.txt");

    gridscan_cmd()
        .args(["analyze", arg(&square), arg(&missing)])
        .assert()
        .failure()
        .stdout(contains("All checks passed"))
        .stderr(contains("1 of 2 grid file(s) failed"));
    Ok(())
}

#[test]
fn test_log_dir_receives_log_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let logs = dir.path().join("logs");
    let grid = write_grid(&dir, "square.txt", SQUARE)?;

    gridscan_cmd()
        .args(["count", arg(&grid), "--verbose", "--log-dir", arg(&logs)])
        .assert()
        .success();

    let files: Vec<_> = std::fs::read_dir(&logs)?.collect::<Result<_, _>>()?;
    assert_eq!(files.len(), 1);
    let contents = std::fs::read_to_string(files[0].path())?;
    assert!(contents.contains("1 object(s)"));
    Ok(())
}
