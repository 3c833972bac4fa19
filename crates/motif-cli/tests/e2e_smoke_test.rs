use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use motif::MotifError;
use motif_cli::Args;

// Every run names its configuration file so that files in the working or
// user configuration directory cannot change the outcome.
fn args(output: &Path, config: &Path, seed: Option<u64>) -> Args {
    Args {
        output: output.to_string_lossy().to_string(),
        config: Some(config.to_string_lossy().to_string()),
        seed,
        title: None,
        log_level: "off".to_string(),
    }
}

fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn e2e_smoke_test_default_run() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("patterns.html");
    let config_path = write_config(temp_dir.path(), "empty.toml", "");

    motif_cli::run(&args(&output, &config_path, Some(3))).expect("Run failed");

    let document = fs::read_to_string(&output).expect("Output not written");
    assert!(document.starts_with("<html>\n"));
    assert!(document.ends_with("</body>\n</html>\n"));
    assert_eq!(document.matches("<svg ").count(), 3);
    assert_eq!(document.matches("</svg>").count(), 3);
    assert_eq!(
        document.matches("<circle ").count() + document.matches("<rect ").count(),
        450
    );
}

#[test]
fn e2e_smoke_test_seeded_runs_match() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first.html");
    let second = temp_dir.path().join("second.html");
    let config_path = write_config(temp_dir.path(), "seeded.toml", "seed = 11");

    motif_cli::run(&args(&first, &config_path, None)).expect("First run failed");
    motif_cli::run(&args(&second, &config_path, None)).expect("Second run failed");

    assert_eq!(
        fs::read(&first).expect("First output missing"),
        fs::read(&second).expect("Second output missing")
    );
}

#[test]
fn e2e_smoke_test_config_file_and_title_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("custom.html");
    let config_path = write_config(
        temp_dir.path(),
        "config.toml",
        r#"
        title = "From config"

        [[frames]]
        size = [120, 80]
        count = 7
        kinds = [0, 0]
        rgb = [10, 10, 10]
        "#,
    );

    let mut cli_args = args(&output, &config_path, Some(1));
    cli_args.title = Some("Overridden".to_string());
    motif_cli::run(&cli_args).expect("Run failed");

    let document = fs::read_to_string(&output).expect("Output not written");
    assert!(document.contains("   <title>Overridden</title>\n"));
    assert!(document.contains("   <svg width=\"120\" height=\"80\">\n"));
    assert_eq!(document.matches("<circle ").count(), 7);
    assert_eq!(document.matches("<rect ").count(), 0);
}

#[test]
fn e2e_smoke_test_invalid_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("never.html");
    let config_path = write_config(
        temp_dir.path(),
        "bad.toml",
        r#"
        [[frames]]
        size = [10, 10]
        count = 1
        radius = [200, 20]
        "#,
    );

    let err = motif_cli::run(&args(&output, &config_path, None)).unwrap_err();
    assert!(
        matches!(err, MotifError::Range(range) if range.lo == 200 && range.hi == 20),
        "Inverted range should be a range error, got {err:?}"
    );
    assert!(!output.exists(), "No output should be written on config error");
}

#[test]
fn e2e_smoke_test_unwritable_output_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("missing-dir").join("out.html");
    let config_path = write_config(temp_dir.path(), "empty.toml", "");

    let result = motif_cli::run(&args(&output, &config_path, Some(1)));
    assert!(matches!(result, Err(MotifError::Io(_))));
}
