//! Contract tests for CLI output shapes.

use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};
use treemerge::tooling::cli::{CliContext, Commands};

fn write_config(temp: &TempDir) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        "source_root = \"{}\"\ntarget_root = \"{}\"",
        temp.path().join("packages").display(),
        temp.path().join("target").display(),
    )
    .unwrap();
    file
}

#[test]
fn merge_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("packages/app/lib")).unwrap();
    fs::write(temp.path().join("packages/app/lib/a.txt"), "a").unwrap();
    fs::create_dir(temp.path().join("target")).unwrap();
    let config_file = write_config(&temp);

    let cli = CliContext::new(Some(config_file.path().to_path_buf())).unwrap();
    let output = cli
        .execute(&Commands::Merge {
            source_root: None,
            target_root: None,
            dir_name: None,
            on_existing_dir: None,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let lib_dirs = parsed
        .get("lib_dirs_found")
        .and_then(|v| v.as_array())
        .expect("lib_dirs_found array should exist");
    assert_eq!(lib_dirs.len(), 1);
    assert_eq!(parsed.get("files_copied").and_then(|v| v.as_u64()), Some(1));
    assert!(parsed.get("dirs_merged").and_then(|v| v.as_u64()).is_some());
    assert!(parsed.get("dirs_skipped").and_then(|v| v.as_u64()).is_some());
}

#[test]
fn merge_text_summary_reports_counts() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("packages/app/lib")).unwrap();
    fs::write(temp.path().join("packages/app/lib/a.txt"), "a").unwrap();
    fs::create_dir(temp.path().join("target")).unwrap();
    let config_file = write_config(&temp);

    let cli = CliContext::new(Some(config_file.path().to_path_buf())).unwrap();
    let output = cli
        .execute(&Commands::Merge {
            source_root: None,
            target_root: None,
            dir_name: None,
            on_existing_dir: None,
            format: "text".to_string(),
        })
        .unwrap();

    assert!(output.contains("Lib directories found: 1"));
    assert!(output.contains("Files copied: 1"));
}

#[test]
fn scan_json_contract_lists_lib_dirs_without_copying() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("packages/app/lib")).unwrap();
    fs::write(temp.path().join("packages/app/lib/a.txt"), "a").unwrap();
    fs::create_dir(temp.path().join("target")).unwrap();
    let config_file = write_config(&temp);

    let cli = CliContext::new(Some(config_file.path().to_path_buf())).unwrap();
    let output = cli
        .execute(&Commands::Scan {
            source_root: None,
            dir_name: None,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(1));
    let dirs = parsed
        .get("lib_dirs")
        .and_then(|v| v.as_array())
        .expect("lib_dirs array should exist");
    assert!(dirs[0]
        .as_str()
        .unwrap()
        .ends_with("packages/app/lib"));
    // Scan never writes to the target
    assert!(!temp.path().join("target/a.txt").exists());
}

#[test]
fn cli_flags_override_config_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("packages/app/lib")).unwrap();
    fs::write(temp.path().join("packages/app/lib/a.txt"), "a").unwrap();
    fs::create_dir(temp.path().join("target")).unwrap();
    let other_target = temp.path().join("other-target");
    fs::create_dir(&other_target).unwrap();
    let config_file = write_config(&temp);

    let cli = CliContext::new(Some(config_file.path().to_path_buf())).unwrap();
    cli.execute(&Commands::Merge {
        source_root: None,
        target_root: Some(other_target.clone()),
        dir_name: None,
        on_existing_dir: None,
        format: "text".to_string(),
    })
    .unwrap();

    assert!(other_target.join("a.txt").exists());
    assert!(!temp.path().join("target/a.txt").exists());
}
