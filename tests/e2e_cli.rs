//! CLI end-to-end tests
//!
//! Tests for the mediascope command-line interface. Commands that read
//! metadata run against a shell script standing in for mediainfo.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the mediascope binary
#[allow(deprecated)]
fn mediascope_cmd() -> Command {
    Command::cargo_bin("mediascope").unwrap()
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"not really media").unwrap();
    path
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = mediascope_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = mediascope_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediascope"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = mediascope_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediascope"));
}

#[test]
fn test_cli_show_help() {
    let mut cmd = mediascope_cmd();
    cmd.args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Print the metadata view of a file"));
}

#[test]
fn test_cli_show_missing_arg() {
    let mut cmd = mediascope_cmd();
    cmd.arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_cli_sibling_single_file_is_noop() {
    let dir = tempdir().unwrap();
    let only = touch(dir.path(), "only.mkv");

    let mut cmd = mediascope_cmd();
    cmd.arg("sibling")
        .arg(&only)
        .assert()
        .success()
        .stdout(predicate::str::contains(only.display().to_string()));
}

#[test]
fn test_cli_sibling_missing_file_is_noop() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.mkv");

    let mut cmd = mediascope_cmd();
    cmd.args(["sibling", "--previous"])
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("gone.mkv"));
}

#[test]
fn test_cli_sibling_cycles_through_folder() {
    let dir = tempdir().unwrap();
    let start = touch(dir.path(), "a.mkv");
    touch(dir.path(), "b.mkv");
    touch(dir.path(), "c.mkv");
    fs::create_dir(dir.path().join("subdir")).unwrap();

    let mut current = start.clone();
    let mut seen = Vec::new();
    for _ in 0..3 {
        let output = mediascope_cmd()
            .arg("sibling")
            .arg(&current)
            .output()
            .unwrap();
        assert!(output.status.success());
        current = PathBuf::from(String::from_utf8(output.stdout).unwrap().trim());
        assert_ne!(current.file_name().unwrap(), "subdir");
        seen.push(current.clone());
    }

    assert_eq!(current, start);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_cli_settings_creates_default_file() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("conf/settings.conf");

    let mut cmd = mediascope_cmd();
    cmd.arg("--settings")
        .arg(&settings)
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("word-wrap = no"))
        .stdout(predicate::str::contains("wrap-width = 100"));

    assert!(settings.exists());
}

#[test]
fn test_cli_settings_json_and_reset() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("settings.conf");
    fs::write(&settings, "word-wrap = yes\nwrap-width = 10\n").unwrap();

    let mut cmd = mediascope_cmd();
    cmd.args(["settings", "--json", "-s"])
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word-wrap\": true"))
        .stdout(predicate::str::contains("\"wrap-width\": 100"));

    let mut cmd = mediascope_cmd();
    cmd.args(["settings", "--reset", "-s"])
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("word-wrap = no"));

    let text = fs::read_to_string(&settings).unwrap();
    assert!(text.contains("word-wrap = no"));
}

#[cfg(unix)]
mod with_fake_mediainfo {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    const SCRIPT: &str = r#"#!/bin/sh
case "$1" in
  --Version)
    echo "MediaInfo Command line,"
    echo "MediaInfoLib - v24.01"
    exit 0
    ;;
  -f)
    echo "General"
    echo "Count                    : 331"
    echo "Format                   : Matroska"
    echo ""
    echo "Video"
    echo "Format                   : AVC"
    echo "BitDepth                 : 8 bits"
    ;;
  *)
    echo "General"
    echo "Format                   : Matroska"
    echo "Duration                 : 1 min 2 s"
    echo ""
    echo "Video"
    echo "Format                   : AVC"
    echo "Width                    : 1 920 pixels"
    ;;
esac
"#;

    struct Fixture {
        dir: tempfile::TempDir,
        settings: PathBuf,
        media: PathBuf,
    }

    fn fixture() -> Fixture {
        let dir = tempdir().unwrap();
        let script = dir.path().join("mediainfo");
        fs::write(&script, SCRIPT).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let settings = dir.path().join("settings.conf");
        fs::write(&settings, format!("mediainfo = {}\n", script.display())).unwrap();

        let media_dir = dir.path().join("media");
        fs::create_dir(&media_dir).unwrap();
        let media = touch(&media_dir, "clip.mkv");

        Fixture {
            dir,
            settings,
            media,
        }
    }

    fn cmd(fx: &Fixture) -> Command {
        let mut cmd = mediascope_cmd();
        cmd.arg("--settings").arg(&fx.settings);
        cmd
    }

    fn row(name: &str, value: &str) -> String {
        format!("{:<25}: {}", name, value)
    }

    #[test]
    fn show_defaults_to_basic_tab() {
        let fx = fixture();
        cmd(&fx)
            .arg("show")
            .arg(&fx.media)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("General\n\n"))
            .stdout(predicate::str::contains(row("Duration", "1 min 2 s")))
            .stdout(predicate::str::contains("Count").not());
    }

    #[test]
    fn show_group_tab_by_key() {
        let fx = fixture();
        cmd(&fx)
            .args(["show", "--tab", "Video"])
            .arg(&fx.media)
            .assert()
            .success()
            .stdout(predicate::str::contains(row("Width", "1 920 pixels")))
            .stdout(predicate::str::contains(row("BitDepth", "8 bits")))
            .stdout(predicate::str::contains("Duration").not());
    }

    #[test]
    fn show_unknown_tab_fails() {
        let fx = fixture();
        cmd(&fx)
            .args(["show", "--tab", "Menu"])
            .arg(&fx.media)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown tab"))
            .stderr(predicate::str::contains("Advanced"));
    }

    #[test]
    fn search_matches_complete_fields() {
        let fx = fixture();
        cmd(&fx)
            .args(["show", "--search", "BIT"])
            .arg(&fx.media)
            .assert()
            .success()
            .stdout(predicate::str::contains(row("BitDepth", "8 bits")))
            .stdout(predicate::str::contains("Duration").not())
            .stdout(predicate::str::contains("General").not());
    }

    #[test]
    fn tabs_lists_captions() {
        let fx = fixture();
        cmd(&fx)
            .arg("tabs")
            .arg(&fx.media)
            .assert()
            .success()
            .stdout(predicate::str::contains("Basic"))
            .stdout(predicate::str::contains("Advanced"))
            .stdout(predicate::str::contains("General (Matroska)"))
            .stdout(predicate::str::contains("Video (AVC)"));
    }

    #[test]
    fn show_json() {
        let fx = fixture();
        let output = cmd(&fx)
            .args(["show", "--json", "--tab", "General"])
            .arg(&fx.media)
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["active"], "General");
        assert_eq!(json["categories"][0]["key"], "Basic");
        assert_eq!(json["categories"][2]["caption"], "General (Matroska)");
        assert!(json["fields"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f["name"] == "Count" && f["is_detailed"] == true));
    }

    #[test]
    fn show_missing_file_fails() {
        let fx = fixture();
        cmd(&fx)
            .arg("show")
            .arg(fx.dir.path().join("missing.mkv"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn check_tools_uses_configured_path() {
        let fx = fixture();
        cmd(&fx)
            .arg("check-tools")
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ mediainfo"))
            .stdout(predicate::str::contains("v24.01"));
    }

    #[test]
    fn browse_reads_commands_from_stdin() {
        let fx = fixture();
        let mut browse = cmd(&fx);
        browse.arg("browse").arg(&fx.media);

        assert_cmd::Command::from_std(browse)
            .write_stdin("tab Video\n/bit\nesc\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("clip.mkv - mediascope"))
            .stdout(predicate::str::contains("[3: Video (AVC)]"))
            .stdout(predicate::str::contains("search: bit"));
    }
}
