mod common;

use assert_cmd::Command;
use common::{create_jpeg, create_temp_directory, create_text_file};
use predicates::prelude::*;
use std::fs;

fn jpegpress() -> Command {
    Command::cargo_bin("jpegpress").unwrap()
}

#[test]
fn test_cli_help() {
    jpegpress().arg("--help").assert().success();
}

#[test]
fn test_compress_help() {
    jpegpress().args(["compress", "--help"]).assert().success();
}

#[test]
fn test_export_dir_help() {
    jpegpress().args(["export-dir", "--help"]).assert().success();
}

#[test]
fn test_compress_requires_files() {
    jpegpress().arg("compress").assert().failure();
}

#[test]
fn test_export_dir_first_run_defaults_to_home() {
    let work = create_temp_directory();

    let home = dirs::home_dir().unwrap();
    jpegpress()
        .current_dir(work.path())
        .arg("export-dir")
        .assert()
        .success()
        .stdout(predicate::str::contains(home.to_string_lossy().as_ref()));

    assert!(work.path().join("export_directory.json").exists());
}

#[test]
fn test_export_dir_set_then_show() {
    let work = create_temp_directory();
    let target = work.path().join("exports");
    fs::create_dir(&target).unwrap();

    jpegpress()
        .current_dir(work.path())
        .args(["export-dir", "--set"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains(target.to_string_lossy().as_ref()));

    jpegpress()
        .current_dir(work.path())
        .arg("export-dir")
        .assert()
        .success()
        .stdout(predicate::str::contains(target.to_string_lossy().as_ref()));
}

#[test]
fn test_compress_full_run() {
    let work = create_temp_directory();
    let export = work.path().join("out");
    fs::create_dir(&export).unwrap();
    let a = create_jpeg(work.path(), "vacation.jpg", 320, 240);
    let b = create_jpeg(work.path(), "city.jpeg", 200, 200);

    jpegpress()
        .current_dir(work.path())
        .arg("compress")
        .arg(&a)
        .arg(&b)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 images"))
        .stdout(predicate::str::contains("Prêt"))
        .stdout(predicate::str::contains("Terminé"))
        .stdout(predicate::str::contains("Mo ->"))
        .stdout(predicate::str::contains("Différence de"));

    assert!(export.join("vacation-compressée.jpg").exists());
    assert!(export.join("city-compressée.jpeg").exists());
}

#[test]
fn test_compress_single_file_label() {
    let work = create_temp_directory();
    let export = work.path().join("out");
    fs::create_dir(&export).unwrap();
    let photo = create_jpeg(work.path(), "photo.jpg", 120, 90);

    jpegpress()
        .current_dir(work.path())
        .arg("compress")
        .arg(&photo)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 image"));
}

#[test]
fn test_compress_rejects_mixed_selection() {
    let work = create_temp_directory();
    let export = work.path().join("out");
    fs::create_dir(&export).unwrap();
    let good = create_jpeg(work.path(), "good.jpg", 64, 64);
    let bad = create_text_file(work.path(), "photo.png");

    jpegpress()
        .current_dir(work.path())
        .arg("compress")
        .arg(&good)
        .arg(&bad)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Seuls les fichiers 'JPG' et 'JPEG'"));

    // Rejection happens before any output is written.
    assert_eq!(fs::read_dir(&export).unwrap().count(), 0);
}

#[test]
fn test_compress_missing_export_directory() {
    let work = create_temp_directory();
    let missing = work.path().join("never-created");
    let photo = create_jpeg(work.path(), "photo.jpg", 64, 64);

    jpegpress()
        .current_dir(work.path())
        .arg("compress")
        .arg(&photo)
        .arg("--export-dir")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dossier d'export existant"));
}

#[test]
fn test_compress_missing_source_file() {
    let work = create_temp_directory();
    let export = work.path().join("out");
    fs::create_dir(&export).unwrap();
    let gone = work.path().join("gone.jpg");

    jpegpress()
        .current_dir(work.path())
        .arg("compress")
        .arg(&gone)
        .arg("--export-dir")
        .arg(&export)
        .assert()
        .failure();
}
