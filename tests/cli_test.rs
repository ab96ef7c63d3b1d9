use docx_rs::{Docx, Paragraph, Run};
use std::fs::File;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn abbrex(dir: &Path, args: &[&str], api_key: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_abbrex"));
    cmd.current_dir(dir)
        .args(args)
        .env_remove("OPENAI_API_KEY")
        .env_remove("ABBREX_TIMEOUT_SECS")
        .env_remove("ABBREX_MODEL")
        // Unroutable endpoint: any accidental request fails fast.
        .env("OPENAI_BASE_URL", "http://127.0.0.1:9/v1")
        .env("RUST_LOG", "off");
    if let Some(key) = api_key {
        cmd.env("OPENAI_API_KEY", key);
    }
    cmd.output().expect("failed to run abbrex binary")
}

fn write_docx(dir: &Path, name: &str, text: &str) {
    let file = File::create(dir.join(name)).unwrap();
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
        .build()
        .pack(file)
        .unwrap();
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let dir = TempDir::new().unwrap();
    let out = abbrex(dir.path(), &[], Some("sk-test"));

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn unsupported_extension_exits_one_without_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("report.txt"), "The FBI report.").unwrap();

    let out = abbrex(dir.path(), &["report.txt"], Some("sk-test"));

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error during processing"));
    assert!(stderr.contains("Unsupported format"));
}

#[test]
fn missing_api_key_fails_before_reading_file() {
    let dir = TempDir::new().unwrap();
    // The file does not exist; the credential error must win.
    let out = abbrex(dir.path(), &["absent.docx"], None);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("OPENAI_API_KEY"));
    assert!(!stderr.contains("File not found"));
}

#[test]
fn document_without_abbreviations_prints_empty_object() {
    let dir = TempDir::new().unwrap();
    write_docx(dir.path(), "plain.docx", "Nothing in here looks like an acronym.");

    let out = abbrex(dir.path(), &["plain.docx"], Some("sk-test"));

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "{}");
}

#[test]
fn unreachable_service_exits_one_without_json() {
    let dir = TempDir::new().unwrap();
    write_docx(dir.path(), "memo.docx", "The FBI and NASA work together.");

    let out = abbrex(dir.path(), &["memo.docx"], Some("sk-test"));

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error during processing"));
}

#[test]
fn docx_out_writes_report_alongside_json() {
    let dir = TempDir::new().unwrap();
    write_docx(dir.path(), "plain.docx", "Nothing in here looks like an acronym.");

    let out = abbrex(
        dir.path(),
        &["plain.docx", "--docx-out", "report.docx"],
        Some("sk-test"),
    );

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "{}");
    let bytes = std::fs::read(dir.path().join("report.docx")).unwrap();
    assert!(docx_rs::read_docx(&bytes).is_ok());
}

#[test]
fn extra_positional_argument_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    write_docx(dir.path(), "plain.docx", "Nothing in here looks like an acronym.");

    let out = abbrex(dir.path(), &["plain.docx", "other.docx"], Some("sk-test"));

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}
