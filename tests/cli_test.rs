//! Command-line behavior of the `resume-skills` binary.

use std::io::Write;
use std::process::{Command, Output};

fn resume_skills(args: &[&str], resource_dir: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resume-skills"))
        .args(args)
        .env("RESOURCE_DIR", resource_dir)
        .env_remove("RESOURCE_SOURCE_URL")
        .env_remove("SKILL_VOCABULARY")
        .env_remove("NER_MAX_CHARS")
        .env_remove("MAX_PHRASE_WORDS")
        .output()
        .unwrap()
}

#[test]
fn test_missing_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = resume_skills(&[], dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: resume-skills"), "stdout: {}", stdout);
}

#[test]
fn test_missing_document_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = resume_skills(&["--quiet", "/no/such/resume.pdf"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error: "), "stdout: {}", stdout);
    assert!(stdout.contains("/no/such/resume.pdf"));
    assert!(!stdout.contains("\"skills\""));
}

#[test]
fn test_unknown_format_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = resume_skills(&["--quiet", "--format", "yaml", "resume.txt"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error: "), "stdout: {}", stdout);
}

#[test]
fn test_blank_resume_prints_notice_without_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(doc, "   \n\n  ").unwrap();
    let path = doc.path().to_str().unwrap();

    for format in ["text", "json"] {
        let output = resume_skills(&["--quiet", "--format", format, path], dir.path());

        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.trim(), resume_skills::output::NO_SKILLS_NOTICE);
        assert!(!stdout.contains("\"skills\""));
    }
}
