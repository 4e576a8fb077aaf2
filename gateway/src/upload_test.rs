use super::*;
use crate::session::Role;

#[test]
fn oversized_pdf_is_rejected_with_size_message() {
    let err = validate_selection("report.pdf", 12 * 1024 * 1024).unwrap_err();
    assert_eq!(err.to_string(), FILE_TOO_LARGE);
}

#[test]
fn size_check_runs_before_type_check() {
    let err = validate_selection("movie.mp4", 50 * 1024 * 1024).unwrap_err();
    assert_eq!(err.to_string(), FILE_TOO_LARGE);
}

#[test]
fn exactly_ten_megabytes_is_allowed() {
    assert!(validate_selection("notes.txt", MAX_UPLOAD_BYTES).is_ok());
}

#[test]
fn small_docx_is_accepted() {
    assert!(validate_selection("thesis.docx", 200 * 1024).is_ok());
}

#[test]
fn extension_check_is_case_insensitive() {
    assert!(validate_selection("SCAN.PDF", 10).is_ok());
    let err = validate_selection("image.png", 10).unwrap_err();
    assert_eq!(err, GatewayError::Validation(INVALID_FILE_TYPE.into()));
}

#[test]
fn document_file_validates_on_construction() {
    assert!(DocumentFile::new("essay.doc", None, vec![0; 16]).is_ok());
    assert!(DocumentFile::new("essay.exe", None, vec![0; 16]).is_err());
}

#[test]
fn document_file_becomes_named_file_part() {
    let part = DocumentFile::new("essay.txt", Some("text/plain".into()), b"hi".to_vec())
        .expect("valid")
        .into_part();
    assert_eq!(part.name(), "file");
}

#[test]
fn failure_messages_follow_status() {
    let too_large = GatewayError::Rejected { status: 413, message: "Payload Too Large".into() };
    assert_eq!(upload_failure_message(&too_large), "Upload failed. File is too large. Maximum size is 10MB.");

    let bad_type = GatewayError::Rejected { status: 415, message: String::new() };
    assert_eq!(
        upload_failure_message(&bad_type),
        "Upload failed. Invalid file type. Please select a supported format."
    );

    let backend = GatewayError::Server { status: 500, message: "Failed to upload file: disk full".into() };
    assert_eq!(upload_failure_message(&backend), "Upload failed. Failed to upload file: disk full");

    let blank = GatewayError::Rejected { status: 400, message: String::new() };
    assert_eq!(upload_failure_message(&blank), "Upload failed. Please try again.");

    let expired = GatewayError::Unauthorized { role: Role::User, message: None };
    assert_eq!(upload_failure_message(&expired), "Upload failed. Please try again.");
}

#[test]
fn progress_label_switches_at_completion() {
    assert_eq!(progress_label(0), "Uploading...");
    assert_eq!(progress_label(99), "Uploading...");
    assert_eq!(progress_label(100), "Processing...");
}

#[test]
fn progress_percent_rounds_like_the_bar() {
    assert_eq!(progress_percent(0, 2048), Some(0));
    assert_eq!(progress_percent(1, 8), Some(13));
    assert_eq!(progress_percent(1, 3), Some(33));
    assert_eq!(progress_percent(2048, 2048), Some(100));
}

#[test]
fn progress_percent_needs_a_known_total() {
    assert_eq!(progress_percent(512, 0), None);
    assert_eq!(progress_percent(4096, 2048), Some(100));
}
