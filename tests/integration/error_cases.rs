//! Integration tests for error handling and edge cases.

use pdftk_merge::error::PdfMergeError;
use pdftk_merge::{Config, OutputTarget, merge, merge_value};
use serde_json::json;
use serial_test::serial;
use std::path::PathBuf;

use crate::common::{Inputs, Stub, fake_pdf};

#[tokio::test]
async fn test_error_non_sequence_input() {
    let stub = Stub::concat();
    let inputs = Inputs::new();
    let target = inputs.path().join("never.pdf");
    let config = Config::default()
        .with_lib_path(stub.lib_path())
        .with_output(OutputTarget::file(&target));

    for value in [json!("a.pdf"), json!({ "files": ["a.pdf"] }), json!(null)] {
        let err = merge_value(&value, &config).await.unwrap_err();
        assert!(matches!(err, PdfMergeError::InvalidInput { .. }));
        assert_eq!(
            err.to_string(),
            "Expected files to be an array of paths to PDF files."
        );
    }

    assert!(!stub.was_called());
    assert!(!target.exists());
}

#[tokio::test]
async fn test_error_only_non_string_entries() {
    let err = merge_value(&json!([1, false, null]), &Config::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PdfMergeError::NoFilesSubmitted));
    assert_eq!(err.to_string(), "No files were submitted for merging.");
}

#[tokio::test]
async fn test_error_empty_typed_input() {
    let err = merge(Vec::<PathBuf>::new(), &Config::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PdfMergeError::NoFilesSubmitted));
}

#[tokio::test]
#[serial]
async fn test_error_binary_exits_non_zero() {
    let stub = Stub::failing();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));
    let target = inputs.path().join("merged.pdf");

    let config = Config::default()
        .with_lib_path(stub.lib_path())
        .with_output(OutputTarget::file(&target));
    let err = merge([&a, &b], &config).await.unwrap_err();

    match &err {
        PdfMergeError::ProcessFailed { code, stderr, .. } => {
            assert_eq!(*code, Some(3));
            assert_eq!(stderr, "Error: Unexpected Exception in open_reader()\n");
        }
        other => panic!("expected ProcessFailed, got {other:?}"),
    }

    // The output adapter never ran, and the partial temp file is gone.
    assert!(!target.exists());
    let destinations = stub.destinations();
    assert_eq!(destinations.len(), 1);
    assert!(!destinations[0].exists());
}

#[tokio::test]
#[serial]
async fn test_error_binary_writes_nothing() {
    let stub = Stub::silent();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));

    let config = Config::default().with_lib_path(stub.lib_path());
    let err = merge([&a, &b], &config).await.unwrap_err();

    assert!(matches!(err, PdfMergeError::FailedToReadMerged { .. }));
    assert!(stub.was_called());
}

#[tokio::test]
#[serial]
async fn test_error_missing_binary() {
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));

    let config = Config::default().with_lib_path("/nonexistent/bin/pdftk");
    let err = merge([&a, &b], &config).await.unwrap_err();

    assert!(err.is_process_error(), "unexpected error: {err}");
    assert_eq!(err.exit_code(), 6);
}

#[tokio::test]
#[serial]
async fn test_error_missing_input_reported_by_binary() {
    let stub = Stub::concat();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let missing = inputs.path().join("missing.pdf");

    let config = Config::default().with_lib_path(stub.lib_path());
    let err = merge([&a, &missing], &config).await.unwrap_err();

    assert!(matches!(err, PdfMergeError::ProcessFailed { .. }));
}

#[tokio::test]
async fn test_error_missing_single_input() {
    let err = merge(["/nonexistent/only.pdf"], &Config::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PdfMergeError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
#[serial]
async fn test_error_output_dir_missing() {
    let stub = Stub::concat();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));
    let target = inputs.path().join("no-such-dir").join("merged.pdf");

    let config = Config::default()
        .with_lib_path(stub.lib_path())
        .with_output(OutputTarget::file(&target));
    let err = merge([&a, &b], &config).await.unwrap_err();

    assert!(matches!(err, PdfMergeError::FailedToWrite { .. }));
    assert_eq!(err.exit_code(), 5);
    assert!(!target.parent().unwrap().exists());
    assert!(stub.destinations().iter().all(|d| !d.exists()));
}
