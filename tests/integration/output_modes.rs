//! Integration tests for the buffer, stream, and file output targets.

use pdftk_merge::{Config, MergeOutput, OutputTarget, merge, merge_value};
use serde_json::json;
use serial_test::serial;
use tokio::io::AsyncReadExt;

use crate::common::{Inputs, Stub, fake_pdf};

#[tokio::test]
#[serial]
async fn test_stream_matches_buffer() {
    let stub = Stub::concat();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));

    let buffer_config = Config::default().with_lib_path(stub.lib_path());
    let buffered = merge([&a, &b], &buffer_config).await.unwrap();

    let stream_config = buffer_config.clone().with_output(OutputTarget::Stream);
    let MergeOutput::Stream(mut stream) = merge([&a, &b], &stream_config).await.unwrap() else {
        panic!("expected a stream");
    };

    let mut streamed = Vec::new();
    stream.read_to_end(&mut streamed).await.unwrap();

    assert_eq!(Some(streamed.as_slice()), buffered.as_bytes());
}

#[tokio::test]
#[serial]
async fn test_file_output_writes_and_returns_bytes() {
    let stub = Stub::concat();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));
    let target = inputs.path().join("merged.pdf");

    let config = Config::default()
        .with_lib_path(stub.lib_path())
        .with_output(OutputTarget::file(&target));
    let output = merge([&a, &b], &config).await.unwrap();

    let expected = [fake_pdf("a"), fake_pdf("b")].concat();
    assert_eq!(output.path(), Some(target.as_path()));
    assert_eq!(output.as_bytes(), Some(expected.as_slice()));
    assert_eq!(std::fs::read(&target).unwrap(), expected);
}

#[tokio::test]
#[serial]
async fn test_output_target_parsed_from_json_config() {
    let stub = Stub::concat();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));

    let config: Config = serde_json::from_value(json!({
        "libPath": stub.lib_path(),
        "output": "ReadStream",
    }))
    .unwrap();

    let output = merge([&a, &b], &config).await.unwrap();
    assert!(matches!(output, MergeOutput::Stream(_)));
    assert_eq!(
        output.into_bytes().await.unwrap(),
        [fake_pdf("a"), fake_pdf("b")].concat()
    );
}

#[tokio::test]
#[serial]
async fn test_merge_value_drops_non_strings() {
    let stub = Stub::concat();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));

    let request = json!([a.to_str().unwrap(), 17, null, { "x": 1 }, b.to_str().unwrap()]);
    let config = Config::default().with_lib_path(stub.lib_path());

    let output = merge_value(&request, &config).await.unwrap();
    assert_eq!(
        output.as_bytes(),
        Some([fake_pdf("a"), fake_pdf("b")].concat().as_slice())
    );
    assert_eq!(stub.last_args()[..2], [a.display().to_string(), b.display().to_string()]);
}

#[tokio::test]
async fn test_single_file_to_file_target() {
    let inputs = Inputs::new();
    let only = inputs.add("only.pdf", &fake_pdf("only"));
    let target = inputs.path().join("copy.pdf");

    let config = Config::default().with_output(OutputTarget::file(&target));
    let output = merge([&only], &config).await.unwrap();

    assert_eq!(output.as_bytes(), Some(fake_pdf("only").as_slice()));
    assert_eq!(std::fs::read(&target).unwrap(), fake_pdf("only"));
}

#[tokio::test]
#[serial]
async fn test_file_output_uses_regular_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let stub = Stub::concat();
    let inputs = Inputs::new();
    let a = inputs.add("a.pdf", &fake_pdf("a"));
    let b = inputs.add("b.pdf", &fake_pdf("b"));
    let mode = |path: &std::path::Path| {
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    };

    let fresh = inputs.path().join("fresh.pdf");
    let config = Config::default()
        .with_lib_path(stub.lib_path())
        .with_output(OutputTarget::file(&fresh));
    merge([&a, &b], &config).await.unwrap();
    assert_eq!(mode(&fresh), mode(&a));

    let existing = inputs.add("existing.pdf", b"old");
    std::fs::set_permissions(&existing, std::fs::Permissions::from_mode(0o644)).unwrap();
    let config = config.with_output(OutputTarget::file(&existing));
    merge([&a, &b], &config).await.unwrap();

    assert_eq!(mode(&existing), 0o644);
    assert_eq!(
        std::fs::read(&existing).unwrap(),
        [fake_pdf("a"), fake_pdf("b")].concat()
    );
}
