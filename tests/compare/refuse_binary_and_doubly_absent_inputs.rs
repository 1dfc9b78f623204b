use crate::compare::options;
use pretty_assertions::assert_eq;
use rift::{DiffError, FileVersion, compare};

#[test]
fn refuse_content_with_a_nul_run() {
    let error = compare(
        FileVersion::present("image.png", "\u{0}\u{0}\u{0}PNG"),
        FileVersion::present("other", "text"),
        &options(),
    )
    .unwrap_err();

    assert_eq!(
        error,
        DiffError::BinaryContent {
            path: "image.png".to_string()
        }
    );
    assert_eq!(
        error.to_string(),
        "could not compare binary file 'image.png'"
    );
}

#[test]
fn refuse_two_absent_sides() {
    let error = compare(
        FileVersion::absent("one"),
        FileVersion::absent("two"),
        &options(),
    )
    .unwrap_err();

    assert!(matches!(error, DiffError::InvalidInput(_)));
}

#[test]
fn binary_detection_checks_both_sides() {
    let error = compare(
        FileVersion::present("text", "plain"),
        FileVersion::present("blob", "data\u{0}\u{0}\u{0}"),
        &options(),
    )
    .unwrap_err();

    assert!(matches!(error, DiffError::BinaryContent { .. }));
}
