use crate::compare::{content, options};
use pretty_assertions::assert_eq;
use rift::{FileVersion, compare};

#[test]
fn show_no_chunks_for_identical_content() -> anyhow::Result<()> {
    let text = content(&["alpha", "beta", "gamma"]);
    let diff = compare(
        FileVersion::present("same.txt", &text),
        FileVersion::present("same.txt", &text),
        &options(),
    )?;

    assert!(diff.chunks().is_empty());
    assert_eq!(diff.header().original_file().path(), "same.txt");
    assert!(!diff.is_new_file());
    assert!(!diff.is_deletion());

    Ok(())
}
