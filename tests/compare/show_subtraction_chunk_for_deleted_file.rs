use crate::compare::options;
use pretty_assertions::assert_eq;
use rift::{ChangeRange, FileVersion, Snippet, compare};

#[test]
fn show_subtraction_chunk_for_deleted_file() -> anyhow::Result<()> {
    let diff = compare(
        FileVersion::present("one", "one"),
        FileVersion::absent("two"),
        &options(),
    )?;

    assert!(diff.is_deletion());
    assert_eq!(diff.chunks().len(), 1);

    let chunk = &diff.chunks()[0];
    assert_eq!(chunk.original_range(), &ChangeRange::new(1, 1));
    assert_eq!(chunk.new_range(), &ChangeRange::new(0, 0));

    let [Snippet::Subtraction { lines }] = chunk.snippets() else {
        panic!("expected a single subtraction snippet, got {:?}", chunk.snippets());
    };
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].value(), "one");

    Ok(())
}
