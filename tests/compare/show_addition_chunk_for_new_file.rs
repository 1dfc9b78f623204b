use crate::compare::options;
use pretty_assertions::assert_eq;
use rift::{ChangeRange, FileVersion, Snippet, compare};

#[test]
fn show_addition_chunk_for_new_file() -> anyhow::Result<()> {
    let diff = compare(
        FileVersion::absent("one"),
        FileVersion::present("two", "one"),
        &options(),
    )?;

    assert!(diff.is_new_file());
    assert_eq!(diff.chunks().len(), 1);

    let chunk = &diff.chunks()[0];
    assert_eq!(chunk.original_range(), &ChangeRange::new(0, 0));
    assert_eq!(chunk.new_range(), &ChangeRange::new(1, 1));

    let [Snippet::Addition { lines }] = chunk.snippets() else {
        panic!("expected a single addition snippet, got {:?}", chunk.snippets());
    };
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].value(), "one");

    Ok(())
}
