use crate::compare::{content, options};
use pretty_assertions::assert_eq;
use rift::{ChangeRange, FileVersion, Snippet, compare};

#[test]
fn show_single_chunk_for_nearby_insertions() -> anyhow::Result<()> {
    let original = content(&[
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ]);
    let modified = content(&[
        "zero", "one", "two", "three", "three.5", "four", "five", "six", "seven", "eight",
        "nine", "ten",
    ]);

    let diff = compare(
        FileVersion::present("a.txt", &original),
        FileVersion::present("b.txt", &modified),
        &options(),
    )?;

    assert_eq!(diff.chunks().len(), 1);
    let chunk = &diff.chunks()[0];
    assert_eq!(chunk.original_range(), &ChangeRange::new(1, 6));
    assert_eq!(chunk.new_range(), &ChangeRange::new(1, 8));

    let values = |lines: &[rift::Line]| -> Vec<String> {
        lines.iter().map(|line| line.value().to_string()).collect()
    };
    match chunk.snippets() {
        [
            Snippet::Addition { lines: first },
            Snippet::Context { lines: head },
            Snippet::Addition { lines: second },
            Snippet::Context { lines: tail },
        ] => {
            assert_eq!(values(first), vec!["zero"]);
            assert_eq!(values(head), vec!["one", "two", "three"]);
            assert_eq!(values(second), vec!["three.5"]);
            assert_eq!(values(tail), vec!["four", "five", "six"]);
        }
        other => panic!("unexpected snippet shape: {other:?}"),
    }

    Ok(())
}
