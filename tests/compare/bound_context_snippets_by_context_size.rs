use crate::compare::{content, options};
use rift::{CompareOptions, FileVersion, Snippet, compare};
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(5)]
fn context_snippets_never_exceed_the_window(#[case] context_size: usize) -> anyhow::Result<()> {
    let original = content(&[
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n",
    ]);
    let modified = content(&[
        "a", "b", "CHANGED", "d", "e", "f", "g", "h", "i", "j", "k", "ALSO", "m", "n",
    ]);

    let diff = compare(
        FileVersion::present("a.txt", &original),
        FileVersion::present("b.txt", &modified),
        &CompareOptions {
            context_size,
            ..options()
        },
    )?;

    // Interior context bridging merged changes may grow past the window;
    // the bound applies at chunk edges.
    for chunk in diff.chunks() {
        let edges = [chunk.snippets().first(), chunk.snippets().last()];
        for snippet in edges.into_iter().flatten() {
            if let Snippet::Context { lines } = snippet {
                assert!(
                    lines.len() <= context_size,
                    "edge context snippet of {} lines exceeds window {}",
                    lines.len(),
                    context_size
                );
            }
        }
    }

    Ok(())
}
