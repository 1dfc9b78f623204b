use pretty_assertions::assert_eq;
use rift::{ChangeRange, Chunk, ChunkRange, Diff, FileTag, Header, Line, Patch, Snippet};

#[test]
fn apply_addition_to_empty_file() {
    // @@ -0,0 +1,1 @@
    // +A LINE!
    let diff = Diff::new(
        Header::new(
            "generated",
            FileTag::new('a', "empty"),
            FileTag::new('b', "one-liner"),
            false,
            false,
        ),
        vec![Chunk::new(
            ChunkRange::new(ChangeRange::new(0, 0), ChangeRange::new(1, 1)),
            vec![Snippet::Addition {
                lines: vec![Line::added("A LINE!")],
            }],
        )],
    );

    let output = Patch::new(&diff).apply_to("");

    assert_eq!(output, "A LINE!\r\n");
}
