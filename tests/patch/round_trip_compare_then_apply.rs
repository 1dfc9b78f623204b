use crate::patch::options;
use pretty_assertions::assert_eq;
use rift::{FileVersion, Patch, compare};
use rstest::rstest;

#[rstest]
#[case::insertion("one\r\ntwo\r\nthree", "one\r\nnew\r\ntwo\r\nthree")]
#[case::removal("one\r\ntwo\r\nthree", "one\r\nthree")]
#[case::replacement("the quick fox", "the slow fox")]
#[case::empty_to_content("", "first\r\nsecond")]
#[case::content_to_empty("first\r\nsecond", "")]
#[case::trailing_separator("one\r\n", "one\r\ntwo\r\n")]
#[case::no_trailing_separator("one", "one\r\ntwo")]
#[case::repeated_lines("dup\r\ndup\r\ndup", "dup\r\ndup")]
fn applying_a_generated_diff_reconstructs_the_modified_side(
    #[case] original: &str,
    #[case] modified: &str,
) -> anyhow::Result<()> {
    let diff = compare(
        FileVersion::present("a.txt", original),
        FileVersion::present("b.txt", modified),
        &options(),
    )?;

    assert_eq!(Patch::new(&diff).apply_to(original), modified);
    Ok(())
}

#[test]
fn multi_chunk_diffs_apply_in_order() -> anyhow::Result<()> {
    let original: Vec<String> = (1..=40).map(|n| format!("line {n}")).collect();
    let mut modified = original.clone();
    modified[2] = "changed near the top".to_string();
    modified.remove(20);
    modified.insert(35, "inserted near the bottom".to_string());

    let original = original.join("\r\n");
    let modified = modified.join("\r\n");

    let diff = compare(
        FileVersion::present("a.txt", &original),
        FileVersion::present("b.txt", &modified),
        &options(),
    )?;

    assert!(diff.chunks().len() > 1, "expected separate chunks");
    assert_eq!(Patch::new(&diff).apply_to(&original), modified);
    Ok(())
}
