use crate::compare::{content, options};
use pretty_assertions::assert_eq;
use rift::{BomMode, CompareOptions, FileVersion, compare};

fn with_bom() -> String {
    format!("\u{feff}{}", content(&["line one", "line two"]))
}

fn without_bom() -> String {
    content(&["line one", "line two"])
}

#[test]
fn ignoring_boms_makes_the_sides_identical() -> anyhow::Result<()> {
    let diff = compare(
        FileVersion::present("one", &with_bom()),
        FileVersion::present("two", &without_bom()),
        &CompareOptions {
            bom_mode: BomMode::Ignore,
            ..options()
        },
    )?;

    assert!(diff.chunks().is_empty());
    Ok(())
}

#[test]
fn including_boms_shows_them_as_a_real_difference() -> anyhow::Result<()> {
    let diff = compare(
        FileVersion::present("one", &with_bom()),
        FileVersion::present("two", &without_bom()),
        &options(),
    )?;

    assert_eq!(diff.chunks().len(), 1);
    let chunk = &diff.chunks()[0];
    // The BOM-carrying line differs, the other is context.
    assert_eq!(chunk.original_line_count(), 2);
    assert_eq!(chunk.modified_line_count(), 2);

    Ok(())
}
