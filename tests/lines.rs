use gitbars::git::lines::{added_lines, count_lines, diff_lines, is_binary, removed_lines};
use gitbars::model::LineStats;
use pretty_assertions::assert_eq;

#[test]
fn counts_lines_with_and_without_trailing_newline() {
    assert_eq!(count_lines(b""), 0);
    assert_eq!(count_lines(b"one\ntwo\n"), 2);
    assert_eq!(count_lines(b"one\ntwo"), 2);
}

#[test]
fn diff_counts_inserted_and_deleted_lines() {
    assert_eq!(diff_lines(b"a\nb\nc\n", b"a\nc\nd\ne\n"), LineStats::new(2, 1));
    assert_eq!(diff_lines(b"same\n", b"same\n"), LineStats::default());
}

#[test]
fn replaced_line_counts_both_ways() {
    assert_eq!(diff_lines(b"fn a() {}\n", b"fn b() {}\n"), LineStats::new(1, 1));
}

#[test]
fn binary_content_counts_as_zero() {
    let blob = b"PNG\x00\x01\x02\nmore\n";
    assert!(is_binary(blob));
    assert_eq!(added_lines(blob), LineStats::default());
    assert_eq!(removed_lines(blob), LineStats::default());
    assert_eq!(diff_lines(b"text\n", blob), LineStats::default());
}

#[test]
fn whole_file_additions_and_deletions() {
    assert_eq!(added_lines(b"x\ny\n"), LineStats::new(2, 0));
    assert_eq!(removed_lines(b"x\ny\nz\n"), LineStats::new(0, 3));
}
