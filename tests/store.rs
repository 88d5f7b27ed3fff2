use chrono::NaiveDateTime;
use gitbars::error::GitbarsError;
use gitbars::model::{CommitRecord, LineStats};
use gitbars::store::{read_commits, read_commits_from, write_commits, write_commits_to};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn sample() -> Vec<CommitRecord> {
    vec![
        CommitRecord::new(
            "gitbars".into(),
            "c6370125df4e999f365eda516831465eede59396".into(),
            ts("2021-11-04 22:13:12"),
            "danielmoessner".into(),
        )
        .with_line_stats(LineStats::new(120, 7)),
        CommitRecord::new(
            "other, repo".into(),
            "0f1e2d".into(),
            ts("2022-01-01 00:00:00"),
            "Jane \"JD\" Doe".into(),
        ),
    ]
}

#[test]
fn round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commits.csv");

    write_commits(&path, &sample()).unwrap();
    let loaded = read_commits(&path).unwrap();

    assert_eq!(loaded, sample());
}

#[test]
fn writes_header_and_sentinels() {
    let mut buf = Vec::new();
    write_commits_to(&mut buf, &sample()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Repository,SHA,Timestamp,Author,Added,Removed");
    assert_eq!(
        lines[1],
        "gitbars,c6370125df4e999f365eda516831465eede59396,2021-11-04 22:13:12,danielmoessner,120,7"
    );
    assert!(lines[2].ends_with(",-1,-1"));
    assert!(lines[2].starts_with("\"other, repo\""));
}

#[test]
fn empty_list_writes_only_header() {
    let mut buf = Vec::new();
    write_commits_to(&mut buf, &[]).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.trim_end(), "Repository,SHA,Timestamp,Author,Added,Removed");

    let loaded = read_commits_from(text.as_bytes()).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn reads_unknown_stats_as_none() {
    let data = "Repository,SHA,Timestamp,Author,Added,Removed\nr,abc,2024-01-02 03:04:05,A,-1,-1\n";
    let commits = read_commits_from(data.as_bytes()).unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].line_stats, None);
    assert_eq!(commits[0].change(), 0);
}

#[test]
fn rejects_wrong_header() {
    let data = "Repo,SHA,Timestamp,Author,Added,Removed\nr,abc,2024-01-02 03:04:05,A,1,1\n";
    assert!(matches!(read_commits_from(data.as_bytes()), Err(GitbarsError::Parse(_))));
}

#[test]
fn rejects_missing_header() {
    assert!(read_commits_from("".as_bytes()).is_err());
}

#[test]
fn rejects_wrong_column_count() {
    let data = "Repository,SHA,Timestamp,Author,Added,Removed\nr,abc,2024-01-02 03:04:05,A,1\n";
    assert!(matches!(read_commits_from(data.as_bytes()), Err(GitbarsError::Csv(_))));
}

#[test]
fn rejects_bad_timestamp() {
    let data = "Repository,SHA,Timestamp,Author,Added,Removed\nr,abc,2024-01-02T03:04:05,A,1,1\n";
    assert!(matches!(read_commits_from(data.as_bytes()), Err(GitbarsError::InvalidDate(_))));
}

#[test]
fn rejects_bad_integer() {
    let data = "Repository,SHA,Timestamp,Author,Added,Removed\nr,abc,2024-01-02 03:04:05,A,many,1\n";
    assert!(matches!(read_commits_from(data.as_bytes()), Err(GitbarsError::Csv(_))));
}

#[test]
fn rejects_mixed_sentinel() {
    let data = "Repository,SHA,Timestamp,Author,Added,Removed\nr,abc,2024-01-02 03:04:05,A,-1,4\n";
    assert!(matches!(read_commits_from(data.as_bytes()), Err(GitbarsError::Parse(_))));
}

#[test]
fn one_bad_row_aborts_the_load() {
    let data = "Repository,SHA,Timestamp,Author,Added,Removed\n\
                r,a,2024-01-02 03:04:05,A,1,1\n\
                r,b,2024-01-02 03:04:05,A,-5,-5\n\
                r,c,2024-01-02 03:04:05,A,1,1\n";
    assert!(read_commits_from(data.as_bytes()).is_err());
}
