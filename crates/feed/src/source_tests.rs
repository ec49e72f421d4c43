use super::*;
use std::fs;

use tempfile::TempDir;

fn table(contents: &[u8]) -> (TempDir, SourceTable) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("source.csv");
    fs::write(&path, contents).expect("write source");
    let table = SourceTable::open(&path).expect("open source");
    (dir, table)
}

/// Reads rows until the end, collecting the starting line of each.
fn lines(table: &mut SourceTable) -> Result<Vec<u64>, EmitError> {
    let mut row = StringRecord::new();
    let mut lines = Vec::new();
    while let Some(line) = table.next_row(&mut row)? {
        lines.push(line);
    }
    Ok(lines)
}

fn blank_row_line(err: EmitError) -> u64 {
    match err {
        EmitError::Format {
            line,
            source: FormatError::Arity { found: 0 },
        } => line,
        other => panic!("expected empty row error, got {other:?}"),
    }
}

#[test]
fn rows_report_their_starting_line() {
    let cases: &[(&[u8], Vec<u64>)] = &[
        (b"h\na,b\nc,d\n", vec![2, 3]),
        (b"h\r\na,b\r\nc,d\r\n", vec![2, 3]),
        (b"h\na,b\nc,d", vec![2, 3]),
        (b"h\r\na,b\r\nc,d", vec![2, 3]),
        (b"h\na,\"x\ny\"\nc,d\n", vec![2, 4]),
        (b"h\n", vec![]),
        (b"h", vec![]),
    ];

    for (contents, expected) in cases {
        let (_dir, mut table) = table(contents);
        table.read_header().expect("header");
        let got = lines(&mut table).expect("rows");
        assert_eq!(
            &got,
            expected,
            "source {:?}",
            String::from_utf8_lossy(contents)
        );
    }
}

#[test]
fn empty_line_is_a_row_without_fields() {
    let cases: &[(&[u8], u64)] = &[
        (b"h\na,b\n\nc,d\n", 3),
        (b"h\r\na,b\r\n\r\nc,d\r\n", 3),
        (b"h\n\na,b\n", 2),
        (b"h\na,b\n\n\n\nc,d\n", 3),
        (b"h\na,b\n\n", 3),
        (b"h\r\na,b\r\n\r\n", 3),
    ];

    for (contents, expected) in cases {
        let (_dir, mut table) = table(contents);
        table.read_header().expect("header");
        let err = lines(&mut table).unwrap_err();
        assert_eq!(
            blank_row_line(err),
            *expected,
            "source {:?}",
            String::from_utf8_lossy(contents)
        );
    }
}

#[test]
fn rows_before_an_empty_line_are_returned_first() {
    let (_dir, mut table) = table(b"h\na,b\n\nc,d\n");
    table.read_header().expect("header");
    let mut row = StringRecord::new();

    assert_eq!(table.next_row(&mut row).expect("first row"), Some(2));
    assert_eq!(row.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(table.next_row(&mut row).is_err());
}

#[test]
fn whitespace_only_line_is_a_one_field_row() {
    let (_dir, mut table) = table(b"h\n \nc,d\n");
    table.read_header().expect("header");
    let mut row = StringRecord::new();

    assert_eq!(table.next_row(&mut row).expect("row"), Some(2));
    assert_eq!(row.len(), 1);
}

#[test]
fn header_is_required() {
    let (_dir, mut table) = table(b"");
    assert!(matches!(
        table.read_header(),
        Err(EmitError::EmptySource { .. })
    ));
}

#[test]
fn invalid_utf8_makes_source_unavailable() {
    let (_dir, mut table) = table(b"h\nK\xffng,x\n");
    table.read_header().expect("header");
    let mut row = StringRecord::new();

    assert!(matches!(
        table.next_row(&mut row),
        Err(EmitError::SourceUnavailable { .. })
    ));
}
