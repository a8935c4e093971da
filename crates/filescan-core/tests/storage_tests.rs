use filescan_core::metadata::{DirRecord, FileRecord};
use filescan_core::storage::{Database, SqliteSink};
use filescan_core::{RecordSink, ROOT_PARENT_ID};

fn make_dir(id: i64, name: &str, full_path: &str, parent_id: i64) -> DirRecord {
    DirRecord {
        id,
        name: name.to_string(),
        full_path: full_path.to_string(),
        parent_id,
    }
}

fn make_file(id: i64, name: &str, full_path: &str, parent_id: i64, size: i64) -> FileRecord {
    FileRecord {
        id,
        name: name.to_string(),
        full_path: full_path.to_string(),
        parent_id,
        size,
        mode: 0o100644,
        uid: Some(1000),
        gid: Some(1000),
        mtime: 1700000000,
    }
}

fn open_db() -> Database {
    let db = Database::open_in_memory().unwrap();
    db.init_schema().unwrap();
    db
}

#[test]
fn init_schema_is_idempotent() {
    let db = open_db();
    db.init_schema().unwrap();

    let tables: i64 = db
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
             AND name IN ('dirs', 'files')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 2);
}

#[test]
fn insert_replaces_on_conflicting_id() {
    let db = open_db();
    let mut sink = SqliteSink::new(db.connection());

    sink.insert_file(&make_file(1, "a.txt", "/r/a.txt", ROOT_PARENT_ID, 10))
        .unwrap();
    sink.insert_file(&make_file(1, "a.txt", "/r/a.txt", ROOT_PARENT_ID, 25))
        .unwrap();

    let (count, size): (i64, i64) = db
        .connection()
        .query_row("SELECT COUNT(*), MAX(filesize) FROM files", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(size, 25);
}

#[test]
fn file_record_columns_round_trip() {
    let db = open_db();
    let mut sink = SqliteSink::new(db.connection());

    let record = FileRecord {
        id: 9,
        name: "data.bin".to_string(),
        full_path: "/r/sub/data.bin".to_string(),
        parent_id: 4,
        size: 4096,
        mode: 0o100600,
        uid: Some(42),
        gid: Some(99),
        mtime: 1712345678,
    };
    sink.insert_file(&record).unwrap();

    let row: (String, String, i64, i64, u32, Option<u32>, Option<u32>, i64) = db
        .connection()
        .query_row(
            "SELECT filename, fullfilename, parentdirid, filesize, filemode, \
                    fileuid, filegid, filemtime FROM files WHERE fileid = 9",
            [],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                ))
            },
        )
        .unwrap();
    assert_eq!(row.0, "data.bin");
    assert_eq!(row.1, "/r/sub/data.bin");
    assert_eq!(row.2, 4);
    assert_eq!(row.3, 4096);
    assert_eq!(row.4, 0o100600);
    assert_eq!(row.5, Some(42));
    assert_eq!(row.6, Some(99));
    assert_eq!(row.7, 1712345678);
}

#[test]
fn null_ownership_round_trips() {
    let db = open_db();
    let mut sink = SqliteSink::new(db.connection());

    let mut record = make_file(1, "n.txt", "/r/n.txt", ROOT_PARENT_ID, 1);
    record.uid = None;
    record.gid = None;
    sink.insert_file(&record).unwrap();

    let rows = db.uid_report(10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].owner, None);
    assert_eq!(rows[0].file_count, 1);
}

#[test]
fn dir_usage_reports_group_by_parent_including_root() {
    let db = open_db();
    let mut sink = SqliteSink::new(db.connection());

    // The §8-style fixture: a/ with x.txt (10 bytes), b.txt (5 bytes) at root.
    sink.insert_dir(&make_dir(1, "a", "/r/a", ROOT_PARENT_ID))
        .unwrap();
    sink.insert_file(&make_file(1, "x.txt", "/r/a/x.txt", 1, 10))
        .unwrap();
    sink.insert_file(&make_file(2, "b.txt", "/r/b.txt", ROOT_PARENT_ID, 5))
        .unwrap();

    let rows = db.file_size_report(10).unwrap();
    assert_eq!(rows.len(), 2);

    let counts: Vec<i64> = rows.iter().map(|r| r.file_count).collect();
    assert_eq!(counts, [1, 1]);

    // Ordered by total size descending: a's 10 bytes, then the root's 5.
    assert_eq!(rows[0].dir, "/r/a");
    assert_eq!(rows[0].total_size, 10);
    assert_eq!(rows[1].total_size, 5);

    let rows = db.file_count_report(10).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.file_count == 1));
}

#[test]
fn file_count_report_orders_by_count() {
    let db = open_db();
    let mut sink = SqliteSink::new(db.connection());

    sink.insert_dir(&make_dir(1, "busy", "/r/busy", ROOT_PARENT_ID))
        .unwrap();
    sink.insert_dir(&make_dir(2, "quiet", "/r/quiet", ROOT_PARENT_ID))
        .unwrap();
    for i in 0..3 {
        sink.insert_file(&make_file(i + 1, "f", "/r/busy/f", 1, 1)).unwrap();
    }
    sink.insert_file(&make_file(10, "g", "/r/quiet/g", 2, 100))
        .unwrap();

    let rows = db.file_count_report(10).unwrap();
    assert_eq!(rows[0].dir, "/r/busy");
    assert_eq!(rows[0].file_count, 3);
    assert_eq!(rows[1].dir, "/r/quiet");
}

#[test]
fn owner_reports_aggregate_by_uid_and_gid() {
    let db = open_db();
    let mut sink = SqliteSink::new(db.connection());

    let mut f1 = make_file(1, "a", "/r/a", ROOT_PARENT_ID, 100);
    f1.uid = Some(500);
    f1.gid = Some(20);
    let mut f2 = make_file(2, "b", "/r/b", ROOT_PARENT_ID, 50);
    f2.uid = Some(500);
    f2.gid = Some(21);
    let mut f3 = make_file(3, "c", "/r/c", ROOT_PARENT_ID, 7);
    f3.uid = Some(501);
    f3.gid = Some(20);
    for f in [&f1, &f2, &f3] {
        sink.insert_file(f).unwrap();
    }

    let uid_rows = db.uid_report(10).unwrap();
    assert_eq!(uid_rows.len(), 2);
    assert_eq!(uid_rows[0].owner, Some(500));
    assert_eq!(uid_rows[0].file_count, 2);
    assert_eq!(uid_rows[0].total_size, 150);

    let gid_rows = db.gid_report(10).unwrap();
    assert_eq!(gid_rows.len(), 2);
    assert_eq!(gid_rows[0].owner, Some(20));
    assert_eq!(gid_rows[0].file_count, 2);
    assert_eq!(gid_rows[0].total_size, 107);
}

#[test]
fn aging_report_uses_strict_window_bounds() {
    let db = open_db();
    let mut sink = SqliteSink::new(db.connection());

    let mut inside = make_file(1, "inside", "/r/inside", ROOT_PARENT_ID, 10);
    inside.mtime = 5000;
    let mut too_old = make_file(2, "old", "/r/old", ROOT_PARENT_ID, 20);
    too_old.mtime = 999;
    let mut too_new = make_file(3, "new", "/r/new", ROOT_PARENT_ID, 40);
    too_new.mtime = 10001;
    let mut on_edge = make_file(4, "edge", "/r/edge", ROOT_PARENT_ID, 80);
    on_edge.mtime = 1000;
    for f in [&inside, &too_old, &too_new, &on_edge] {
        sink.insert_file(f).unwrap();
    }

    let summary = db.aging_report(1000, 10000).unwrap();
    assert_eq!(summary.file_count, 1);
    assert_eq!(summary.total_size, 10);
}
