#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use horaire::export::{rendered_width, Orientation, PaperSize};
use horaire::{generate, ExportError, Roster, ScheduleExporter};
use std::io::{Cursor, Read};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn alice_and_bob_on_a_wednesday() {
    let roster = Roster::parse(["Alice", "Bob"]).unwrap();
    let sheet = ScheduleExporter::default()
        .build_sheet(roster.names(), date(2024, 6, 5)) // mercredi
        .unwrap();

    assert_eq!(sheet.name, "Schedule");
    assert_eq!(sheet.week.monday, date(2024, 6, 3));
    assert!(sheet.week.adjusted());
    assert_eq!(sheet.column_count(), 8);
    assert_eq!(sheet.header()[0], "Employee");
    assert_eq!(sheet.header()[1], "2024-06-03\nMonday");
    assert_eq!(sheet.header()[7], "2024-06-09\nSunday");

    assert_eq!(sheet.body().len(), 2);
    assert_eq!(sheet.body()[0][0], "Alice");
    assert_eq!(sheet.body()[1][0], "Bob");
    assert!(sheet
        .body()
        .iter()
        .all(|row| row[1..].iter().all(String::is_empty)));
}

#[test]
fn column_widths_respect_floor_and_longest_line() {
    let roster = Roster::parse([
        "Al",
        "Maximilian Alexander-Featherstonehaugh",
        "Bob",
    ])
    .unwrap();
    let sheet = ScheduleExporter::default()
        .build_sheet(roster.names(), date(2024, 9, 11))
        .unwrap();

    for (col, width) in sheet.column_widths.iter().enumerate() {
        assert!(*width >= 15.0);
        for row in &sheet.rows {
            assert!(*width >= (rendered_width(&row[col]) + 2) as f64);
        }
    }
    // "Maximilian Alexander-Featherstonehaugh" = 38 caractères
    assert_eq!(sheet.column_widths[0], 40.0);
    // "2024-09-11" et "Wednesday" tiennent sous le plancher
    assert!(sheet.column_widths[1..].iter().all(|w| *w == 15.0));
}

#[test]
fn page_setup_is_narrow_landscape_letter() {
    let roster = Roster::parse(["Alice"]).unwrap();
    let sheet = ScheduleExporter::default()
        .build_sheet(roster.names(), date(2024, 6, 3))
        .unwrap();

    let page = sheet.page;
    assert_eq!(page.orientation, Orientation::Landscape);
    assert_eq!(page.paper, PaperSize::Letter);
    assert_eq!(page.paper.xlsx_code(), 1);
    assert_eq!(
        (page.margins.left, page.margins.right, page.margins.top, page.margins.bottom),
        (0.25, 0.25, 0.25, 0.25)
    );
    assert_eq!((page.margins.header, page.margins.footer), (0.1, 0.1));
}

#[test]
fn any_date_gives_seven_consecutive_days_from_monday() {
    let roster = Roster::parse(["Alice"]).unwrap();
    let exporter = ScheduleExporter::default();
    let mut d = date(2023, 12, 20);
    while d < date(2024, 3, 10) {
        let sheet = exporter.build_sheet(roster.names(), d).unwrap();
        let days = sheet.week.days();
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert!(days[0] <= d && d <= days[6]);
        for (i, label) in sheet.header()[1..].iter().enumerate() {
            let (iso, weekday) = label.split_once('\n').unwrap();
            let parsed = NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap();
            assert_eq!(parsed, days[i]);
            assert_eq!(weekday, english_name(parsed.weekday()));
        }
        d = d.succ_opt().unwrap();
    }
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn workbook_carries_sheet_name_and_page_setup() {
    let roster = Roster::parse(["Alice", "Bob"]).unwrap();
    let doc = generate(roster.names(), date(2024, 6, 5)).unwrap();

    let workbook = read_part(&doc.bytes, "xl/workbook.xml");
    assert!(workbook.contains(r#"<sheet name="Schedule""#));

    let sheet = read_part(&doc.bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains(
        r#"<pageMargins left="0.25" right="0.25" top="0.25" bottom="0.25" header="0.1" footer="0.1"/>"#
    ));
    assert!(sheet.contains(r#"orientation="landscape""#));
    assert!(sheet.contains(r#"paperSize="1""#));
    assert!(sheet.contains("<cols>"));
    assert!(sheet.contains(r#"customWidth="1""#));
    // dernière cellule de jour : vide mais formatée
    assert!(sheet.contains(r#"<c r="H3" s="1"/>"#));
}

#[test]
fn every_cell_format_wraps_with_thin_borders() {
    let roster = Roster::parse(["Alice"]).unwrap();
    let doc = generate(roster.names(), date(2024, 6, 3)).unwrap();

    let styles = read_part(&doc.bytes, "xl/styles.xml");
    for side in ["left", "right", "top", "bottom"] {
        assert!(
            styles.contains(&format!(r#"<{side} style="thin">"#)),
            "missing thin {side} border"
        );
    }
    assert!(styles.contains(r#"wrapText="1""#));

    let strings = read_part(&doc.bytes, "xl/sharedStrings.xml");
    assert!(strings.contains("Employee"));
    assert!(strings.contains("2024-06-03"));
    assert!(strings.contains("Monday"));
    assert!(strings.contains("Alice"));
}

#[test]
fn end_of_calendar_is_an_error_not_a_panic() {
    let roster = Roster::parse(["Alice"]).unwrap();
    let err = ScheduleExporter::default()
        .build_sheet(roster.names(), NaiveDate::MAX)
        .unwrap_err();
    assert!(matches!(err, ExportError::DateOutOfRange(_)));
}

fn english_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[test]
fn empty_roster_produces_no_document() {
    let err = generate(Roster::new().names(), date(2024, 6, 5)).unwrap_err();
    assert!(matches!(err, ExportError::EmptyRoster));
    assert_eq!(err.to_string(), "no employees to schedule, add employees first");
}

#[test]
fn generated_document_is_xlsx_bytes() {
    let roster = Roster::parse(["Alice", "Bob"]).unwrap();
    let doc = generate(roster.names(), date(2024, 6, 5)).unwrap();
    assert_eq!(doc.file_name, "schedule.xlsx");
    assert_eq!(
        doc.mime,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(&doc.bytes[0..4], b"PK\x03\x04");
}
