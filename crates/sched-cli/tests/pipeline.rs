//! End-to-end pipeline tests against generated ODS fixtures.

use std::io::Write;

use tempfile::NamedTempFile;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use sched_cli::pipeline::validate_file;
use sched_model::{DayType, Gap};

struct SheetFixture<'a> {
    name: &'a str,
    rows: Vec<Vec<&'a str>>,
}

fn render_content(sheets: &[SheetFixture<'_>]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <office:document-content \
         xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
         xmlns:table=\"urn:oasis:names:tc:opendocument:xmlns:table:1.0\" \
         xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\">\
         <office:body><office:spreadsheet>",
    );
    for sheet in sheets {
        xml.push_str(&format!("<table:table table:name=\"{}\">", sheet.name));
        for row in &sheet.rows {
            xml.push_str("<table:table-row>");
            for cell in row {
                if cell.is_empty() {
                    xml.push_str("<table:table-cell/>");
                } else {
                    xml.push_str(&format!(
                        "<table:table-cell><text:p>{cell}</text:p></table:table-cell>"
                    ));
                }
            }
            xml.push_str("</table:table-row>");
        }
        xml.push_str("</table:table>");
    }
    xml.push_str("</office:spreadsheet></office:body></office:document-content>");
    xml
}

fn write_fixture(sheets: &[SheetFixture<'_>]) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    let mut writer = ZipWriter::new(file.reopen().expect("reopen temp file"));
    writer
        .start_file("content.xml", SimpleFileOptions::default())
        .expect("start entry");
    writer
        .write_all(render_content(sheets).as_bytes())
        .expect("write entry");
    writer.finish().expect("finish zip");
    file
}

#[test]
fn full_schedule_passes_validation() {
    let file = write_fixture(&[
        SheetFixture {
            name: "Weekday Overnight",
            rows: vec![
                vec!["Study", "BODY1", "NEURO1"],
                vec!["Allen MR Body", "x", ""],
                vec!["CPMC CT Neuro", "", "x"],
            ],
        },
        SheetFixture {
            name: "Weekend Overnight",
            rows: vec![
                vec!["Study", "BODY1", "NEURO1"],
                vec!["Allen MR Body", "yes", ""],
                vec!["CPMC CT Neuro", "", "1"],
            ],
        },
    ]);
    let output = validate_file(file.path()).expect("pipeline");
    assert!(output.report.passed());
    assert_eq!(output.report.subject_count, 2);
    assert_eq!(output.report.sheet_count, 2);
    assert_eq!(output.report.marker_count, 4);
    assert!(output.categories.get("MRI Body").expect("category").has_both());
}

#[test]
fn weekday_only_schedule_reports_weekend_gaps() {
    let file = write_fixture(&[SheetFixture {
        name: "Weekday 5-6 PM Neuro",
        rows: vec![vec!["Study", "NEURO1"], vec!["CPMC CT Neuro", "x"]],
    }]);
    let output = validate_file(file.path()).expect("pipeline");
    assert_eq!(
        output.report.gaps,
        vec![Gap::new("CPMC CT Neuro", DayType::Weekend)]
    );
    assert_eq!(
        output.category_report.gaps,
        vec![Gap::new("CT Neuro", DayType::Weekend)]
    );
}

#[test]
fn blank_rows_and_markers_follow_grid_rules() {
    let file = write_fixture(&[SheetFixture {
        name: "Weekday Early",
        rows: vec![
            vec!["Study", "GEN1"],
            vec!["", "x"],
            vec!["NYPLH DX Chest/Abd", "no"],
            vec!["CHONY US Abdomen", "x", "x"],
        ],
    }]);
    let output = validate_file(file.path()).expect("pipeline");
    // The blank-label row is skipped; "no" marks nothing; the extra
    // cell beyond the header lands in a synthetic column.
    assert_eq!(output.report.subject_count, 1);
    let sets = output.matrix.get("CHONY US Abdomen").expect("subject");
    assert_eq!(sets.weekday.len(), 1);
    let sheet = &output.sheets[0];
    assert!(sheet.studies["CHONY US Abdomen"].contains("Column2"));
    assert_eq!(sheet.marker_count, 2);
}

#[test]
fn structural_failure_produces_no_partial_output() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"not a zip at all").expect("write");
    assert!(validate_file(file.path()).is_err());
}
