//! Low-level walk over the OpenDocument markup.
//!
//! The content entry uses three namespaces (office body, table elements,
//! text paragraphs). Matching on element local names keeps the walk
//! independent of the prefixes a producer chose; none of the local names
//! on the body -> spreadsheet -> table path collide across namespaces.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use sched_model::{Result, ScheduleError};

/// One sheet as it appears in the markup: a name attribute plus raw
/// rows of flattened cell text, before any grid semantics are applied.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// Parse the document entry into raw tables.
///
/// Fails with [`ScheduleError::Format`] when the markup is not well
/// formed or the body/spreadsheet structure is missing; no partial
/// result is returned in that case.
pub fn parse_tables(content: &[u8]) -> Result<Vec<RawTable>> {
    // Text is kept untrimmed so whitespace inside a paragraph survives
    // span boundaries; only the flattened cell string is trimmed.
    let mut reader = Reader::from_reader(content);

    let mut tables = Vec::new();
    let mut saw_body = false;
    let mut saw_spreadsheet = false;

    let mut table: Option<RawTable> = None;
    let mut row: Option<Vec<String>> = None;
    // Cell state: paragraphs collected so far, plus the paragraph being
    // accumulated while inside a text:p element.
    let mut in_cell = false;
    let mut paragraphs: Vec<String> = Vec::new();
    let mut paragraph: Option<String> = None;

    let mut buf = Vec::new();
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|err| ScheduleError::Format(err.to_string()))?;
        match event {
            Event::Start(ref start) => match start.local_name().as_ref() {
                b"body" => saw_body = true,
                b"spreadsheet" => saw_spreadsheet = true,
                b"table" => {
                    table = Some(RawTable {
                        name: table_name(start)?,
                        rows: Vec::new(),
                    });
                }
                b"table-row" => row = Some(Vec::new()),
                b"table-cell" => {
                    in_cell = true;
                    paragraphs.clear();
                }
                b"p" if in_cell => paragraph = Some(String::new()),
                _ => {}
            },
            Event::Empty(ref start) => match start.local_name().as_ref() {
                b"body" => saw_body = true,
                b"spreadsheet" => saw_spreadsheet = true,
                b"table" => {
                    tables.push(RawTable {
                        name: table_name(start)?,
                        rows: Vec::new(),
                    });
                }
                b"table-row" => {
                    if let Some(table) = table.as_mut() {
                        table.rows.push(Vec::new());
                    }
                }
                b"table-cell" => {
                    if let Some(row) = row.as_mut() {
                        row.push(String::new());
                    }
                }
                b"p" if in_cell => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(ref text) => {
                if let Some(paragraph) = paragraph.as_mut() {
                    let value = text
                        .decode()
                        .map_err(|err| ScheduleError::Format(err.to_string()))?;
                    paragraph.push_str(&value);
                }
            }
            // Entity references arrive as their own events; resolve the
            // predefined ones so cell text like "Chest &amp; Abd" stays whole.
            Event::GeneralRef(ref entity) => {
                if let Some(paragraph) = paragraph.as_mut() {
                    let resolved = entity
                        .resolve_char_ref()
                        .map_err(|err| ScheduleError::Format(err.to_string()))?;
                    if let Some(ch) = resolved {
                        paragraph.push(ch);
                    } else {
                        let name: &[u8] = entity.as_ref();
                        match name {
                            b"amp" => paragraph.push('&'),
                            b"lt" => paragraph.push('<'),
                            b"gt" => paragraph.push('>'),
                            b"apos" => paragraph.push('\''),
                            b"quot" => paragraph.push('"'),
                            _ => {}
                        }
                    }
                }
            }
            Event::End(ref end) => match end.local_name().as_ref() {
                b"p" => {
                    if let Some(paragraph) = paragraph.take() {
                        paragraphs.push(paragraph.trim().to_string());
                    }
                }
                b"table-cell" => {
                    if let Some(row) = row.as_mut() {
                        row.push(flatten_paragraphs(&paragraphs));
                    }
                    in_cell = false;
                }
                b"table-row" => {
                    if let (Some(table), Some(row)) = (table.as_mut(), row.take()) {
                        table.rows.push(row);
                    }
                }
                b"table" => {
                    if let Some(table) = table.take() {
                        tables.push(table);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_body {
        return Err(ScheduleError::Format("document has no body element".to_string()));
    }
    if !saw_spreadsheet {
        return Err(ScheduleError::Format(
            "document body has no spreadsheet element".to_string(),
        ));
    }
    Ok(tables)
}

/// Flatten a cell's paragraphs into one string: paragraphs joined by a
/// single space, then trimmed. Downstream matching is substring
/// sensitive, so this convention must not change.
fn flatten_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join(" ").trim().to_string()
}

fn table_name(start: &BytesStart<'_>) -> Result<String> {
    for attr in start.attributes() {
        let attr = attr.map_err(|err| ScheduleError::Format(err.to_string()))?;
        if attr.key.local_name().as_ref() == b"name" {
            let value = attr
                .unescape_value()
                .map_err(|err| ScheduleError::Format(err.to_string()))?;
            return Ok(value.into_owned());
        }
    }
    Ok("Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(tables: &str) -> Vec<u8> {
        format!(
            "<office:document-content \
             xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
             xmlns:table=\"urn:oasis:names:tc:opendocument:xmlns:table:1.0\" \
             xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\">\
             <office:body><office:spreadsheet>{tables}</office:spreadsheet>\
             </office:body></office:document-content>"
        )
        .into_bytes()
    }

    #[test]
    fn cell_paragraphs_join_with_single_space() {
        let content = wrap(
            "<table:table table:name=\"S\"><table:table-row>\
             <table:table-cell><text:p>CPMC CT</text:p><text:p>Neuro</text:p></table:table-cell>\
             </table:table-row></table:table>",
        );
        let tables = parse_tables(&content).expect("parse");
        assert_eq!(tables[0].rows[0][0], "CPMC CT Neuro");
    }

    #[test]
    fn entity_references_keep_surrounding_whitespace() {
        let content = wrap(
            "<table:table table:name=\"S\"><table:table-row>\
             <table:table-cell><text:p>Chest &amp; Abd</text:p></table:table-cell>\
             <table:table-cell><text:p>&lt;1&gt; &#x78;</text:p></table:table-cell>\
             </table:table-row></table:table>",
        );
        let tables = parse_tables(&content).expect("parse");
        assert_eq!(tables[0].rows[0][0], "Chest & Abd");
        assert_eq!(tables[0].rows[0][1], "<1> x");
    }

    #[test]
    fn span_boundaries_do_not_swallow_spaces() {
        let content = wrap(
            "<table:table table:name=\"S\"><table:table-row>\
             <table:table-cell><text:p>CPMC <text:span>CT</text:span> Neuro</text:p>\
             </table:table-cell></table:table-row></table:table>",
        );
        let tables = parse_tables(&content).expect("parse");
        assert_eq!(tables[0].rows[0][0], "CPMC CT Neuro");
    }

    #[test]
    fn paragraphless_cell_is_empty_string() {
        let content = wrap(
            "<table:table table:name=\"S\"><table:table-row>\
             <table:table-cell/><table:table-cell><text:p>x</text:p></table:table-cell>\
             </table:table-row></table:table>",
        );
        let tables = parse_tables(&content).expect("parse");
        assert_eq!(tables[0].rows[0], vec!["".to_string(), "x".to_string()]);
    }

    #[test]
    fn missing_name_attribute_falls_back_to_unknown() {
        let content = wrap("<table:table><table:table-row><table:table-cell/></table:table-row></table:table>");
        let tables = parse_tables(&content).expect("parse");
        assert_eq!(tables[0].name, "Unknown");
    }

    #[test]
    fn missing_spreadsheet_is_a_format_error() {
        let content = b"<office:document-content \
            xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\">\
            <office:body/></office:document-content>";
        let err = parse_tables(content).expect_err("no spreadsheet");
        assert!(matches!(err, ScheduleError::Format(_)));
    }

    #[test]
    fn malformed_markup_is_a_format_error() {
        let err = parse_tables(b"<office:body><unclosed").expect_err("bad xml");
        assert!(matches!(err, ScheduleError::Format(_)));
    }
}
