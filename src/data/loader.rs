use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{OutlierError, Result};

use super::model::{CellValue, ColumnKind, DataColumn, Dataset};

/// Cell contents read as "no value", matching common dataframe conventions.
const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>",
    "#N/A", "#NA", "#N/A N/A", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – comma-separated, first record is the header
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "txt" => {
            let file = std::fs::File::open(path)
                .map_err(|e| OutlierError::parse(format!("opening {}: {e}", path.display())))?;
            read_csv(file)
        }
        other => Err(OutlierError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse CSV from any byte stream (an uploaded file, a buffer, ...).
///
/// Rows shorter than the header are padded with missing cells; longer rows
/// are rejected.
pub fn read_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers = unique_headers(reader.headers()?.iter());
    if headers.is_empty() {
        return Err(OutlierError::parse("file contains no columns"));
    }

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(OutlierError::parse(format!(
                "row {row_no}: expected {} fields, saw {}",
                headers.len(),
                record.len()
            )));
        }
        for (col_idx, cells) in raw.iter_mut().enumerate() {
            cells.push(record.get(col_idx).unwrap_or("").trim().to_string());
        }
    }

    let row_count = raw.first().map_or(0, Vec::len);
    let columns: Vec<DataColumn> = headers
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| {
            let kind = infer_kind(&cells);
            let cells = cells.iter().map(|c| typed_cell(c, kind)).collect();
            DataColumn { name, kind, cells }
        })
        .collect();

    log::debug!(
        "Parsed {row_count} rows; column kinds: {:?}",
        columns
            .iter()
            .map(|c| format!("{}:{}", c.name, c.kind))
            .collect::<Vec<_>>()
    );

    Ok(Dataset::new(columns, row_count))
}

// ---------------------------------------------------------------------------
// Header handling
// ---------------------------------------------------------------------------

/// Blank names become `Unnamed: i`; repeats become `name.1`, `name.2`, ...
fn unique_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for (idx, name) in raw.enumerate() {
        let base = match name.trim() {
            "" => format!("Unnamed: {idx}"),
            trimmed => trimmed.to_string(),
        };
        let mut candidate = base.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{n}");
            n += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

// ---------------------------------------------------------------------------
// Type inference
// ---------------------------------------------------------------------------

fn is_missing(s: &str) -> bool {
    MISSING_TOKENS.contains(&s)
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Pick the narrowest kind every non-missing cell fits.
/// A column with nothing but missing cells is a float column; a column with
/// no rows at all is text.
fn infer_kind(cells: &[String]) -> ColumnKind {
    if cells.is_empty() {
        return ColumnKind::Text;
    }
    let mut present = cells.iter().map(String::as_str).filter(|c| !is_missing(c)).peekable();
    if present.peek().is_none() {
        return ColumnKind::Float;
    }
    let present: Vec<&str> = present.collect();

    if present.iter().all(|c| c.parse::<i64>().is_ok()) {
        ColumnKind::Integer
    } else if present.iter().all(|c| c.parse::<f64>().is_ok()) {
        ColumnKind::Float
    } else if present.iter().all(|c| parse_bool(c).is_some()) {
        ColumnKind::Boolean
    } else {
        ColumnKind::Text
    }
}

fn typed_cell(raw: &str, kind: ColumnKind) -> CellValue {
    if is_missing(raw) {
        return CellValue::Missing;
    }
    match kind {
        ColumnKind::Integer => raw.parse().map_or(CellValue::Missing, CellValue::Integer),
        ColumnKind::Float => raw.parse().map_or(CellValue::Missing, CellValue::Float),
        ColumnKind::Boolean => parse_bool(raw).map_or(CellValue::Missing, CellValue::Bool),
        ColumnKind::Text => CellValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(text: &str) -> Dataset {
        read_csv(text.as_bytes()).expect("csv should parse")
    }

    fn kind_of(ds: &Dataset, name: &str) -> ColumnKind {
        ds.columns.iter().find(|c| c.name == name).unwrap().kind
    }

    #[test]
    fn infers_column_kinds() {
        let ds = parse("id,temp,name,ok\n1,20.5,a,true\n2,21,b,False\n3,,c,TRUE\n");
        assert_eq!(ds.len(), 3);
        assert_eq!(kind_of(&ds, "id"), ColumnKind::Integer);
        assert_eq!(kind_of(&ds, "temp"), ColumnKind::Float);
        assert_eq!(kind_of(&ds, "name"), ColumnKind::Text);
        assert_eq!(kind_of(&ds, "ok"), ColumnKind::Boolean);
        assert_eq!(ds.numeric_columns(), vec!["id", "temp"]);
    }

    #[test]
    fn missing_tokens_become_missing_cells() {
        let ds = parse("v\n1.5\nNA\nnull\n \n2.5\n");
        let col = ds.column("v").unwrap();
        assert_eq!(col.values(), &[Some(1.5), None, None, None, Some(2.5)]);
    }

    #[test]
    fn spreadsheet_error_tokens_keep_column_numeric() {
        for token in ["#NA", "#N/A N/A", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN", "-nan"] {
            let ds = parse(&format!("v\n1\n{token}\n3\n"));
            assert_eq!(ds.numeric_columns(), vec!["v"], "token {token}");
            let col = ds.column("v").unwrap();
            assert_eq!(col.values(), &[Some(1.0), None, Some(3.0)], "token {token}");
        }
    }

    #[test]
    fn all_missing_column_is_numeric_but_empty() {
        let ds = parse("a,b\n1,\n2,NaN\n");
        assert_eq!(kind_of(&ds, "b"), ColumnKind::Float);
        let col = ds.column("b").unwrap();
        assert_eq!(col.observations().count(), 0);
    }

    #[test]
    fn mixed_column_falls_back_to_text() {
        let ds = parse("v\n1\ntwo\n3\n");
        assert_eq!(kind_of(&ds, "v"), ColumnKind::Text);
        assert_eq!(ds.columns[0].cells[0], CellValue::Text("1".into()));
        assert!(ds.numeric_columns().is_empty());
    }

    #[test]
    fn duplicate_and_blank_headers_are_renamed() {
        let ds = parse("x,x,,x\n1,2,3,4\n");
        let names: Vec<&str> = ds.column_names().collect();
        assert_eq!(names, vec!["x", "x.1", "Unnamed: 2", "x.2"]);
    }

    #[test]
    fn short_rows_are_padded() {
        let ds = parse("a,b,c\n1,2,3\n4\n");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.row(1), vec![&CellValue::Integer(4), &CellValue::Missing, &CellValue::Missing]);
    }

    #[test]
    fn long_rows_are_a_parse_error() {
        let err = read_csv("a,b\n1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, OutlierError::Parse { .. }));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let err = read_csv("".as_bytes()).unwrap_err();
        assert!(matches!(err, OutlierError::Parse { .. }));
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = read_csv(&b"name\n\xff\xfe\n"[..]).unwrap_err();
        assert!(matches!(err, OutlierError::Parse { .. }));
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let ds = parse("a,b\n");
        assert!(ds.is_empty());
        assert_eq!(kind_of(&ds, "a"), ColumnKind::Text);
        assert!(ds.numeric_columns().is_empty());
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("data.CSV");
        let mut f = std::fs::File::create(&csv_path).unwrap();
        writeln!(f, "v\n1\n2").unwrap();
        drop(f);
        assert_eq!(load_file(&csv_path).unwrap().len(), 2);

        let xlsx_path = dir.path().join("data.xlsx");
        std::fs::write(&xlsx_path, b"not a csv").unwrap();
        let err = load_file(&xlsx_path).unwrap_err();
        assert!(matches!(err, OutlierError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn missing_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, OutlierError::Parse { .. }));
    }
}
