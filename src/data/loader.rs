use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

use super::model::{Column, ColumnData, ListingTable};

/// Header a dataframe writer gives its unnamed row index.
pub const INDEX_COLUMN: &str = "Unnamed: 0";

/// Column that is coerced to numeric after load.
pub const YEAR_COLUMN: &str = "year";

/// Tokens treated as missing, on top of the empty cell. Matched exactly,
/// so surrounding whitespace keeps a cell as text.
const MISSING_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A", "#N/A N/A",
    "<NA>", "#NA", "-1.#IND", "1.#IND", "-1.#QNAN", "1.#QNAN",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the listings CSV at `path`.
///
/// Layout: comma-delimited, header row, optionally carrying an unnamed
/// index column which is dropped. `year` is coerced to numeric with unparseable
/// cells becoming missing.
pub fn load_listings(path: &Path) -> Result<ListingTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut table = read_listings(file, path)?;

    if drop_index_column(&mut table) {
        log::warn!("Dropped redundant index column from {}", path.display());
    }

    if table.coerce_numeric(YEAR_COLUMN).is_err() {
        log::warn!(
            "{} has no '{YEAR_COLUMN}' column; the per-year analysis will be unavailable",
            path.display()
        );
    }

    if table.is_empty() {
        log::warn!("{} contains a header but no listings", path.display());
    }
    log::info!("Loaded {} from {}", table, path.display());
    Ok(table)
}

/// Parse CSV text into a typed table. `path` is only used for error reports.
fn read_listings<R: Read>(input: R, path: &Path) -> Result<ListingTable, LoadError> {
    let malformed = |source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .map_err(malformed)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for result in reader.records() {
        let record = result.map_err(malformed)?;
        for (col_idx, value) in record.iter().enumerate() {
            raw[col_idx].push(missing_or(value));
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| Column {
            name,
            data: ColumnData::infer(cells),
        })
        .collect();

    Ok(ListingTable::from_columns(columns))
}

/// Remove the `Unnamed: 0` index column wherever it sits, and an unnamed
/// first column.
fn drop_index_column(table: &mut ListingTable) -> bool {
    let mut dropped = table.drop_column(INDEX_COLUMN);
    if table.column_names().next() == Some("") {
        dropped |= table.drop_column("");
    }
    dropped
}

fn missing_or(s: &str) -> Option<String> {
    if s.is_empty() || MISSING_TOKENS.contains(&s) {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::model::ColumnData;
    use crate::error::SchemaError;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    const WITH_INDEX: &str = "\
Unnamed: 0,price,brand,year,color,state
0,6300,toyota,2008,black,new jersey
1,2899,ford,2011,silver,tennessee
2,5350,dodge,unknown,silver,georgia
3,25000,ford,,blue,virginia
";

    #[test]
    fn drops_index_column() {
        let file = write_csv(WITH_INDEX);
        let table = load_listings(file.path()).unwrap();

        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, ["price", "brand", "year", "color", "state"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn drops_empty_leading_header() {
        let file = write_csv(",price,year\n0,100,2001\n");
        let table = load_listings(file.path()).unwrap();
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, ["price", "year"]);
    }

    #[test]
    fn drops_index_column_in_any_position() {
        let file = write_csv("price,Unnamed: 0,year\n100,0,2001\n");
        let table = load_listings(file.path()).unwrap();
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, ["price", "year"]);
    }

    #[test]
    fn keeps_columns_without_index() {
        let file = write_csv("price,brand,year\n100,ford,2001\n");
        let table = load_listings(file.path()).unwrap();
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, ["price", "brand", "year"]);
    }

    #[test]
    fn year_is_number_or_missing() {
        let file = write_csv(WITH_INDEX);
        let table = load_listings(file.path()).unwrap();

        match table.column(YEAR_COLUMN).unwrap() {
            ColumnData::Numeric(years) => {
                assert_eq!(years, &[Some(2008.0), Some(2011.0), None, None]);
            }
            ColumnData::Text(_) => panic!("year should have been coerced"),
        }
    }

    #[test]
    fn recognises_missing_tokens() {
        let file = write_csv("price,color\nNA,red\n1500,N/A\n,null\n");
        let table = load_listings(file.path()).unwrap();

        assert_eq!(table.numeric("price").unwrap(), &[None, Some(1500.0), None]);
        assert_eq!(
            table.labels("color").unwrap(),
            vec![Some("red".to_string()), None, None]
        );
    }

    #[test]
    fn na_na_token_keeps_price_numeric() {
        let file = write_csv("price,year\n#N/A N/A,2001\n100,2002\n");
        let table = load_listings(file.path()).unwrap();
        assert_eq!(table.numeric("price").unwrap(), &[None, Some(100.0)]);
    }

    #[test]
    fn padded_token_is_not_missing() {
        let file = write_csv("color\nred\n NA\n");
        let table = load_listings(file.path()).unwrap();
        assert_eq!(
            table.labels("color").unwrap(),
            vec![Some("red".to_string()), Some(" NA".to_string())]
        );
    }

    #[test]
    fn missing_year_column_still_loads() {
        let file = write_csv("price,brand\n100,ford\n");
        let table = load_listings(file.path()).unwrap();
        assert_eq!(
            table.column(YEAR_COLUMN).unwrap_err(),
            SchemaError::MissingColumn {
                column: YEAR_COLUMN.into()
            }
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_listings(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let file = write_csv("price,brand\n100,ford\n200\n");
        let err = load_listings(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"price\n\xff\xfe\n").unwrap();
        let err = load_listings(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn empty_file_has_no_header() {
        let file = write_csv("");
        let err = load_listings(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }
}
