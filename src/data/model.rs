use std::fmt;

use crate::error::SchemaError;

// ---------------------------------------------------------------------------
// ColumnData – the cells of one column
// ---------------------------------------------------------------------------

/// Column storage, typed per column the way a dataframe reader infers dtypes.
/// `None` is the explicit missing marker.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    /// Infer the column type from raw cells: numeric when every
    /// non-missing cell parses as a number, text otherwise.
    pub fn infer(cells: Vec<Option<String>>) -> Self {
        let all_numeric = cells
            .iter()
            .flatten()
            .all(|s| parse_number(s).is_some());

        if all_numeric {
            ColumnData::Numeric(
                cells
                    .iter()
                    .map(|c| c.as_deref().and_then(parse_number))
                    .collect(),
            )
        } else {
            ColumnData::Text(cells)
        }
    }

    /// Lenient numeric coercion: anything that does not parse becomes missing.
    pub fn to_numeric(&self) -> ColumnData {
        match self {
            ColumnData::Numeric(v) => ColumnData::Numeric(v.clone()),
            ColumnData::Text(v) => ColumnData::Numeric(
                v.iter()
                    .map(|c| c.as_deref().and_then(parse_number))
                    .collect(),
            ),
        }
    }
}

/// Parse a trimmed cell as `f64`. NaN spellings are handled earlier as
/// missing markers, so a literal NaN here is rejected too.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

// ---------------------------------------------------------------------------
// ListingTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All vehicle listings, stored column by column in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingTable {
    columns: Vec<Column>,
    rows: usize,
}

impl ListingTable {
    /// Build a table from columns of equal length.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let rows = columns.first().map_or(0, |c| c.data.len());
        debug_assert!(columns.iter().all(|c| c.data.len() == rows));
        ListingTable { columns, rows }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Result<&ColumnData, SchemaError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.data)
            .ok_or_else(|| SchemaError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Numeric cells of a column; text columns are a schema error.
    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>], SchemaError> {
        match self.column(name)? {
            ColumnData::Numeric(v) => Ok(v),
            ColumnData::Text(_) => Err(SchemaError::NotNumeric {
                column: name.to_string(),
            }),
        }
    }

    /// Cells of a column as grouping labels. Numeric cells are formatted.
    pub fn labels(&self, name: &str) -> Result<Vec<Option<String>>, SchemaError> {
        Ok(match self.column(name)? {
            ColumnData::Text(v) => v.clone(),
            ColumnData::Numeric(v) => v.iter().map(|c| c.map(format_number)).collect(),
        })
    }

    /// Remove a column; returns whether it was present. Load-time only.
    pub(crate) fn drop_column(&mut self, name: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.name != name);
        before != self.columns.len()
    }

    /// Coerce a column to numeric in place. Load-time only.
    pub(crate) fn coerce_numeric(&mut self, name: &str) -> Result<(), SchemaError> {
        let col = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| SchemaError::MissingColumn {
                column: name.to_string(),
            })?;
        col.data = col.data.to_numeric();
        Ok(())
    }
}

/// Integral values print without a fractional part, like a dataframe would.
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

impl fmt::Display for ListingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} listings × {} columns", self.rows, self.columns.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[&str]) -> Vec<Option<String>> {
        v.iter()
            .map(|s| if s.is_empty() { None } else { Some(s.to_string()) })
            .collect()
    }

    #[test]
    fn infers_numeric_when_all_cells_parse() {
        let col = ColumnData::infer(cells(&["1", "2.5", ""]));
        assert_eq!(col, ColumnData::Numeric(vec![Some(1.0), Some(2.5), None]));
    }

    #[test]
    fn infers_text_on_any_non_number() {
        let col = ColumnData::infer(cells(&["1", "ford"]));
        assert!(matches!(col, ColumnData::Text(_)));
    }

    #[test]
    fn coercion_turns_garbage_into_missing() {
        let col = ColumnData::infer(cells(&["2019", "unknown", "", "2001"])).to_numeric();
        assert_eq!(
            col,
            ColumnData::Numeric(vec![Some(2019.0), None, None, Some(2001.0)])
        );
    }

    #[test]
    fn missing_column_is_schema_error() {
        let table = ListingTable::from_columns(vec![Column {
            name: "price".into(),
            data: ColumnData::Numeric(vec![Some(1.0)]),
        }]);
        assert_eq!(
            table.column("brand").unwrap_err(),
            SchemaError::MissingColumn {
                column: "brand".into()
            }
        );
    }

    #[test]
    fn text_column_is_not_numeric() {
        let table = ListingTable::from_columns(vec![Column {
            name: "price".into(),
            data: ColumnData::Text(vec![Some("cheap".into())]),
        }]);
        assert!(matches!(
            table.numeric("price"),
            Err(SchemaError::NotNumeric { .. })
        ));
    }

    #[test]
    fn numeric_labels_drop_trailing_zero() {
        let table = ListingTable::from_columns(vec![Column {
            name: "lot".into(),
            data: ColumnData::Numeric(vec![Some(167_651_184.0), Some(1.5), None]),
        }]);
        assert_eq!(
            table.labels("lot").unwrap(),
            vec![Some("167651184".to_string()), Some("1.5".to_string()), None]
        );
    }
}
