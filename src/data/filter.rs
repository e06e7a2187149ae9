use crate::error::SchemaError;

use super::model::ListingTable;

/// Return indices of listings whose numeric `column` is at least `threshold`.
///
/// A listing passes when:
/// * its value is present and `>= threshold` → passes
/// * its value is missing → fails (a missing marker never compares)
pub fn rows_at_least(
    table: &ListingTable,
    column: &str,
    threshold: f64,
) -> Result<Vec<usize>, SchemaError> {
    let values = table.numeric(column)?;
    Ok(values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_some_and(|v| v >= threshold))
        .map(|(i, _)| i)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Column, ColumnData};

    #[test]
    fn missing_values_never_pass() {
        let table = ListingTable::from_columns(vec![Column {
            name: "year".into(),
            data: ColumnData::Numeric(vec![Some(1999.0), None, Some(2000.0), Some(2015.0)]),
        }]);
        assert_eq!(rows_at_least(&table, "year", 2000.0).unwrap(), vec![2, 3]);
    }
}
