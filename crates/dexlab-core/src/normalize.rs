//! Min-max normalization of the numeric columns.

use dexlab_stats::scaling::MinMaxScaler;

use crate::{record::Column, table::Table};

/// Rescales every numeric column of `table` onto `[0, 1]` in place.
///
/// Each column is fitted on its own current minimum and maximum. A column
/// whose values are all equal, or that has no values at all, is set to `0.0`
/// in every row; otherwise missing entries stay missing.
///
/// Returns the scaler fitted for each column, `None` where the column had no
/// values.
pub fn normalize(table: &mut Table) -> Vec<(Column, Option<MinMaxScaler>)> {
    Column::ALL
        .into_iter()
        .map(|column| {
            let scaler = MinMaxScaler::fit(table.values(column));
            let degenerate = scaler.is_none_or(|s| s.is_degenerate());
            for record in table.records_mut() {
                let value = record.value_mut(column);
                if degenerate {
                    *value = Some(0.0);
                } else if let (Some(v), Some(scaler)) = (value.as_mut(), scaler) {
                    *v = scaler.scale(*v);
                }
            }
            tracing::trace!(%column, ?scaler, degenerate, "normalized column");
            (column, scaler)
        })
        .collect()
}
