use super::model::CommodityTable;

// ---------------------------------------------------------------------------
// Commodity filter
// ---------------------------------------------------------------------------

/// Return indices of table rows whose commodity equals `commodity`,
/// preserving source file order.
///
/// Pure function over its inputs; an empty result is a valid outcome
/// (no regency produces that commodity).  Comparison is exact: commodity
/// names come from the table itself via [`CommodityTable::commodities`].
pub fn rows_for_commodity(table: &CommodityTable, commodity: &str) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.commodity == commodity)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testdata;

    #[test]
    fn filter_preserves_row_order() {
        let table = testdata::scenario_table();
        let rows = rows_for_commodity(&table, "Jagung");
        assert_eq!(rows, vec![0, 1]);
        assert_eq!(table.records[rows[0]].regency, "Kupang");
        assert_eq!(table.records[rows[1]].regency, "Sikka");
    }

    #[test]
    fn filter_selects_only_matching_rows() {
        let table = testdata::scenario_table();
        let rows = rows_for_commodity(&table, "Padi");
        assert_eq!(rows, vec![2]);
        assert_eq!(table.records[2].production, 200);
    }

    #[test]
    fn unknown_commodity_yields_empty_subset() {
        let table = testdata::scenario_table();
        assert!(rows_for_commodity(&table, "Kopi").is_empty());
    }

    #[test]
    fn comparison_is_exact() {
        let table = testdata::scenario_table();
        assert!(rows_for_commodity(&table, "jagung").is_empty());
        assert!(rows_for_commodity(&table, "Jagung ").is_empty());
    }
}
