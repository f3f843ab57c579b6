use std::collections::BTreeMap;

use super::boundary::BoundarySet;
use super::model::{CommodityTable, Production};

// ---------------------------------------------------------------------------
// Attribute join: filtered table rows → boundary features
// ---------------------------------------------------------------------------

/// Attach production volumes to boundary features by regency name.
///
/// `filtered` holds indices into `table.records` (the output of
/// [`super::filter::rows_for_commodity`]).  For every feature, in feature
/// order, the result carries the production of the *first* filtered row
/// (first in table order) whose `regency` equals the feature name, or
/// [`Production::NotAvailable`] when no row matches.
///
/// The result is a fresh vector parallel to `bounds.features`, so values
/// from an earlier selection can never leak into a later one, and running
/// the join twice with the same subset gives the same answer.
pub fn production_by_feature(
    bounds: &BoundarySet,
    table: &CommodityTable,
    filtered: &[usize],
) -> Vec<Production> {
    // First filtered row per regency wins.
    let mut first_match: BTreeMap<&str, i64> = BTreeMap::new();
    for &row in filtered {
        let r = &table.records[row];
        first_match.entry(r.regency.as_str()).or_insert(r.production);
    }

    bounds
        .features
        .iter()
        .map(|feature| match first_match.get(feature.name.as_str()) {
            Some(&tons) => Production::Tons(tons),
            None => Production::NotAvailable,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::rows_for_commodity;
    use crate::data::model::CommodityRecord;
    use crate::data::testdata;

    #[test]
    fn matched_features_get_first_row_value_and_rest_are_marked() {
        let table = testdata::scenario_table();
        let bounds = testdata::scenario_bounds();
        let rows = rows_for_commodity(&table, "Jagung");

        let production = production_by_feature(&bounds, &table, &rows);
        // Features: Kupang, Sikka, Ende (no Jagung row).
        assert_eq!(
            production,
            vec![
                Production::Tons(100),
                Production::Tons(50),
                Production::NotAvailable,
            ]
        );
    }

    #[test]
    fn join_is_idempotent() {
        let table = testdata::scenario_table();
        let bounds = testdata::scenario_bounds();
        let rows = rows_for_commodity(&table, "Jagung");

        let once = production_by_feature(&bounds, &table, &rows);
        let twice = production_by_feature(&bounds, &table, &rows);
        assert_eq!(once, twice);
    }

    #[test]
    fn switching_selection_leaves_no_residue() {
        let table = testdata::scenario_table();
        let bounds = testdata::scenario_bounds();

        let jagung = rows_for_commodity(&table, "Jagung");
        let _ = production_by_feature(&bounds, &table, &jagung);

        let padi = rows_for_commodity(&table, "Padi");
        let production = production_by_feature(&bounds, &table, &padi);
        // Sikka produced Jagung but not Padi: it must fall back to N/A.
        assert_eq!(
            production,
            vec![
                Production::Tons(200),
                Production::NotAvailable,
                Production::NotAvailable,
            ]
        );
    }

    #[test]
    fn empty_subset_marks_every_feature() {
        let table = testdata::scenario_table();
        let bounds = testdata::scenario_bounds();

        let production = production_by_feature(&bounds, &table, &[]);
        assert_eq!(production, vec![Production::NotAvailable; 3]);
    }

    #[test]
    fn duplicate_regency_rows_first_wins() {
        let mut records = testdata::scenario_table().records;
        records.push(CommodityRecord {
            commodity: "Jagung".into(),
            regency: "Kupang".into(),
            production: 999,
            geo_difficulty_low: 1.0,
            geo_difficulty_high: 3.0,
        });
        let table = CommodityTable::from_records(records);
        let bounds = testdata::scenario_bounds();

        let rows = rows_for_commodity(&table, "Jagung");
        assert_eq!(rows, vec![0, 1, 3]);
        let production = production_by_feature(&bounds, &table, &rows);
        assert_eq!(production[0], Production::Tons(100), "first row wins");
    }

    #[test]
    fn zero_production_is_not_the_sentinel() {
        let table = CommodityTable::from_records(vec![CommodityRecord {
            commodity: "Jagung".into(),
            regency: "Kupang".into(),
            production: 0,
            geo_difficulty_low: 1.0,
            geo_difficulty_high: 3.0,
        }]);
        let bounds = testdata::scenario_bounds();

        let rows = rows_for_commodity(&table, "Jagung");
        let production = production_by_feature(&bounds, &table, &rows);
        assert_eq!(production[0], Production::Tons(0));
        assert_ne!(production[0], Production::NotAvailable);
    }
}
