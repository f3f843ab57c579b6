use super::model::CommodityTable;

// ---------------------------------------------------------------------------
// Derived summary statistics for the current selection
// ---------------------------------------------------------------------------

/// The three figures shown next to the map.  Derived on every selection
/// change, never stored with the data.  The `Default` value is the no-data
/// shape an empty subset produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// "Kabupaten/Kota Sentra Produksi": the regency of the first filtered
    /// row in table order, not the regency with the largest volume.
    pub primary_regency: Option<String>,
    /// Sum of production over the filtered subset, in tons.
    pub total_production: i64,
    /// Geographic difficulty index range (low, high) of that same first
    /// row.  Not an aggregate over the subset.
    pub geo_difficulty: Option<(f64, f64)>,
}

impl Summary {
    /// Build the summary from the filtered row indices.  An empty subset is
    /// a valid input and yields the explicit no-data shape
    /// (`None` / `0` / `None`).
    pub fn from_filtered(table: &CommodityTable, filtered: &[usize]) -> Self {
        let first = filtered.first().map(|&i| &table.records[i]);
        Summary {
            primary_regency: first.map(|r| r.regency.clone()),
            total_production: filtered.iter().map(|&i| table.records[i].production).sum(),
            geo_difficulty: first.map(|r| (r.geo_difficulty_low, r.geo_difficulty_high)),
        }
    }
}
