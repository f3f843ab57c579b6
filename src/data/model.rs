use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// CommodityRecord – one row of the production table
// ---------------------------------------------------------------------------

/// A single production figure: one commodity in one regency.
#[derive(Debug, Clone, PartialEq)]
pub struct CommodityRecord {
    /// Commodity name (`Komoditi` column), the filter key.
    pub commodity: String,
    /// Regency name (`Kabupaten` column), the join key against boundary
    /// features.
    pub regency: String,
    /// Production volume in tons (`Produksi` column).
    pub production: i64,
    /// Lower bound of the regency's geographic difficulty index
    /// (`Range Indeks Kesulitan Geografis Bawah`).
    pub geo_difficulty_low: f64,
    /// Upper bound of the regency's geographic difficulty index
    /// (`Range Indeks Kesulitan Geografis Atas`).
    pub geo_difficulty_high: f64,
}

// ---------------------------------------------------------------------------
// CommodityTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with the selector index pre-computed.
///
/// Rows stay in source file order; the first row for a commodity is its
/// "sentra produksi" row, so order matters downstream.
#[derive(Debug, Clone)]
pub struct CommodityTable {
    /// All rows, in source file order.
    pub records: Vec<CommodityRecord>,
    /// Sorted, deduplicated commodity names for the selector.
    pub commodities: Vec<String>,
}

impl CommodityTable {
    /// Build the commodity index from loaded rows.
    pub fn from_records(records: Vec<CommodityRecord>) -> Self {
        let commodities: BTreeSet<String> =
            records.iter().map(|r| r.commodity.clone()).collect();
        CommodityTable {
            records,
            commodities: commodities.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Production – the value joined onto a boundary feature
// ---------------------------------------------------------------------------

/// Production volume attached to a region by the join, or the explicit
/// marker for regions with no row in the current selection.
///
/// `Tons(0)` is real data and renders as "0", never as "N/A".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    Tons(i64),
    NotAvailable,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Production::Tons(t) => write!(f, "{t}"),
            Production::NotAvailable => write!(f, "N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(commodity: &str, regency: &str, production: i64) -> CommodityRecord {
        CommodityRecord {
            commodity: commodity.to_string(),
            regency: regency.to_string(),
            production,
            geo_difficulty_low: 1.0,
            geo_difficulty_high: 3.0,
        }
    }

    #[test]
    fn commodity_index_is_sorted_and_deduplicated() {
        let table = CommodityTable::from_records(vec![
            row("Padi", "Kupang", 200),
            row("Jagung", "Kupang", 100),
            row("Padi", "Sikka", 50),
            row("Kelapa", "Ende", 75),
        ]);
        assert_eq!(table.commodities, vec!["Jagung", "Kelapa", "Padi"]);
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn empty_table_has_no_commodities() {
        let table = CommodityTable::from_records(Vec::new());
        assert!(table.is_empty());
        assert!(table.commodities.is_empty());
    }

    #[test]
    fn zero_tons_displays_differently_from_not_available() {
        assert_eq!(Production::Tons(0).to_string(), "0");
        assert_eq!(Production::NotAvailable.to_string(), "N/A");
        assert_ne!(
            Production::Tons(0).to_string(),
            Production::NotAvailable.to_string(),
            "0 tons is real data and must not render as the sentinel"
        );
        assert_eq!(Production::Tons(1500).to_string(), "1500");
    }
}
