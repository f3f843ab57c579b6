use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::boundary::{self, BoundarySet};
use crate::data::filter::rows_for_commodity;
use crate::data::join::production_by_feature;
use crate::data::loader;
use crate::data::model::{CommodityTable, Production};
use crate::data::summary::Summary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `table` and `boundaries` are loaded once at startup and never mutated;
/// the remaining fields are the cached result of the current selection and
/// are rebuilt as a whole by `reselect`, so a value from one selection can
/// never survive into the next.
pub struct AppState {
    /// The commodity table, in file order.
    pub table: CommodityTable,
    /// The regency boundaries, in file order.
    pub boundaries: BoundarySet,

    /// Currently selected commodity (`None` only when the table is empty).
    pub selected: Option<String>,
    /// Indices of table rows matching the selection, in table order.
    pub filtered: Vec<usize>,
    /// Regencies present in the filtered subset (highlighted on the map).
    pub selected_regencies: BTreeSet<String>,
    /// Joined production per boundary feature, parallel to
    /// `boundaries.features`.
    pub production: Vec<Production>,
    /// Derived figures for the side panel.
    pub summary: Summary,
}

impl AppState {
    /// Build the state from already-loaded data and select the first
    /// commodity, if there is one.
    pub fn new(table: CommodityTable, boundaries: BoundarySet) -> Self {
        let mut state = AppState {
            selected: table.commodities.first().cloned(),
            table,
            boundaries,
            filtered: Vec::new(),
            selected_regencies: BTreeSet::new(),
            production: Vec::new(),
            summary: Summary::default(),
        };
        state.reselect();
        state
    }

    /// Load both input files and build the initial state.  Any failure here
    /// is fatal to the application: no UI is shown without data.
    pub fn load(table_path: &Path, boundary_path: &Path) -> Result<Self> {
        let table = loader::load_table(table_path)
            .with_context(|| format!("loading commodity table {}", table_path.display()))?;
        let boundaries = boundary::load_boundaries(boundary_path)
            .with_context(|| format!("loading boundaries {}", boundary_path.display()))?;
        log::info!(
            "loaded {} rows ({} commodities) and {} boundary features",
            table.len(),
            table.commodities.len(),
            boundaries.len()
        );
        Ok(Self::new(table, boundaries))
    }

    /// Switch the selection and recompute filter, join and summary in one
    /// synchronous pass.  No-op when the commodity is already selected.
    pub fn select_commodity(&mut self, commodity: String) {
        if self.selected.as_deref() == Some(commodity.as_str()) {
            return;
        }
        self.selected = Some(commodity);
        self.reselect();
    }

    /// Recompute every selection-derived field from `selected`.
    fn reselect(&mut self) {
        self.filtered = match self.selected.as_deref() {
            Some(commodity) => rows_for_commodity(&self.table, commodity),
            None => Vec::new(),
        };
        self.selected_regencies = self
            .filtered
            .iter()
            .map(|&i| self.table.records[i].regency.clone())
            .collect();
        self.production = production_by_feature(&self.boundaries, &self.table, &self.filtered);
        self.summary = Summary::from_filtered(&self.table, &self.filtered);
    }
}
