//! Data layer: loading, filtering, joining, and summarising.
//!
//! ```text
//!  Komoditi NTT.xlsx / .csv / .json         NTT.geojson
//!         │                                      │
//!         ▼                                      ▼
//!    ┌────────┐                            ┌──────────┐
//!    │ loader │  parse → CommodityTable    │ boundary │  parse → BoundarySet
//!    └────────┘                            └──────────┘
//!         │                                      │
//!         ▼                                      │
//!    ┌────────┐                                  │
//!    │ filter │  commodity → row indices         │
//!    └────────┘                                  │
//!         │                                      │
//!         ├────────────────┐                     │
//!         ▼                ▼                     │
//!    ┌─────────┐      ┌────────┐                 │
//!    │ summary │      │  join  │ ◀───────────────┘
//!    └─────────┘      └────────┘
//!         │                │
//!         ▼                ▼
//!      Summary       Vec<Production>  (one per feature)
//! ```

pub mod boundary;
pub mod filter;
pub mod join;
pub mod loader;
pub mod model;
pub mod summary;
