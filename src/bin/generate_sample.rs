use std::fs;

use serde_json::{json, Value};

// Written to the same fixed locations the viewer reads from.
const TABLE_PATH: &str = "data/Komoditi NTT.csv";
const BOUNDARY_PATH: &str = "data/geojson/NTT.geojson";

/// Commodity, regency, production (ton), geographic difficulty index range.
/// Rows are grouped per commodity with the main producer listed first.
const ROWS: &[(&str, &str, i64, f64, f64)] = &[
    ("Jagung", "Kupang", 97_530, 29.84, 71.02),
    ("Jagung", "Timor Tengah Selatan", 84_210, 41.63, 82.55),
    ("Jagung", "Sumba Timur", 52_400, 38.20, 79.41),
    ("Jagung", "Manggarai", 21_350, 36.75, 74.88),
    ("Padi", "Manggarai", 88_140, 36.75, 74.88),
    ("Padi", "Kupang", 61_020, 29.84, 71.02),
    ("Padi", "Sumba Timur", 48_700, 38.20, 79.41),
    ("Kelapa", "Sikka", 18_420, 33.12, 69.47),
    ("Kelapa", "Flores Timur", 15_960, 35.58, 77.93),
    ("Kelapa", "Lembata", 7_340, 44.06, 85.31),
    ("Kopi", "Manggarai", 12_680, 36.75, 74.88),
    ("Kopi", "Ende", 4_150, 31.27, 68.84),
    ("Jambu Mete", "Flores Timur", 9_870, 35.58, 77.93),
    ("Jambu Mete", "Sikka", 8_130, 33.12, 69.47),
    ("Jambu Mete", "Lembata", 5_210, 44.06, 85.31),
    ("Pisang", "Ende", 6_940, 31.27, 68.84),
    ("Pisang", "Sikka", 5_480, 33.12, 69.47),
];

/// Closed octagonal ring around (cx, cy), in GeoJSON [lon, lat] order.
fn blob(cx: f64, cy: f64, rx: f64, ry: f64) -> Vec<[f64; 2]> {
    let mut ring: Vec<[f64; 2]> = (0..8)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / 8.0;
            [cx + rx * angle.cos(), cy + ry * angle.sin()]
        })
        .collect();
    ring.push(ring[0]);
    ring
}

fn polygon_feature(name: &str, ring: Vec<[f64; 2]>) -> Value {
    json!({
        "type": "Feature",
        "properties": { "WADMKK": name },
        "geometry": { "type": "Polygon", "coordinates": [ring] },
    })
}

fn multipolygon_feature(name: &str, rings: Vec<Vec<[f64; 2]>>) -> Value {
    let parts: Vec<_> = rings.into_iter().map(|ring| vec![ring]).collect();
    json!({
        "type": "Feature",
        "properties": { "WADMKK": name },
        "geometry": { "type": "MultiPolygon", "coordinates": parts },
    })
}

fn main() {
    fs::create_dir_all("data/geojson").expect("Failed to create data directories");

    // ---- Commodity table (CSV) ----
    let mut writer = csv::Writer::from_path(TABLE_PATH).expect("Failed to create table file");
    writer
        .write_record([
            "Komoditi",
            "Kabupaten",
            "Produksi",
            "Range Indeks Kesulitan Geografis Bawah",
            "Range Indeks Kesulitan Geografis Atas",
        ])
        .expect("Failed to write header");
    for &(commodity, regency, production, low, high) in ROWS {
        let production = production.to_string();
        let low = low.to_string();
        let high = high.to_string();
        writer
            .write_record([commodity, regency, production.as_str(), low.as_str(), high.as_str()])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush table");

    // ---- Regency boundaries (GeoJSON) ----
    // Rough blobs around real NTT coordinates; Flores Timur spans two islands.
    let features = vec![
        polygon_feature("Kupang", blob(123.70, -10.05, 0.35, 0.25)),
        polygon_feature("Timor Tengah Selatan", blob(124.45, -9.75, 0.30, 0.25)),
        polygon_feature("Sumba Timur", blob(120.30, -9.90, 0.50, 0.30)),
        polygon_feature("Manggarai", blob(120.45, -8.60, 0.28, 0.30)),
        polygon_feature("Ende", blob(121.55, -8.84, 0.28, 0.26)),
        polygon_feature("Sikka", blob(122.20, -8.67, 0.28, 0.22)),
        multipolygon_feature(
            "Flores Timur",
            vec![blob(122.80, -8.30, 0.20, 0.16), blob(123.15, -8.48, 0.15, 0.12)],
        ),
        polygon_feature("Lembata", blob(123.50, -8.38, 0.18, 0.24)),
        // Present on the map but absent from the table.
        polygon_feature("Sabu Raijua", blob(121.85, -10.55, 0.20, 0.14)),
    ];
    let n_features = features.len();

    let collection = json!({
        "type": "FeatureCollection",
        "name": "NTT",
        "features": features,
    });
    let text = serde_json::to_string_pretty(&collection).expect("Failed to encode GeoJSON");
    fs::write(BOUNDARY_PATH, text).expect("Failed to write boundary file");

    println!(
        "Wrote {} table rows to {TABLE_PATH} and {n_features} regency boundaries to {BOUNDARY_PATH}",
        ROWS.len()
    );
}
