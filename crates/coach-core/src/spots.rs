//! The fixed catalog of known farming spots.
//!
//! The catalog is configuration data, not logic: nine hand-placed entries
//! reflecting the strategic hotspots of the map, spanning lane creeps,
//! neutral camps, a stacked camp, and the boss pit. Entries are created
//! once at startup and shared read-only; per-call scoring lives in the
//! optimizer and never writes back into the catalog.

use serde::{Deserialize, Serialize};

use coach_types::{MapPoint, SpotCategory};

// ---------------------------------------------------------------------------
// FarmSpot
// ---------------------------------------------------------------------------

/// An immutable catalog entry: a named location where gold can be farmed
/// at a known rate and risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmSpot {
    /// Display label, unique within the catalog.
    pub name: String,
    /// Position in map space.
    pub position: MapPoint,
    /// Expected yield rate. Non-negative.
    pub gold_per_minute: f64,
    /// Risk scalar in `[0, 1]`; 1 means lethal.
    pub difficulty: f64,
    /// What kind of farm this is.
    pub category: SpotCategory,
    /// Retreat distance to the base. Informational only.
    pub distance_to_base: f64,
    /// Expected seconds to fully harvest. Informational only.
    pub time_to_clear: f64,
}

/// Helper to build a [`FarmSpot`] from the catalog table.
fn spot(
    name: &str,
    x: f64,
    y: f64,
    gold_per_minute: f64,
    difficulty: f64,
    category: SpotCategory,
    distance_to_base: f64,
    time_to_clear: f64,
) -> FarmSpot {
    FarmSpot {
        name: name.to_owned(),
        position: MapPoint::new(x, y),
        gold_per_minute,
        difficulty,
        category,
        distance_to_base,
        time_to_clear,
    }
}

/// The nine known farming spots of the map.
///
/// Pure and deterministic; returns a fresh owned catalog on every call.
#[allow(clippy::too_many_lines)]
pub fn known_spots() -> Vec<FarmSpot> {
    vec![
        // --- Lane creep waves ---
        spot(
            "Bottom lane creeps",
            100.0,
            800.0,
            8.0,
            0.3,
            SpotCategory::Lane,
            400.0,
            20.0,
        ),
        spot(
            "Mid lane creeps",
            512.0,
            512.0,
            8.0,
            0.5,
            SpotCategory::Lane,
            300.0,
            20.0,
        ),
        spot(
            "Top lane creeps",
            900.0,
            200.0,
            8.0,
            0.4,
            SpotCategory::Lane,
            500.0,
            20.0,
        ),
        // --- Neutral jungle camps ---
        spot(
            "Ancient camp",
            600.0,
            650.0,
            15.0,
            0.4,
            SpotCategory::Jungle,
            200.0,
            45.0,
        ),
        spot(
            "Riverside neutrals",
            380.0,
            580.0,
            10.0,
            0.3,
            SpotCategory::Jungle,
            150.0,
            30.0,
        ),
        spot(
            "Grove neutrals",
            650.0,
            400.0,
            10.0,
            0.3,
            SpotCategory::Jungle,
            250.0,
            30.0,
        ),
        spot(
            "Northern neutrals",
            300.0,
            300.0,
            10.0,
            0.4,
            SpotCategory::Jungle,
            400.0,
            30.0,
        ),
        // --- Stacked camps ---
        spot(
            "Stacked mage camp",
            450.0,
            350.0,
            25.0,
            0.6,
            SpotCategory::StackedCamp,
            300.0,
            60.0,
        ),
        // --- Boss ---
        spot(
            "Roshan",
            700.0,
            300.0,
            50.0,
            0.9,
            SpotCategory::Boss,
            500.0,
            120.0,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Catalog statistics
// ---------------------------------------------------------------------------

/// Difficulty above which a spot counts as dangerous in the summary stats.
const DANGEROUS_DIFFICULTY: f64 = 0.7;

/// Summary statistics over a spot catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    /// Total number of spots.
    pub total_spots: usize,
    /// Number of lane spots.
    pub lane_spots: usize,
    /// Number of jungle spots.
    pub jungle_spots: usize,
    /// Number of stacked-camp spots.
    pub stacked_spots: usize,
    /// The highest yield rate in the catalog.
    pub max_gold_per_minute: f64,
    /// Number of spots with difficulty above 0.7.
    pub dangerous_spots: usize,
}

/// Summarize a catalog for logging and diagnostics.
pub fn catalog_stats(catalog: &[FarmSpot]) -> CatalogStats {
    CatalogStats {
        total_spots: catalog.len(),
        lane_spots: count_category(catalog, SpotCategory::Lane),
        jungle_spots: count_category(catalog, SpotCategory::Jungle),
        stacked_spots: count_category(catalog, SpotCategory::StackedCamp),
        max_gold_per_minute: catalog
            .iter()
            .map(|s| s.gold_per_minute)
            .fold(0.0, f64::max),
        dangerous_spots: catalog
            .iter()
            .filter(|s| s.difficulty > DANGEROUS_DIFFICULTY)
            .count(),
    }
}

fn count_category(catalog: &[FarmSpot], category: SpotCategory) -> usize {
    catalog.iter().filter(|s| s.category == category).count()
}
