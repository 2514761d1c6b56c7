//! Best-next recommendation extraction from a ranked plan.
//!
//! The selector takes the top entry of a [`RoutePlan`], measures the
//! hero's distance to it, and phrases the result by distance bucket.
//! The buckets are fixed constants, not configuration.

use serde::Serialize;

use coach_types::{MapPoint, SpotCategory};

use crate::optimizer::RoutePlan;

/// Below this distance the hero is effectively at the spot.
const NEARBY_DISTANCE: f64 = 50.0;

/// Below this distance the spot is a short walk away.
const CLOSE_DISTANCE: f64 = 200.0;

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// The single actionable farming recommendation for this tick.
///
/// A plain value: handed to the display side by copy, never by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Name of the target spot.
    pub spot_name: String,
    /// The target spot's position.
    pub position: MapPoint,
    /// Straight-line distance from the hero to the target.
    pub distance: f64,
    /// Expected yield rate at the target.
    pub gold_per_minute: f64,
    /// Expected seconds to fully harvest the target.
    pub time_to_clear: f64,
    /// Risk scalar of the target.
    pub difficulty: f64,
    /// Spot category.
    pub category: SpotCategory,
    /// Human-readable phrasing, bucketed by distance.
    pub text: String,
}

/// Extract the best-next recommendation from a plan.
///
/// Returns `None` for an empty plan -- the caller shows a "no route"
/// state instead of crashing or inventing a target.
pub fn next_spot(plan: &RoutePlan, hero_position: MapPoint) -> Option<Recommendation> {
    let top = plan.first()?;
    let distance = hero_position.distance_to(top.spot.position);

    Some(Recommendation {
        spot_name: top.spot.name.clone(),
        position: top.spot.position,
        distance,
        gold_per_minute: top.spot.gold_per_minute,
        time_to_clear: top.spot.time_to_clear,
        difficulty: top.spot.difficulty,
        category: top.spot.category,
        text: phrase(&top.spot.name, distance),
    })
}

/// Phrase a recommendation by distance bucket.
fn phrase(name: &str, distance: f64) -> String {
    if distance < NEARBY_DISTANCE {
        format!("start farming at {name}")
    } else if distance < CLOSE_DISTANCE {
        format!("head to {name} ({distance:.0}m)")
    } else {
        format!("go to {name}, it's the optimal spot")
    }
}
