//! Nearest-spot position analysis.
//!
//! Independent of any computed route: given just the hero's position and
//! the catalog, describe how well the hero is placed for farming right
//! now, with a warning when the closest spot is itself risky.

use serde::Serialize;

use coach_types::MapPoint;

use crate::spots::FarmSpot;

/// Below this distance the hero is already in farming position.
const GOOD_POSITION_DISTANCE: f64 = 50.0;

/// Below this distance the nearest spot counts as close.
const NEAR_DISTANCE: f64 = 150.0;

/// Difficulty above which the nearest spot triggers a hard warning.
const HIGH_RISK: f64 = 0.8;

/// Difficulty above which the nearest spot triggers a soft warning.
const MODERATE_RISK: f64 = 0.6;

/// Floor applied to the distance before computing the gold/distance ratio.
const MIN_DISTANCE: f64 = 1.0;

/// How the hero's current position relates to the nearest farming spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionAnalysis {
    /// Name of the nearest catalog spot.
    pub nearest_spot: String,
    /// Distance from the hero to that spot.
    pub distance: f64,
    /// Raw gold/distance ratio at the nearest spot (distance floored at 1).
    pub spot_efficiency: f64,
    /// Phrased assessment of the position.
    pub recommendation: String,
    /// Present when the nearest spot is risky.
    pub warning: Option<String>,
}

/// Analyze the hero's position against the catalog.
///
/// Returns `None` only for an empty catalog.
pub fn analyze_position(hero_position: MapPoint, catalog: &[FarmSpot]) -> Option<PositionAnalysis> {
    let nearest = catalog.iter().min_by(|a, b| {
        hero_position
            .distance_to(a.position)
            .total_cmp(&hero_position.distance_to(b.position))
    })?;

    let distance = hero_position.distance_to(nearest.position);

    let recommendation = if distance < GOOD_POSITION_DISTANCE {
        format!("great farming position at {}", nearest.name)
    } else if distance < NEAR_DISTANCE {
        format!("close to {}", nearest.name)
    } else {
        format!("move to {}", nearest.name)
    };

    let warning = if nearest.difficulty > HIGH_RISK {
        Some(String::from("dangerous position!"))
    } else if nearest.difficulty > MODERATE_RISK {
        Some(String::from("careful, enemies nearby"))
    } else {
        None
    };

    Some(PositionAnalysis {
        nearest_spot: nearest.name.clone(),
        distance,
        spot_efficiency: nearest.gold_per_minute / distance.max(MIN_DISTANCE),
        recommendation,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use crate::spots::known_spots;

    use super::*;

    #[test]
    fn empty_catalog_has_no_analysis() {
        assert!(analyze_position(MapPoint::new(0.0, 0.0), &[]).is_none());
    }

    #[test]
    fn hero_on_mid_lane_is_in_position() {
        let analysis = analyze_position(MapPoint::new(512.0, 512.0), &known_spots());
        assert!(analysis.is_some());
        if let Some(analysis) = analysis {
            assert_eq!(analysis.nearest_spot, "Mid lane creeps");
            assert!(analysis.distance.abs() < f64::EPSILON);
            assert_eq!(
                analysis.recommendation,
                "great farming position at Mid lane creeps"
            );
            // Distance floored at 1: ratio equals the raw yield rate.
            assert!((analysis.spot_efficiency - 8.0).abs() < 1e-12);
        }
    }

    #[test]
    fn far_hero_is_told_to_move() {
        // Bottom corner of the map, far from everything.
        let analysis = analyze_position(MapPoint::new(0.0, 0.0), &known_spots());
        assert!(analysis.is_some());
        if let Some(analysis) = analysis {
            assert!(analysis.recommendation.starts_with("move to"));
        }
    }

    #[test]
    fn boss_pit_proximity_warns_hard() {
        // Standing on Roshan (difficulty 0.9).
        let analysis = analyze_position(MapPoint::new(700.0, 300.0), &known_spots());
        assert!(analysis.is_some());
        if let Some(analysis) = analysis {
            assert_eq!(analysis.nearest_spot, "Roshan");
            assert_eq!(analysis.warning.as_deref(), Some("dangerous position!"));
        }
    }

    #[test]
    fn safe_spot_has_no_warning() {
        let analysis = analyze_position(MapPoint::new(380.0, 580.0), &known_spots());
        assert!(analysis.is_some());
        if let Some(analysis) = analysis {
            assert_eq!(analysis.nearest_spot, "Riverside neutrals");
            assert!(analysis.warning.is_none());
        }
    }
}
