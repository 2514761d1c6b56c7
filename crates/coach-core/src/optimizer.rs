//! Farm-route optimization: safety filter, nearest-neighbor traversal,
//! efficiency scoring, and the final value re-rank.
//!
//! The optimizer works in two deliberate phases:
//!
//! 1. A greedy nearest-neighbor traversal from the hero's position builds
//!    a plausible *walking* order. The traversal exists only to derive a
//!    per-spot leg distance -- the distance actually walked to reach each
//!    spot from the previous one.
//! 2. The traversal order is then abandoned: the returned plan re-ranks
//!    all visited spots by efficiency, descending. The plan is a priority
//!    list of opportunities, not a path to walk in sequence.
//!
//! Collapsing the two phases into one sort would change the leg distances
//! and therefore the scores; the selector depends on the observed
//! behavior, and the tests pin it.
//!
//! Plans are immutable values produced per call. The catalog is never
//! written to, so the optimizer can be polled from one thread while
//! recommendation copies are handed elsewhere.

use serde::Serialize;
use tracing::{info, warn};

use coach_types::MapPoint;

use crate::selector::{self, Recommendation};
use crate::spots::FarmSpot;

/// Floor applied to a traversal leg distance before it divides the yield
/// rate. Standing on top of a spot must not divide by zero.
const MIN_LEG_DISTANCE: f64 = 1.0;

// ---------------------------------------------------------------------------
// RankedSpot / RoutePlan
// ---------------------------------------------------------------------------

/// A catalog spot annotated with the scores derived for one plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSpot {
    /// The underlying catalog entry (copied, never aliased).
    pub spot: FarmSpot,
    /// Distance walked to this spot from the previous traversal step
    /// (from the hero for the first step). Not floored.
    pub leg_distance: f64,
    /// `(gold_per_minute / max(leg_distance, 1)) * (1 - difficulty)`.
    pub efficiency: f64,
}

/// An ordered farming plan: spots ranked by descending efficiency.
///
/// An empty plan means "no safe farm option right now" -- a normal
/// outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutePlan {
    spots: Vec<RankedSpot>,
}

impl RoutePlan {
    /// Wrap a ranked spot list produced by [`rank_spots`].
    pub const fn new(spots: Vec<RankedSpot>) -> Self {
        Self { spots }
    }

    /// Whether the plan contains no spots.
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Number of spots in the plan.
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// The highest-efficiency spot, if any.
    pub fn first(&self) -> Option<&RankedSpot> {
        self.spots.first()
    }

    /// Iterate the plan in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedSpot> {
        self.spots.iter()
    }

    /// The plan as a slice, in rank order.
    pub fn as_slice(&self) -> &[RankedSpot] {
        &self.spots
    }
}

impl<'a> IntoIterator for &'a RoutePlan {
    type Item = &'a RankedSpot;
    type IntoIter = std::slice::Iter<'a, RankedSpot>;

    fn into_iter(self) -> Self::IntoIter {
        self.spots.iter()
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Build a ranked spot list for the given hero position and danger level.
///
/// Steps:
///
/// 1. **Safety filter**: keep only spots with
///    `difficulty < 1 - danger_level`. At `danger_level = 1.0` nothing
///    qualifies and the result is empty.
/// 2. **Traversal**: repeatedly visit the nearest unvisited spot,
///    measuring each leg from the previous spot. Equal distances resolve
///    to the earliest remaining catalog entry.
/// 3. **Scoring**: each leg yields
///    `efficiency = (gold_per_minute / max(leg, 1)) * (1 - difficulty)`.
/// 4. **Re-rank**: stable sort by efficiency descending
///    ([`f64::total_cmp`]), so equal efficiencies keep traversal order --
///    the deterministic tie-break. Identical inputs always produce
///    element-for-element identical output.
pub fn rank_spots(
    hero_position: MapPoint,
    danger_level: f64,
    catalog: &[FarmSpot],
) -> Vec<RankedSpot> {
    let safety_cutoff = 1.0 - danger_level;
    let mut unvisited: Vec<&FarmSpot> = catalog
        .iter()
        .filter(|s| s.difficulty < safety_cutoff)
        .collect();

    let mut ranked = Vec::with_capacity(unvisited.len());
    let mut current = hero_position;

    while let Some((index, leg_distance)) = nearest_index(current, &unvisited) {
        let spot = unvisited.remove(index);
        let floored = leg_distance.max(MIN_LEG_DISTANCE);
        let efficiency = (spot.gold_per_minute / floored) * (1.0 - spot.difficulty);
        current = spot.position;
        ranked.push(RankedSpot {
            spot: spot.clone(),
            leg_distance,
            efficiency,
        });
    }

    ranked.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    ranked
}

/// Index and distance of the spot nearest to `from`.
///
/// Returns the first minimal element, so distance ties go to the earliest
/// remaining catalog entry.
fn nearest_index(from: MapPoint, spots: &[&FarmSpot]) -> Option<(usize, f64)> {
    spots
        .iter()
        .enumerate()
        .map(|(i, s)| (i, from.distance_to(s.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

// ---------------------------------------------------------------------------
// RouteOptimizer
// ---------------------------------------------------------------------------

/// The stateful optimizer: owns the catalog and caches the most recent
/// plan so [`next_spot`](Self::next_spot) needs no recomputation.
///
/// Observable states: no plan computed yet (fresh optimizer), or a cached
/// plan from the last [`plan_route`](Self::plan_route) call -- possibly
/// empty. The cached plan is replaced wholesale on every call, never
/// mutated incrementally.
#[derive(Debug, Clone)]
pub struct RouteOptimizer {
    catalog: Vec<FarmSpot>,
    hero_position: MapPoint,
    last_plan: Option<RoutePlan>,
}

impl RouteOptimizer {
    /// Create an optimizer over the given catalog.
    pub const fn new(catalog: Vec<FarmSpot>) -> Self {
        Self {
            catalog,
            hero_position: MapPoint::new(500.0, 500.0),
            last_plan: None,
        }
    }

    /// The optimizer's read-only catalog.
    pub fn catalog(&self) -> &[FarmSpot] {
        &self.catalog
    }

    /// The hero position from the most recent planning call.
    pub const fn hero_position(&self) -> MapPoint {
        self.hero_position
    }

    /// Compute a fresh plan for the given position and danger level, cache
    /// it, and return it.
    ///
    /// Always returns a (possibly empty) plan; never fails.
    pub fn plan_route(&mut self, hero_position: MapPoint, danger_level: f64) -> &RoutePlan {
        self.hero_position = hero_position;
        let plan = RoutePlan::new(rank_spots(hero_position, danger_level, &self.catalog));

        if plan.is_empty() {
            warn!(danger_level, "no safe farming spot for current danger");
        } else {
            let top: Vec<&str> = plan
                .iter()
                .take(3)
                .map(|r| r.spot.name.as_str())
                .collect();
            info!(spot_count = plan.len(), top = ?top, "farm route computed");
        }

        self.last_plan.insert(plan)
    }

    /// The best-next recommendation from the cached plan.
    ///
    /// Returns `None` when no plan has been computed yet, or when the
    /// cached plan is empty ("no route" -- the caller displays nothing).
    pub fn next_spot(&self) -> Option<Recommendation> {
        self.last_plan
            .as_ref()
            .and_then(|plan| selector::next_spot(plan, self.hero_position))
    }

    /// The cached plan from the most recent planning call, if any.
    pub const fn last_plan(&self) -> Option<&RoutePlan> {
        self.last_plan.as_ref()
    }
}
