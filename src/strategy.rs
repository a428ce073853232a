//! Purchase strategies: the decision contract and the reference set.
//!
//! A strategy only reads the snapshot and shop it is given; the simulation
//! loop owns all mutation. Strategies may propose items they cannot pay for
//! in the remaining time; the loop's feasibility check is the backstop, so
//! even a deliberately broken strategy cannot stall or overrun a run.

use crate::shop::Shop;
use crate::state::PurchaseRecord;

/// Read-only view of the run handed to a strategy at each decision point.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Cookies available to spend right now.
    pub cookies: f64,
    /// Current production rate.
    pub cps: f64,
    /// Copy of the purchase history so far.
    pub history: Vec<PurchaseRecord>,
    /// Seconds left before the simulation horizon.
    pub time_left: f64,
}

/// A purchase decision function.
///
/// Returns the name of the item to buy next, or `None` to stop buying for
/// the rest of the run. Any `Fn(&Snapshot, &Shop) -> Option<String>`
/// qualifies, so the reference strategies below are plain functions and
/// one-off strategies can be closures.
pub trait Strategy {
    fn choose(&self, snapshot: &Snapshot, shop: &Shop) -> Option<String>;
}

impl<F> Strategy for F
where
    F: Fn(&Snapshot, &Shop) -> Option<String>,
{
    fn choose(&self, snapshot: &Snapshot, shop: &Shop) -> Option<String> {
        self(snapshot, shop)
    }
}

/// Never buys anything. Exercises the loop's give-up path.
pub fn strategy_none(_snapshot: &Snapshot, _shop: &Shop) -> Option<String> {
    None
}

/// Cheapest item reachable before the horizon.
///
/// `None` once even the cheapest item cannot be paid for in the time left.
pub fn strategy_cheap(snapshot: &Snapshot, shop: &Shop) -> Option<String> {
    let budget = snapshot.cookies + snapshot.cps * snapshot.time_left;
    let mut choice = None;
    let mut cheapest = f64::INFINITY;
    for item in shop.entries() {
        if item.cost <= budget && item.cost < cheapest {
            cheapest = item.cost;
            choice = Some(item.name.clone());
        }
    }
    choice
}

/// Most expensive item reachable before the horizon.
///
/// `None` once nothing can be paid for in the time left.
pub fn strategy_expensive(snapshot: &Snapshot, shop: &Shop) -> Option<String> {
    let budget = snapshot.cookies + snapshot.cps * snapshot.time_left;
    let mut choice = None;
    let mut priciest = 0.0;
    for item in shop.entries() {
        if item.cost <= budget && item.cost > priciest {
            priciest = item.cost;
            choice = Some(item.name.clone());
        }
    }
    choice
}

/// Greedy marginal efficiency: the item with the best CPS-per-cookie ratio.
///
/// Ignores the horizon entirely, so its proposal may be unaffordable in the
/// time left; the loop ends the run when that happens. Ties keep the first
/// item in shop order (a consequence of the strict `>` scan, not a policy).
pub fn strategy_best_ratio(_snapshot: &Snapshot, shop: &Shop) -> Option<String> {
    let mut choice = None;
    let mut best = 0.0;
    for item in shop.entries() {
        let ratio = item.cps_gain / item.cost;
        if ratio > best {
            best = ratio;
            choice = Some(item.name.clone());
        }
    }
    choice
}

/// A strategy that stubbornly proposes the same item forever, affordable or
/// not. Exists to prove the loop, not the strategy, enforces feasibility.
pub fn always(item: &str) -> impl Strategy {
    let item = item.to_string();
    move |_snapshot: &Snapshot, _shop: &Shop| Some(item.clone())
}

/// The runnable reference strategies, as a driver-facing selection surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    None,
    Cheap,
    Expensive,
    BestRatio,
}

impl StrategyKind {
    /// All reference strategies, in report order.
    pub fn all() -> [StrategyKind; 4] {
        [
            StrategyKind::None,
            StrategyKind::Cheap,
            StrategyKind::Expensive,
            StrategyKind::BestRatio,
        ]
    }

    /// Display name used in reports and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::None => "none",
            StrategyKind::Cheap => "cheap",
            StrategyKind::Expensive => "expensive",
            StrategyKind::BestRatio => "best-ratio",
        }
    }

    /// Parse a command-line strategy name.
    pub fn parse(name: &str) -> Option<StrategyKind> {
        match name {
            "none" => Some(StrategyKind::None),
            "cheap" => Some(StrategyKind::Cheap),
            "expensive" => Some(StrategyKind::Expensive),
            "best" | "best-ratio" => Some(StrategyKind::BestRatio),
            _ => None,
        }
    }

    /// The decision function this kind names.
    pub fn strategy(self) -> fn(&Snapshot, &Shop) -> Option<String> {
        match self {
            StrategyKind::None => strategy_none,
            StrategyKind::Cheap => strategy_cheap,
            StrategyKind::Expensive => strategy_expensive,
            StrategyKind::BestRatio => strategy_best_ratio,
        }
    }
}
