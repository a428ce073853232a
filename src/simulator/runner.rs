//! The simulation loop: jump-to-next-purchase execution of one strategy.

use super::config::SimConfig;
use super::report::{SimReport, StrategyOutcome};
use crate::shop::Shop;
use crate::state::GameState;
use crate::strategy::{Snapshot, Strategy};

/// Run one game to `duration` seconds under `strategy`.
///
/// The shop is cloned up front, so price escalation in this run never leaks
/// into the caller's shop and identical inputs produce identical final
/// states. Each iteration asks the strategy for an item, waits exactly long
/// enough to afford it, and buys it; the run ends when the strategy declines,
/// proposes something unpayable before the horizon, or proposes an item the
/// shop does not stock.
pub fn simulate(shop: &Shop, duration: f64, strategy: &impl Strategy) -> GameState {
    let mut state = GameState::new();
    let mut shop = shop.clone();

    while state.elapsed() <= duration {
        let snapshot = Snapshot {
            cookies: state.cookies(),
            cps: state.cps(),
            history: state.history(),
            time_left: duration - state.elapsed(),
        };

        let Some(item) = strategy.choose(&snapshot, &shop) else {
            break;
        };
        let (Some(cost), Some(cps_gain)) = (shop.cost(&item), shop.cps_gain(&item)) else {
            // Unstocked item: end the run rather than panic.
            break;
        };

        let wait = state.time_until(cost);
        if wait > snapshot.time_left {
            break;
        }

        state.advance(wait);
        state.buy(&item, cost, cps_gain);
        shop.record_purchase(&item);
    }

    // Fast-forward through the tail where nothing more is bought, so every
    // run ends at exactly the requested horizon.
    state.advance(duration - state.elapsed());
    state
}

/// Run every strategy selected by `config` against the same shop and collect
/// the outcomes into a report.
pub fn run_simulation(shop: &Shop, config: &SimConfig) -> SimReport {
    let mut outcomes = Vec::with_capacity(config.strategies.len());

    for kind in &config.strategies {
        let state = simulate(shop, config.duration, &kind.strategy());

        if config.verbosity >= 2 {
            println!(
                "{}: {} purchases, final CPS {:.1}, lifetime cookies {:.4e}",
                kind.name(),
                state.purchases(),
                state.cps(),
                state.lifetime_cookies()
            );
        }

        outcomes.push(StrategyOutcome::from_state(kind.name(), &state));
    }

    SimReport::from_outcomes(outcomes, config.duration)
}
