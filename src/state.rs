//! Core game state for a single simulation run.
//!
//! Tracks elapsed time, the spendable and lifetime cookie totals, the
//! current CPS, and the append-only purchase history. Only two operations
//! mutate a state: [`GameState::advance`] and [`GameState::buy`].

use serde::{Deserialize, Serialize};

/// One entry in the purchase history.
///
/// Every state starts with the sentinel entry `(0.0, None, 0.0, 0.0)`;
/// each later entry records an executed purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Game time at which the purchase happened.
    pub time: f64,
    /// Item bought (`None` only for the start-of-game sentinel).
    pub item: Option<String>,
    /// Price paid.
    pub cost: f64,
    /// Lifetime cookies banked at the moment of purchase. Spending deducts
    /// from the current balance only, so this total never shrinks.
    pub lifetime_cookies: f64,
}

impl PurchaseRecord {
    /// The start-of-game marker.
    pub fn sentinel() -> Self {
        Self {
            time: 0.0,
            item: None,
            cost: 0.0,
            lifetime_cookies: 0.0,
        }
    }
}

/// Mutable state of one clicker run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    elapsed: f64,
    cookies: f64,
    lifetime_cookies: f64,
    cps: f64,
    history: Vec<PurchaseRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh start-of-game state: zero cookies, 1.0 CPS, sentinel history.
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            cookies: 0.0,
            lifetime_cookies: 0.0,
            cps: 1.0,
            history: vec![PurchaseRecord::sentinel()],
        }
    }

    /// Cookies currently available to spend.
    pub fn cookies(&self) -> f64 {
        self.cookies
    }

    /// Cookies ever produced, regardless of spending.
    pub fn lifetime_cookies(&self) -> f64 {
        self.lifetime_cookies
    }

    /// Current production rate in cookies per second.
    pub fn cps(&self) -> f64 {
        self.cps
    }

    /// Game time elapsed so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Purchase history, oldest first.
    ///
    /// Returns a copy; the internal list is append-only and never handed out
    /// mutably.
    pub fn history(&self) -> Vec<PurchaseRecord> {
        self.history.clone()
    }

    /// Number of executed purchases (history minus the sentinel).
    pub fn purchases(&self) -> usize {
        self.history.len() - 1
    }

    /// Whole seconds until `target` cookies are banked at the current CPS.
    ///
    /// Zero if the balance already covers the target. Waiting happens in
    /// whole-second ticks, so partial seconds round up.
    pub fn time_until(&self, target: f64) -> f64 {
        if self.cookies >= target {
            return 0.0;
        }
        ((target - self.cookies) / self.cps).ceil()
    }

    /// Let `duration` seconds pass, banking `duration * cps` cookies.
    ///
    /// Zero or negative durations change nothing.
    pub fn advance(&mut self, duration: f64) {
        if duration > 0.0 {
            self.cookies += duration * self.cps;
            self.lifetime_cookies += duration * self.cps;
            self.elapsed += duration;
        }
    }

    /// Spend `cost` cookies on `item`, gaining `cps_gain` CPS and recording
    /// the purchase.
    ///
    /// An unaffordable call changes nothing. The simulation loop never issues
    /// one, but the guard keeps the invariants safe against direct callers.
    pub fn buy(&mut self, item: &str, cost: f64, cps_gain: f64) {
        if cost > self.cookies {
            return;
        }
        self.cookies -= cost;
        self.cps += cps_gain;
        self.history.push(PurchaseRecord {
            time: self.elapsed,
            item: Some(item.to_string()),
            cost,
            lifetime_cookies: self.lifetime_cookies,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_sentinel_history() {
        let state = GameState::new();

        assert_eq!(state.elapsed(), 0.0);
        assert_eq!(state.cookies(), 0.0);
        assert_eq!(state.lifetime_cookies(), 0.0);
        assert_eq!(state.cps(), 1.0);
        assert_eq!(state.history(), vec![PurchaseRecord::sentinel()]);
        assert_eq!(state.purchases(), 0);
    }

    #[test]
    fn test_time_until_zero_when_already_met() {
        let mut state = GameState::new();
        state.advance(10.0);

        assert_eq!(state.time_until(10.0), 0.0);
        assert_eq!(state.time_until(3.5), 0.0);
        assert_eq!(state.time_until(0.0), 0.0);
    }

    #[test]
    fn test_time_until_rounds_up_to_whole_seconds() {
        let state = GameState::new();

        // 1.0 CPS from a standing start
        assert_eq!(state.time_until(1.0), 1.0);
        assert_eq!(state.time_until(1.5), 2.0);
        assert_eq!(state.time_until(100.0), 100.0);
    }

    #[test]
    fn test_time_until_is_minimal_and_integral() {
        let mut state = GameState::new();
        state.buy("Booster", 0.0, 2.0); // 3.0 CPS
        state.advance(1.0); // 3 cookies banked

        for target in [4.0, 5.5, 7.0, 100.0, 12345.678] {
            let wait = state.time_until(target);
            assert_eq!(wait.fract(), 0.0, "wait must be whole seconds");
            // Waiting that long reaches the target...
            assert!(state.cookies() + wait * state.cps() >= target);
            // ...and one second less does not.
            assert!(state.cookies() + (wait - 1.0) * state.cps() < target);
        }
    }

    #[test]
    fn test_advance_ignores_zero_and_negative_durations() {
        let mut state = GameState::new();
        state.advance(5.0);
        let before = state.clone();

        state.advance(0.0);
        assert_eq!(state, before);

        state.advance(-3.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_advance_banks_duration_times_cps() {
        let mut state = GameState::new();
        state.buy("Booster", 0.0, 1.5); // 2.5 CPS

        state.advance(4.0);

        assert_eq!(state.elapsed(), 4.0);
        assert_eq!(state.cookies(), 10.0);
        assert_eq!(state.lifetime_cookies(), 10.0);
    }

    #[test]
    fn test_buy_unaffordable_is_a_no_op() {
        let mut state = GameState::new();
        state.advance(10.0);
        let before = state.clone();

        state.buy("Grandma", 100.0, 0.5);

        assert_eq!(state, before);
    }

    #[test]
    fn test_buy_deducts_cost_and_raises_cps() {
        let mut state = GameState::new();
        state.advance(20.0);

        state.buy("Cursor", 15.0, 0.1);

        assert_eq!(state.cookies(), 5.0);
        assert_eq!(state.cps(), 1.1);
        // Lifetime total is untouched by the spend.
        assert_eq!(state.lifetime_cookies(), 20.0);
        assert_eq!(state.elapsed(), 20.0);
    }

    #[test]
    fn test_buy_appends_one_record_with_undeducted_lifetime() {
        let mut state = GameState::new();
        state.advance(20.0);

        state.buy("Cursor", 15.0, 0.1);

        let history = state.history();
        assert_eq!(history.len(), 2);
        let record = &history[1];
        assert_eq!(record.time, 20.0);
        assert_eq!(record.item.as_deref(), Some("Cursor"));
        assert_eq!(record.cost, 15.0);
        assert_eq!(record.lifetime_cookies, 20.0);
    }

    #[test]
    fn test_exact_balance_purchase_succeeds() {
        let mut state = GameState::new();
        state.advance(15.0);

        state.buy("Cursor", 15.0, 0.1);

        assert_eq!(state.cookies(), 0.0);
        assert_eq!(state.purchases(), 1);
    }

    #[test]
    fn test_history_copy_is_defensive() {
        let mut state = GameState::new();
        state.advance(20.0);
        state.buy("Cursor", 15.0, 0.1);

        let mut copy = state.history();
        copy.clear();

        assert_eq!(state.history().len(), 2);
    }
}
