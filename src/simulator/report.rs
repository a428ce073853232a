//! Per-strategy outcomes and the comparison report.

use crate::state::{GameState, PurchaseRecord};
use serde::Serialize;

/// Final numbers for one strategy's run.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyOutcome {
    pub strategy: String,
    pub purchases: usize,
    pub final_cookies: f64,
    pub lifetime_cookies: f64,
    pub final_cps: f64,
    pub elapsed: f64,
    /// Full purchase timeline, sentinel first.
    pub history: Vec<PurchaseRecord>,
}

impl StrategyOutcome {
    /// Capture a finished run under the given strategy name.
    pub fn from_state(strategy: &str, state: &GameState) -> Self {
        Self {
            strategy: strategy.to_string(),
            purchases: state.purchases(),
            final_cookies: state.cookies(),
            lifetime_cookies: state.lifetime_cookies(),
            final_cps: state.cps(),
            elapsed: state.elapsed(),
            history: state.history(),
        }
    }
}

/// Aggregated outcomes of strategies run against the same shop and horizon.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub duration: f64,
    pub outcomes: Vec<StrategyOutcome>,
}

impl SimReport {
    pub fn from_outcomes(outcomes: Vec<StrategyOutcome>, duration: f64) -> Self {
        Self { duration, outcomes }
    }

    /// The outcome with the most lifetime cookies, if any strategies ran.
    pub fn best(&self) -> Option<&StrategyOutcome> {
        let mut best: Option<&StrategyOutcome> = None;
        for outcome in &self.outcomes {
            match best {
                Some(current) if outcome.lifetime_cookies <= current.lifetime_cookies => {}
                _ => best = Some(outcome),
            }
        }
        best
    }

    /// Generate the text comparison report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    STRATEGY COMPARISON\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Horizon: {} seconds\n\n", fmt_cookies(self.duration)));

        report.push_str("  Strategy     Purchases    Final CPS      Lifetime Cookies\n");
        report.push_str("  ────────     ─────────    ─────────      ────────────────\n");
        for outcome in &self.outcomes {
            report.push_str(&format!(
                "  {:<12} {:>9}    {:>9}      {:>16}\n",
                outcome.strategy,
                outcome.purchases,
                fmt_cookies(outcome.final_cps),
                fmt_cookies(outcome.lifetime_cookies)
            ));
        }
        report.push('\n');

        if let Some(best) = self.best() {
            report.push_str(&format!(
                "Best by lifetime cookies: {} ({})\n",
                best.strategy,
                fmt_cookies(best.lifetime_cookies)
            ));
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Per-strategy purchase timelines (verbose mode).
    pub fn timeline_text(&self) -> String {
        let mut report = String::new();

        for outcome in &self.outcomes {
            report.push_str(&format!(
                "── {} ({} purchases) ──────────────────────────────────\n",
                outcome.strategy, outcome.purchases
            ));
            // Skip the sentinel record.
            for record in outcome.history.iter().skip(1) {
                let item = record.item.as_deref().unwrap_or("-");
                report.push_str(&format!(
                    "  t={:<14} {:<22} cost {}\n",
                    fmt_cookies(record.time),
                    item,
                    fmt_cookies(record.cost)
                ));
            }
            if outcome.purchases == 0 {
                report.push_str("  (no purchases)\n");
            }
            report.push('\n');
        }

        report
    }

    /// JSON rendering for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Compact cookie/second formatting: plain below ten million, scientific
/// above, so late-game totals stay readable.
fn fmt_cookies(value: f64) -> String {
    if value.abs() < 10_000_000.0 {
        if value.fract() == 0.0 {
            format!("{}", value as i64)
        } else {
            format!("{:.2}", value)
        }
    } else {
        format!("{:.4e}", value)
    }
}
