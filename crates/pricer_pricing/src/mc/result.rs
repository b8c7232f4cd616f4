//! Simulation output.

use pricer_models::analytical::Greeks;

/// Risk/reward summary of one simulated strategy.
///
/// `entry_cost` is the signed premium paid (negative for a net credit).
/// `expected_value` is the mean strategy value at the horizon across all
/// paths, undiscounted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Name of the simulated strategy
    pub strategy_name: String,
    /// Σ premium × quantity at the current spot
    pub entry_cost: f64,
    /// Strategy value at the target spot and horizon
    pub projected_value: f64,
    /// (projected − entry) / |entry| × 100, zero for a costless entry
    pub profit_percent: f64,
    /// Fraction of paths whose P&L is strictly positive
    pub probability_of_profit: f64,
    /// Mean strategy value at the horizon
    pub expected_value: f64,
    /// Quantity-weighted Greeks at entry (premium included)
    pub net_greeks: Greeks<f64>,
    /// Number of simulated paths
    pub n_paths: usize,
    /// Horizon in years
    pub time_to_target: f64,
    /// Years left on the reference leg at the horizon
    pub time_remaining: f64,
}

impl SimulationResult {
    /// Horizon P&L at the target spot.
    #[inline]
    pub fn projected_pnl(&self) -> f64 {
        self.projected_value - self.entry_cost
    }

    /// Returns `true` when the entry is a net credit.
    #[inline]
    pub fn is_credit(&self) -> bool {
        self.entry_cost < 0.0
    }
}
