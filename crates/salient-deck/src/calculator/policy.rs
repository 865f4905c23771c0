use serde::{Deserialize, Serialize};

/// Fixed assumptions applied by the waterfall. Rates are percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterfallPolicy {
    pub denial_rate_pct: f64,
    pub merchant_liable_rate_pct: f64,
    pub chargeback_success_rate_pct: f64,
    pub fraud_prevention_improvement_pct: f64,
    pub target_time_per_claim_minutes: f64,
    /// Upper bound on the reported handling-time reduction.
    pub max_time_reduction_pct: f64,
}

impl Default for WaterfallPolicy {
    fn default() -> Self {
        Self {
            denial_rate_pct: 4.0,
            merchant_liable_rate_pct: 70.0,
            chargeback_success_rate_pct: 99.0,
            fraud_prevention_improvement_pct: 4.0,
            target_time_per_claim_minutes: 6.0,
            max_time_reduction_pct: 95.0,
        }
    }
}

pub(crate) fn fraction(pct: f64) -> f64 {
    pct / 100.0
}
