use super::inputs::CalculatorInputs;
use super::policy::{fraction, WaterfallPolicy};
use serde::Serialize;

const DOLLARS_PER_MILLION: f64 = 1_000_000.0;

/// Every node of the dispute waterfall, in dollars unless noted.
///
/// Recomputed from scratch on each input change; nothing here is stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueBreakdown {
    pub disputed_dollars: f64,
    pub denied_amount: f64,
    pub approved_amount: f64,
    pub merchant_liable_amount: f64,
    pub bank_liable_amount: f64,
    pub chargeback_success_amount: f64,
    pub chargeback_failed_amount: f64,
    pub bank_recovered_amount: f64,
    pub bank_write_off_amount: f64,
    pub total_bank_loss: f64,
    /// Whole-number percentage in `[0, policy.max_time_reduction_pct]`.
    pub time_reduction_percent: f64,
    pub operational_efficiency: f64,
    pub fraud_loss_prevention: f64,
    pub total_value: f64,
}

impl ValueBreakdown {
    pub fn compute(inputs: &CalculatorInputs, policy: &WaterfallPolicy) -> Self {
        let disputed_dollars = inputs.annual_disputed_dollars * DOLLARS_PER_MILLION;

        let denial = fraction(policy.denial_rate_pct);
        let denied_amount = disputed_dollars * denial;
        let approved_amount = disputed_dollars * (1.0 - denial);

        let merchant = fraction(policy.merchant_liable_rate_pct);
        let merchant_liable_amount = approved_amount * merchant;
        let bank_liable_amount = approved_amount * (1.0 - merchant);

        let chargeback = fraction(policy.chargeback_success_rate_pct);
        let chargeback_success_amount = merchant_liable_amount * chargeback;
        let chargeback_failed_amount = merchant_liable_amount * (1.0 - chargeback);

        let recovery = fraction(inputs.current_recovery_rate);
        let bank_recovered_amount = bank_liable_amount * recovery;
        let bank_write_off_amount = bank_liable_amount * (1.0 - recovery);

        let total_bank_loss = chargeback_failed_amount + bank_write_off_amount;

        let time_reduction_percent = time_reduction_percent(
            inputs.current_time_per_claim,
            policy.target_time_per_claim_minutes,
            policy.max_time_reduction_pct,
        );
        let operational_efficiency = inputs.current_operational_cost
            * DOLLARS_PER_MILLION
            * fraction(time_reduction_percent);

        let fraud_loss_prevention =
            total_bank_loss * fraction(policy.fraud_prevention_improvement_pct);

        Self {
            disputed_dollars,
            denied_amount,
            approved_amount,
            merchant_liable_amount,
            bank_liable_amount,
            chargeback_success_amount,
            chargeback_failed_amount,
            bank_recovered_amount,
            bank_write_off_amount,
            total_bank_loss,
            time_reduction_percent,
            operational_efficiency,
            fraud_loss_prevention,
            total_value: operational_efficiency + fraud_loss_prevention,
        }
    }

    pub fn monthly_value(&self) -> f64 {
        self.total_value / 12.0
    }

    /// Monetary nodes only; the time reduction percentage is excluded.
    pub fn monetary_amounts(&self) -> [(&'static str, f64); 13] {
        [
            ("disputed_dollars", self.disputed_dollars),
            ("denied_amount", self.denied_amount),
            ("approved_amount", self.approved_amount),
            ("merchant_liable_amount", self.merchant_liable_amount),
            ("bank_liable_amount", self.bank_liable_amount),
            ("chargeback_success_amount", self.chargeback_success_amount),
            ("chargeback_failed_amount", self.chargeback_failed_amount),
            ("bank_recovered_amount", self.bank_recovered_amount),
            ("bank_write_off_amount", self.bank_write_off_amount),
            ("total_bank_loss", self.total_bank_loss),
            ("operational_efficiency", self.operational_efficiency),
            ("fraud_loss_prevention", self.fraud_loss_prevention),
            ("total_value", self.total_value),
        ]
    }
}

fn time_reduction_percent(current_minutes: f64, target_minutes: f64, ceiling: f64) -> f64 {
    let raw = ((current_minutes - target_minutes) / current_minutes * 100.0).round();
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, ceiling)
}
