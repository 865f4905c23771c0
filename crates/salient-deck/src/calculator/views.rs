use super::format::{format_currency, format_input, format_percent};
use super::inputs::{CalculatorInputs, InputField};
use super::policy::WaterfallPolicy;
use super::waterfall::ValueBreakdown;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InputFieldView {
    pub field: InputField,
    pub label: &'static str,
    pub description: &'static str,
    pub value: f64,
    pub display: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub out_of_range: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowRow {
    pub key: &'static str,
    pub label: &'static str,
    /// Nesting level in the waterfall; the disputed total sits at 0.
    pub depth: u8,
    pub amount: f64,
    pub amount_label: String,
    /// Rate applied to the parent node, as a whole percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_of_parent: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisputeFlowPanel {
    pub rows: Vec<FlowRow>,
    pub total_bank_loss: f64,
    pub total_bank_loss_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyPanel {
    pub current_operational_cost: f64,
    pub current_operational_cost_label: String,
    pub current_time_per_claim: String,
    pub target_time_per_claim: String,
    pub time_reduction_label: String,
    pub operational_efficiency_label: String,
    pub fraud_loss_prevention_label: String,
}

/// Display model for the business calculator slide.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorView {
    pub inputs: Vec<InputFieldView>,
    pub dispute_flow: DisputeFlowPanel,
    pub efficiency: EfficiencyPanel,
    pub total_value: f64,
    pub total_value_label: String,
    pub monthly_value: f64,
    pub monthly_value_label: String,
}

impl CalculatorView {
    pub fn build(
        inputs: &CalculatorInputs,
        policy: &WaterfallPolicy,
        breakdown: &ValueBreakdown,
    ) -> Self {
        let input_views = InputField::ordered()
            .into_iter()
            .map(|field| {
                let spec = field.spec();
                let value = inputs.get(field);
                InputFieldView {
                    field,
                    label: spec.label,
                    description: spec.description,
                    value,
                    display: format_input(spec.prefix, value, spec.suffix),
                    min: spec.min,
                    max: spec.max,
                    step: spec.step,
                    out_of_range: !spec.contains(value),
                }
            })
            .collect();

        let recovery = inputs.current_recovery_rate;
        let rows = vec![
            row("disputed_dollars", "Disputed Dollars", 0, breakdown.disputed_dollars, None),
            row(
                "denied_amount",
                "Denied Claims",
                1,
                breakdown.denied_amount,
                Some(policy.denial_rate_pct),
            ),
            row(
                "approved_amount",
                "Approved Claims",
                1,
                breakdown.approved_amount,
                Some(100.0 - policy.denial_rate_pct),
            ),
            row(
                "merchant_liable_amount",
                "Merchant Liable",
                2,
                breakdown.merchant_liable_amount,
                Some(policy.merchant_liable_rate_pct),
            ),
            row(
                "chargeback_success_amount",
                "Chargeback Recovered",
                3,
                breakdown.chargeback_success_amount,
                Some(policy.chargeback_success_rate_pct),
            ),
            row(
                "chargeback_failed_amount",
                "Chargeback Failed",
                3,
                breakdown.chargeback_failed_amount,
                Some(100.0 - policy.chargeback_success_rate_pct),
            ),
            row(
                "bank_liable_amount",
                "Bank Liable",
                2,
                breakdown.bank_liable_amount,
                Some(100.0 - policy.merchant_liable_rate_pct),
            ),
            row(
                "bank_recovered_amount",
                "Bank Recovered",
                3,
                breakdown.bank_recovered_amount,
                Some(recovery),
            ),
            row(
                "bank_write_off_amount",
                "Bank Write-Off",
                3,
                breakdown.bank_write_off_amount,
                Some(100.0 - recovery),
            ),
        ];

        let time_spec = InputField::CurrentTimePerClaim.spec();
        let efficiency = EfficiencyPanel {
            current_operational_cost: inputs.current_operational_cost * 1_000_000.0,
            current_operational_cost_label: format_currency(
                inputs.current_operational_cost * 1_000_000.0,
            ),
            current_time_per_claim: format_input(
                time_spec.prefix,
                inputs.current_time_per_claim,
                time_spec.suffix,
            ),
            target_time_per_claim: format_input(
                time_spec.prefix,
                policy.target_time_per_claim_minutes,
                time_spec.suffix,
            ),
            time_reduction_label: format_percent(breakdown.time_reduction_percent),
            operational_efficiency_label: format_currency(breakdown.operational_efficiency),
            fraud_loss_prevention_label: format_currency(breakdown.fraud_loss_prevention),
        };

        Self {
            inputs: input_views,
            dispute_flow: DisputeFlowPanel {
                rows,
                total_bank_loss: breakdown.total_bank_loss,
                total_bank_loss_label: format_currency(breakdown.total_bank_loss),
            },
            efficiency,
            total_value: breakdown.total_value,
            total_value_label: format_currency(breakdown.total_value),
            monthly_value: breakdown.monthly_value(),
            monthly_value_label: format_currency(breakdown.monthly_value()),
        }
    }
}

fn row(
    key: &'static str,
    label: &'static str,
    depth: u8,
    amount: f64,
    share_pct: Option<f64>,
) -> FlowRow {
    FlowRow {
        key,
        label,
        depth,
        amount,
        amount_label: format_currency(amount),
        share_of_parent: share_pct.map(format_percent),
    }
}
