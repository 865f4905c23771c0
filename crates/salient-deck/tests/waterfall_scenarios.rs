use salient_deck::calculator::{
    format_currency, CalculatorInputs, InputField, ValueBreakdown, WaterfallPolicy,
};

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

fn compute(inputs: CalculatorInputs) -> ValueBreakdown {
    ValueBreakdown::compute(&inputs, &WaterfallPolicy::default())
}

/// Sweeps every field across its bounds in coarse steps.
fn input_grid() -> Vec<CalculatorInputs> {
    let mut grid = Vec::new();
    for disputed in [1.0, 7.0, 60.0, 250.0, 500.0] {
        for cost in [0.1, 2.5, 4.0, 50.0] {
            for recovery in [50.0, 75.0, 81.0, 99.0] {
                for minutes in [5.0, 6.0, 7.0, 30.0, 119.0, 120.0] {
                    grid.push(CalculatorInputs {
                        annual_disputed_dollars: disputed,
                        current_operational_cost: cost,
                        current_recovery_rate: recovery,
                        current_time_per_claim: minutes,
                    });
                }
            }
        }
    }
    grid
}

#[test]
fn default_inputs_produce_documented_waterfall() {
    let breakdown = compute(CalculatorInputs::default());

    assert_close(breakdown.disputed_dollars, 60_000_000.0);
    assert_close(breakdown.denied_amount, 2_400_000.0);
    assert_close(breakdown.approved_amount, 57_600_000.0);
    assert_close(breakdown.merchant_liable_amount, 40_320_000.0);
    assert_close(breakdown.bank_liable_amount, 17_280_000.0);
    assert_close(breakdown.chargeback_success_amount, 39_916_800.0);
    assert_close(breakdown.chargeback_failed_amount, 403_200.0);
    assert_close(breakdown.bank_recovered_amount, 13_996_800.0);
    assert_close(breakdown.bank_write_off_amount, 3_283_200.0);
    assert_close(breakdown.total_bank_loss, 3_686_400.0);
    assert_eq!(breakdown.time_reduction_percent, 80.0);
    assert_close(breakdown.operational_efficiency, 3_200_000.0);
    assert_close(breakdown.fraud_loss_prevention, 147_456.0);
    assert_close(breakdown.total_value, 3_347_456.0);
    assert_eq!(format_currency(breakdown.total_value), "$3.3M");
}

#[test]
fn waterfall_splits_conserve_their_parent() {
    for inputs in input_grid() {
        let b = compute(inputs);
        assert_close(b.denied_amount + b.approved_amount, b.disputed_dollars);
        assert_close(
            b.merchant_liable_amount + b.bank_liable_amount,
            b.approved_amount,
        );
        assert_close(
            b.chargeback_success_amount + b.chargeback_failed_amount,
            b.merchant_liable_amount,
        );
        assert_close(
            b.bank_recovered_amount + b.bank_write_off_amount,
            b.bank_liable_amount,
        );
        assert_close(
            b.total_bank_loss,
            b.chargeback_failed_amount + b.bank_write_off_amount,
        );
        assert_close(
            b.total_value,
            b.operational_efficiency + b.fraud_loss_prevention,
        );
    }
}

#[test]
fn time_reduction_stays_within_bounds_for_every_handling_time() {
    let base = CalculatorInputs::default();
    for minutes in 5..=120 {
        let b = compute(base.with(InputField::CurrentTimePerClaim, minutes as f64));
        assert!(
            (0.0..=95.0).contains(&b.time_reduction_percent),
            "{minutes} min gave {}",
            b.time_reduction_percent
        );
        assert_eq!(b.time_reduction_percent, b.time_reduction_percent.round());
    }

    let fast = compute(base.with(InputField::CurrentTimePerClaim, 5.0));
    assert_eq!(fast.time_reduction_percent, 0.0);
    assert_eq!(fast.operational_efficiency, 0.0);
}

#[test]
fn higher_recovery_rate_shifts_dollars_from_write_off_to_recovered() {
    let base = CalculatorInputs::default();
    let mut previous = compute(base.with(InputField::CurrentRecoveryRate, 50.0));
    for rate in 51..=99 {
        let current = compute(base.with(InputField::CurrentRecoveryRate, rate as f64));
        assert!(current.bank_write_off_amount < previous.bank_write_off_amount);
        assert!(current.bank_recovered_amount > previous.bank_recovered_amount);
        previous = current;
    }
}

#[test]
fn monetary_outputs_are_non_negative_in_bounds() {
    for inputs in input_grid() {
        let b = compute(inputs);
        for (name, amount) in b.monetary_amounts() {
            assert!(amount >= 0.0, "{name} was {amount} for {inputs:?}");
        }
    }
}

#[test]
fn computation_is_deterministic() {
    let inputs = CalculatorInputs {
        annual_disputed_dollars: 137.0,
        current_operational_cost: 12.3,
        current_recovery_rate: 64.0,
        current_time_per_claim: 42.0,
    };
    assert_eq!(compute(inputs), compute(inputs));
}
