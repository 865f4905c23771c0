use super::inputs::InputSpec;

impl InputSpec {
    /// Steps the value up by one increment, clamped to the field bounds.
    pub fn increment(&self, value: f64) -> f64 {
        self.round_to_step((value + self.step).clamp(self.min, self.max))
    }

    /// Steps the value down by one increment, clamped to the field bounds.
    pub fn decrement(&self, value: f64) -> f64 {
        self.round_to_step((value - self.step).clamp(self.min, self.max))
    }

    /// Interprets direct text entry. Unparseable or non-finite text becomes `0`.
    ///
    /// The result is deliberately left unclamped; callers surface out-of-range
    /// values through [`InputSpec::contains`].
    pub fn parse_entry(&self, raw: &str) -> f64 {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => 0.0,
        }
    }

    /// Decimal places implied by the step, e.g. `0.1` -> 1.
    pub fn step_precision(&self) -> u32 {
        let text = self.step.to_string();
        text.split_once('.')
            .map(|(_, fraction)| fraction.len() as u32)
            .unwrap_or(0)
    }

    /// Rounds half away from zero at the step precision.
    pub fn round_to_step(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.step_precision() as i32);
        (value * factor).round() / factor
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use crate::calculator::InputField;

    #[test]
    fn step_precision_follows_step_size() {
        assert_eq!(InputField::CurrentOperationalCost.spec().step_precision(), 1);
        assert_eq!(InputField::AnnualDisputedDollars.spec().step_precision(), 0);
        assert_eq!(InputField::CurrentRecoveryRate.spec().step_precision(), 0);
    }

    #[test]
    fn repeated_increments_do_not_drift() {
        let spec = InputField::CurrentOperationalCost.spec();
        let mut value = 4.0;
        for _ in 0..10 {
            value = spec.increment(value);
        }
        assert_eq!(value, 5.0);

        for _ in 0..3 {
            value = spec.decrement(value);
        }
        assert_eq!(value, 4.7);
    }

    #[test]
    fn stepper_clamps_at_bounds() {
        let recovery = InputField::CurrentRecoveryRate.spec();
        assert_eq!(recovery.increment(99.0), 99.0);

        let disputed = InputField::AnnualDisputedDollars.spec();
        assert_eq!(disputed.decrement(1.0), 1.0);

        let cost = InputField::CurrentOperationalCost.spec();
        assert_eq!(cost.decrement(0.1), 0.1);
        assert_eq!(cost.increment(49.95), 50.0);
    }

    #[test]
    fn stepper_pulls_out_of_range_entries_back_inside() {
        let time = InputField::CurrentTimePerClaim.spec();
        assert_eq!(time.increment(0.0), 5.0);
        assert_eq!(time.decrement(500.0), 120.0);
    }

    #[test]
    fn parse_entry_coerces_garbage_to_zero_without_clamping() {
        let spec = InputField::CurrentRecoveryRate.spec();
        assert_eq!(spec.parse_entry(" 87.5 "), 87.5);
        assert_eq!(spec.parse_entry("abc"), 0.0);
        assert_eq!(spec.parse_entry(""), 0.0);
        assert_eq!(spec.parse_entry("NaN"), 0.0);
        assert_eq!(spec.parse_entry("inf"), 0.0);
        assert_eq!(spec.parse_entry("250"), 250.0);
        assert!(!spec.contains(spec.parse_entry("250")));
    }
}
