use serde::{Deserialize, Serialize};

/// The four user-adjustable values behind the business calculator slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    AnnualDisputedDollars,
    CurrentOperationalCost,
    CurrentRecoveryRate,
    CurrentTimePerClaim,
}

impl InputField {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::AnnualDisputedDollars,
            Self::CurrentOperationalCost,
            Self::CurrentRecoveryRate,
            Self::CurrentTimePerClaim,
        ]
    }

    pub const fn spec(self) -> InputSpec {
        match self {
            Self::AnnualDisputedDollars => InputSpec {
                label: "Annual Disputed Volume",
                description: "Total cardholder-disputed transaction volume per year",
                prefix: "$",
                suffix: "M",
                min: 1.0,
                max: 500.0,
                step: 1.0,
                default: 60.0,
            },
            Self::CurrentOperationalCost => InputSpec {
                label: "Current Operational Cost",
                description: "Annual spend on dispute operations staff and tooling",
                prefix: "$",
                suffix: "M",
                min: 0.1,
                max: 50.0,
                step: 0.1,
                default: 4.0,
            },
            Self::CurrentRecoveryRate => InputSpec {
                label: "Current Recovery Rate",
                description: "Share of bank-liable dollars recovered today",
                prefix: "",
                suffix: "%",
                min: 50.0,
                max: 99.0,
                step: 1.0,
                default: 81.0,
            },
            Self::CurrentTimePerClaim => InputSpec {
                label: "Avg. Handling Time",
                description: "Analyst minutes spent on a single claim",
                prefix: "",
                suffix: " min",
                min: 5.0,
                max: 120.0,
                step: 1.0,
                default: 30.0,
            },
        }
    }
}

/// Bounds, step and display metadata for one calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputSpec {
    pub label: &'static str,
    pub description: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Current calculator input record. Dollar figures are in millions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInputs {
    pub annual_disputed_dollars: f64,
    pub current_operational_cost: f64,
    pub current_recovery_rate: f64,
    pub current_time_per_claim: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            annual_disputed_dollars: InputField::AnnualDisputedDollars.spec().default,
            current_operational_cost: InputField::CurrentOperationalCost.spec().default,
            current_recovery_rate: InputField::CurrentRecoveryRate.spec().default,
            current_time_per_claim: InputField::CurrentTimePerClaim.spec().default,
        }
    }
}

impl CalculatorInputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::AnnualDisputedDollars => self.annual_disputed_dollars,
            InputField::CurrentOperationalCost => self.current_operational_cost,
            InputField::CurrentRecoveryRate => self.current_recovery_rate,
            InputField::CurrentTimePerClaim => self.current_time_per_claim,
        }
    }

    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::AnnualDisputedDollars => self.annual_disputed_dollars = value,
            InputField::CurrentOperationalCost => self.current_operational_cost = value,
            InputField::CurrentRecoveryRate => self.current_recovery_rate = value,
            InputField::CurrentTimePerClaim => self.current_time_per_claim = value,
        }
    }

    /// Returns a copy with `field` replaced, leaving `self` untouched.
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Fields whose stored value sits outside the declared bounds.
    ///
    /// Only direct text entry can produce these; the stepper always clamps.
    pub fn out_of_range(&self) -> Vec<InputField> {
        InputField::ordered()
            .into_iter()
            .filter(|field| !field.spec().contains(self.get(*field)))
            .collect()
    }
}
