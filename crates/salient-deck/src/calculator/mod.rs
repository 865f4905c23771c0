//! Business value calculator behind the deck's calculator slide.
//!
//! The waterfall is a pure function of [`CalculatorInputs`] and a
//! [`WaterfallPolicy`]; formatting lives in [`format`] and [`views`] and never
//! feeds back into the numbers.

pub mod format;
mod inputs;
mod policy;
mod stepper;
pub mod views;
mod waterfall;

pub use format::{format_currency, format_percent};
pub use inputs::{CalculatorInputs, InputField, InputSpec};
pub use policy::WaterfallPolicy;
pub use views::CalculatorView;
pub use waterfall::ValueBreakdown;
