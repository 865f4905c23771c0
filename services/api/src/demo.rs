use clap::Args;
use salient_deck::calculator::{CalculatorInputs, CalculatorView, InputField};
use salient_deck::deck::{Deck, DeckAction, DeckSession};
use salient_deck::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct CalculatorArgs {
    /// Annual disputed volume in millions of dollars
    #[arg(long)]
    pub(crate) disputed: Option<f64>,
    /// Current annual operational cost in millions of dollars
    #[arg(long)]
    pub(crate) operational_cost: Option<f64>,
    /// Current recovery rate on bank-liable disputes, in percent
    #[arg(long)]
    pub(crate) recovery_rate: Option<f64>,
    /// Current average handling time per claim, in minutes
    #[arg(long)]
    pub(crate) time_per_claim: Option<f64>,
    /// Emit the breakdown and view as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PlayArgs {
    /// Slide index to start from
    #[arg(long, default_value_t = 0)]
    pub(crate) start: usize,
    /// Actions: next, prev, jump:<n>, inc:<field>, dec:<field>, set:<field>=<value>
    #[arg(value_parser = crate::infra::parse_action)]
    pub(crate) actions: Vec<DeckAction>,
    /// Emit the resulting session and snapshot as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_calculator(args: CalculatorArgs) -> Result<(), AppError> {
    let CalculatorArgs {
        disputed,
        operational_cost,
        recovery_rate,
        time_per_claim,
        json,
    } = args;

    let mut inputs = CalculatorInputs::default();
    let overrides = [
        (InputField::AnnualDisputedDollars, disputed),
        (InputField::CurrentOperationalCost, operational_cost),
        (InputField::CurrentRecoveryRate, recovery_rate),
        (InputField::CurrentTimePerClaim, time_per_claim),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            inputs.set(field, value);
        }
    }

    let deck = Deck::standard();
    let breakdown = deck.breakdown(&inputs);
    let view = CalculatorView::build(&inputs, deck.policy(), &breakdown);

    if json {
        let payload = serde_json::json!({ "inputs": inputs, "breakdown": breakdown, "view": view });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        render_calculator(&view);
    }

    Ok(())
}

pub(crate) fn run_deck_list() -> Result<(), AppError> {
    let deck = Deck::standard();
    println!("Salient deck ({} slides)", deck.len());
    for (index, slide) in deck.slides().iter().enumerate() {
        match slide.badge {
            Some(badge) => println!("{:>2}. [{}] {} ({})", index, badge, slide.headline, slide.id),
            None => println!("{:>2}. {} ({})", index, slide.headline, slide.id),
        }
    }
    Ok(())
}

pub(crate) fn run_deck_play(args: PlayArgs) -> Result<(), AppError> {
    let PlayArgs {
        start,
        actions,
        json,
    } = args;

    let deck = Deck::standard();
    let session = DeckSession {
        current: start,
        ..DeckSession::default()
    };
    let session = deck.apply_all(session, &actions)?;
    let snapshot = deck.snapshot(&session)?;

    if json {
        let payload = serde_json::json!({ "session": session, "snapshot": snapshot });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "Slide {}/{}: {} ({})",
        snapshot.index + 1,
        snapshot.total,
        snapshot.slide.headline,
        snapshot.slide.id
    );
    println!(
        "Navigation: prev {} | next {}",
        if snapshot.can_go_back { "enabled" } else { "disabled" },
        if snapshot.can_go_forward { "enabled" } else { "disabled" }
    );
    if let Some(view) = &snapshot.calculator {
        println!();
        render_calculator(view);
    }

    Ok(())
}

pub(crate) fn render_calculator(view: &CalculatorView) {
    println!("Business value calculator");
    for input in &view.inputs {
        let flag = if input.out_of_range {
            format!(" (outside {}..={})", input.min, input.max)
        } else {
            String::new()
        };
        println!("- {}: {}{}", input.label, input.display, flag);
    }

    println!("\nDispute flow breakdown");
    for row in &view.dispute_flow.rows {
        let indent = "  ".repeat(row.depth as usize);
        match &row.share_of_parent {
            Some(share) => println!("{}- {} ({}): {}", indent, row.label, share, row.amount_label),
            None => println!("{}- {}: {}", indent, row.label, row.amount_label),
        }
    }
    println!(
        "Total bank loss: {}",
        view.dispute_flow.total_bank_loss_label
    );

    let efficiency = &view.efficiency;
    println!("\nOperational efficiency breakdown");
    println!(
        "- Current operational cost: {}",
        efficiency.current_operational_cost_label
    );
    println!(
        "- Handling time: {} -> {} ({} reduction)",
        efficiency.current_time_per_claim,
        efficiency.target_time_per_claim,
        efficiency.time_reduction_label
    );
    println!(
        "- Operational efficiency: {}",
        efficiency.operational_efficiency_label
    );
    println!(
        "- Fraud loss prevention: {}",
        efficiency.fraud_loss_prevention_label
    );

    println!(
        "\nTotal annual value: {} ({} per month)",
        view.total_value_label, view.monthly_value_label
    );
}
