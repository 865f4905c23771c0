use crate::demo::{run_calculator, run_deck_list, run_deck_play, CalculatorArgs, PlayArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use salient_deck::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Salient Deck",
    about = "Serve and explore the Salient dispute-resolution pitch deck",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the business value breakdown for a set of calculator inputs
    Calculator(CalculatorArgs),
    /// Inspect the slide deck
    Deck {
        #[command(subcommand)]
        command: DeckCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DeckCommand {
    /// List every slide in presentation order
    List,
    /// Replay a sequence of deck actions and print the resulting slide
    Play(PlayArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculator(args) => run_calculator(args),
        Command::Deck {
            command: DeckCommand::List,
        } => run_deck_list(),
        Command::Deck {
            command: DeckCommand::Play(args),
        } => run_deck_play(args),
    }
}
