use clap::{Parser, Subcommand};

mod chat;
mod cmd;
mod config;
mod engine;
mod records;

#[derive(Parser, Debug)]
#[command(name = "taxease", version, about = "Expense tax analysis and optimization")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full tax analysis over a batch of classified expenses
    Analyze(cmd::analyze::AnalyzeCommand),
    /// Per-category breakdown of a batch of expenses
    Categories(cmd::categories::CategoriesCommand),
    /// Check a batch for validation issues
    Validate(cmd::validate::ValidateCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
    /// Ask the assistant a question
    Chat(cmd::chat::ChatCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(cmd) => cmd.exec(),
        Command::Categories(cmd) => cmd.exec(),
        Command::Validate(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
        Command::Chat(cmd) => cmd.exec(),
    }
}
