use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "slotwise-cli", version, about = "Slotwise CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest conflict-free time slots for a flexible task
    Suggest(commands::suggest::SuggestArgs),
    /// Pick a suggestion and emit it as a calendar-event JSON document
    Book(commands::book::BookArgs),
    /// Preference file management
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Suggest(args) => commands::suggest::run(args),
        Commands::Book(args) => commands::book::run(args),
        Commands::Prefs { action } => commands::prefs::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
