use clap::{CommandFactory, Parser, Subcommand};
use matrixdesk_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "matrixdesk", version, about = "Eisenhower matrix and knowledge chunking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Eisenhower matrix tasks
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Knowledge compendium documents (chunking, export, import)
    Kcs {
        #[command(subcommand)]
        action: commands::kcs::KcsAction,
    },
    /// Instructional ruleset blueprint
    Ir {
        #[command(subcommand)]
        action: commands::ir::IrAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let (config, load_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    matrixdesk_core::init_logging(&config.logging.level);
    if let Some(e) = load_err {
        tracing::warn!("using default config: {e}");
    }

    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action, &config),
        Commands::Kcs { action } => commands::kcs::run(action, &config),
        Commands::Ir { action } => commands::ir::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "matrixdesk", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
