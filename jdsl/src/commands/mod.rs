mod completions;
mod generate;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

#[derive(Parser)]
#[command(name = "javadsl")]
#[command(version)]
#[command(about = "Print Java source composed with the javadsl fold DSL")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => GenerateCommand::default().run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample class (the default when no command is given)
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
