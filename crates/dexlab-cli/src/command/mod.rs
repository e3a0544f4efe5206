use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, generate_names::GenerateNamesArg, top::TopArg};

mod analyze;
mod generate_names;
mod top;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// What to run; defaults to the full analysis
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run the full analysis and save the transformed dataset
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Print randomly generated creature names
    GenerateNames(#[clap(flatten)] GenerateNamesArg),
    /// Print the top records for one numeric column
    Top(#[clap(flatten)] TopArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::logging::init_logging(args.verbose, args.quiet)?;
    match args.mode.unwrap_or(Mode::Analyze(AnalyzeArg::default())) {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::GenerateNames(arg) => generate_names::run(&arg),
        Mode::Top(arg) => top::run(&arg)?,
    }
    Ok(())
}
