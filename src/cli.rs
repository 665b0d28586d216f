use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

pub const ADD_USAGE: &str = "Usage: skillfile add \"Skill Name\" percentage [category]";
pub const REMOVE_USAGE: &str = "Usage: skillfile remove \"Skill Name\"";
pub const UPDATE_USAGE: &str = "Usage: skillfile update \"Skill Name\" percentage";

/// CLI argument parser definition.
#[derive(Parser)]
#[command(
    name = "skillfile",
    version,
    about = "Edit the skills.json behind a portfolio skills section"
)]
pub struct Cli {
    /// Path to the skills JSON file
    #[arg(short = 'f', long = "file", env = "SKILLFILE_PATH", global = true)]
    pub file: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Command {
    #[command(aliases = ["ls"], about = "List all skills")]
    List(ListArgs),
    #[command(about = "Add a skill")]
    Add(AddArgs),
    #[command(aliases = ["rm"], about = "Remove a skill")]
    Remove(RemoveArgs),
    #[command(about = "Update a skill's percentage")]
    Update(UpdateArgs),
    #[command(aliases = ["completion"], about = "Generate shell completion scripts")]
    Completions(CompletionsArgs),
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Arguments for `skillfile list`.
#[derive(Args, Clone, Debug)]
pub struct ListArgs {
    /// Surplus positionals are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<String>,
}

/// Arguments for `skillfile add`.
///
/// Positionals are optional so a short invocation prints the usage line
/// instead of a parser error.
#[derive(Args, Clone, Debug)]
#[command(allow_negative_numbers = true)]
pub struct AddArgs {
    pub name: Option<String>,
    pub percentage: Option<String>,
    pub category: Option<String>,
    /// Color tag to use instead of the automatic pick
    #[arg(short = 'c', long = "color")]
    pub color: Option<String>,
    /// Surplus positionals are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<String>,
}

/// Arguments for `skillfile remove`.
#[derive(Args, Clone, Debug)]
pub struct RemoveArgs {
    pub name: Option<String>,
    /// Surplus positionals are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<String>,
}

/// Arguments for `skillfile update`.
#[derive(Args, Clone, Debug)]
#[command(allow_negative_numbers = true)]
pub struct UpdateArgs {
    pub name: Option<String>,
    pub percentage: Option<String>,
    /// Surplus positionals are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<String>,
}

/// Arguments for `skillfile completions`.
#[derive(Args, Clone, Debug)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}
