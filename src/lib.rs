#![allow(clippy::result_large_err)]

mod cli;
mod commands;
pub mod config;
mod error;
pub mod skill;
pub mod store;
pub mod ui;

use std::ffi::{OsStr, OsString};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub use error::{Result, SkillError};

/// Entry point for the CLI command dispatch.
pub fn run() -> Result<()> {
    use clap::Parser;
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    dispatch(cli)
}

fn dispatch(cli: cli::Cli) -> Result<()> {
    let file = cli.file.as_deref();
    match cli.command {
        None => {
            print_help();
            Ok(())
        }
        Some(cli::Command::List(_)) => commands::run_list(file),
        Some(cli::Command::Add(args)) => commands::run_add(args, file),
        Some(cli::Command::Remove(args)) => commands::run_remove(args, file),
        Some(cli::Command::Update(args)) => commands::run_update(args, file),
        Some(cli::Command::Completions(args)) => commands::run_completions(args),
        Some(cli::Command::Unknown(args)) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            let lowered = name.to_lowercase();
            if lowered != name && is_known_command(&lowered) {
                return dispatch(reparse_with_command(name, &lowered));
            }
            ui::info(&format!("Unknown command: {}", lowered));
            print_help();
            Ok(())
        }
    }
}

/// Subcommand names match case-insensitively, so `LIST` behaves like `list`.
fn is_known_command(name: &str) -> bool {
    use clap::CommandFactory;
    cli::Cli::command().find_subcommand(name).is_some()
}

/// Parses the process arguments again with the first occurrence of `original`
/// (after the binary name) replaced by `lowered`.
fn reparse_with_command(original: &str, lowered: &str) -> cli::Cli {
    use clap::Parser;
    let mut pending = true;
    let argv = std::env::args_os().enumerate().map(|(index, arg)| {
        if index > 0 && pending && arg.as_os_str() == OsStr::new(original) {
            pending = false;
            OsString::from(lowered)
        } else {
            arg
        }
    });
    cli::Cli::parse_from(argv)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "warn,skillfile=debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn print_help() {
    ui::heading("skillfile");
    println!("Manage the skills data in skills.json without editing it by hand\n");
    ui::info("Usage: skillfile [--file <path>] <command> [args]\n");
    ui::heading("Commands");
    ui::list_item("list                               List all skills");
    ui::list_item("add \"Skill Name\" 80 [category]     Add a skill with a percentage");
    ui::list_item("remove \"Skill Name\"                Remove a skill");
    ui::list_item("update \"Skill Name\" 85             Update a skill's percentage");
    ui::list_item("completions <shell>                Generate shell completion scripts");
}
