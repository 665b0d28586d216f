use std::io;
use std::path::Path;

use clap_complete::generate;
use tracing::debug;

use crate::cli::{
    ADD_USAGE, AddArgs, CompletionsArgs, REMOVE_USAGE, RemoveArgs, UPDATE_USAGE, UpdateArgs,
};
use crate::config::Settings;
use crate::error::{Result, SkillError};
use crate::skill::{SkillDocument, SkillRecord, parse_percentage};
use crate::store::SkillStore;
use crate::ui;

/// Prints every skill in file order.
pub fn run_list(file: Option<&Path>) -> Result<()> {
    let settings = Settings::resolve(file)?;
    let document = SkillStore::new(&settings.data_file).load()?;

    if document.skills.is_empty() {
        ui::info("No skills found.");
        return Ok(());
    }

    println!();
    ui::heading("🎯 Current Skills:");
    ui::rule();
    for (index, skill) in document.skills.iter().enumerate() {
        ui::info(&ui::skill_row(index + 1, skill));
    }
    ui::rule();
    ui::info(&format!("Total: {} skills", document.skills.len()));
    Ok(())
}

/// Appends a new skill unless one with the same name already exists.
pub fn run_add(args: AddArgs, file: Option<&Path>) -> Result<()> {
    let (Some(name), Some(percentage)) = (args.name, args.percentage) else {
        ui::info(ADD_USAGE);
        return Ok(());
    };
    let percentage = parse_percentage(&percentage)?;
    warn_out_of_range(percentage);

    let settings = Settings::resolve(file)?;
    let store = SkillStore::new(&settings.data_file);
    let mut document = store.load()?;

    if document.contains(&name) {
        ui::failed(&format!(
            "Skill '{}' already exists. Use 'update' to modify it.",
            name
        ));
        return Ok(());
    }

    let color = args
        .color
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| settings.palette.pick(&document.skills).to_string());
    let category = args
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or(settings.default_category);
    debug!(%name, %color, %category, "adding skill");

    document.push(SkillRecord::new(name.as_str(), percentage, color, category));
    if persist(&store, &document)? {
        ui::done(&format!("Added skill: {} ({}%)", name, percentage));
    }
    Ok(())
}

/// Removes every skill whose name matches, case-insensitively.
pub fn run_remove(args: RemoveArgs, file: Option<&Path>) -> Result<()> {
    let Some(name) = args.name else {
        ui::info(REMOVE_USAGE);
        return Ok(());
    };

    let settings = Settings::resolve(file)?;
    let store = SkillStore::new(&settings.data_file);
    let mut document = store.load()?;

    let removed = document.remove(&name);
    if removed == 0 {
        ui::failed(&format!("Skill '{}' not found.", name));
        return Ok(());
    }
    debug!(%name, removed, "removed skill records");

    if persist(&store, &document)? {
        ui::done(&format!("Removed skill: {}", name));
    }
    Ok(())
}

/// Overwrites the percentage of the first matching skill.
pub fn run_update(args: UpdateArgs, file: Option<&Path>) -> Result<()> {
    let (Some(name), Some(percentage)) = (args.name, args.percentage) else {
        ui::info(UPDATE_USAGE);
        return Ok(());
    };
    let percentage = parse_percentage(&percentage)?;
    warn_out_of_range(percentage);

    let settings = Settings::resolve(file)?;
    let store = SkillStore::new(&settings.data_file);
    let mut document = store.load()?;

    let Some(old) = document.update_percentage(&name, percentage) else {
        ui::failed(&format!("Skill '{}' not found.", name));
        return Ok(());
    };

    if persist(&store, &document)? {
        ui::done(&format!(
            "Updated {}: {}% → {}%",
            name,
            ui::value_text(&old),
            percentage
        ));
    }
    Ok(())
}

/// Prints shell completion scripts to stdout.
pub fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    let mut cmd = crate::cli::Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}

/// Writes the document and reports the outcome. A failed write is reported
/// and yields `false`; the command then skips its own confirmation.
fn persist(store: &SkillStore, document: &SkillDocument) -> Result<bool> {
    match store.save(document) {
        Ok(()) => {
            ui::done(&format!("Skills saved to {}", store.path().display()));
            Ok(true)
        }
        Err(err @ SkillError::Save { .. }) => {
            ui::failed(&format!("Error saving skills: {err}"));
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

fn warn_out_of_range(percentage: i64) {
    if !(0..=100).contains(&percentage) {
        ui::warn(&format!(
            "Percentage {}% is outside 0-100; storing it as given.",
            percentage
        ));
    }
}
