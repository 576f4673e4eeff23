//! Preference file management.

use std::fs;
use std::path::PathBuf;

use clap::Subcommand;
use slotwise_core::SchedulePreferences;

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Write a preference file with the defaults
    Init {
        /// Where to write the TOML file
        path: PathBuf,
    },
    /// Print a preference file (or the defaults when none is given)
    Show {
        /// TOML file to read
        path: Option<PathBuf>,
    },
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PrefsAction::Init { path } => {
            let prefs = SchedulePreferences::default();
            fs::write(&path, toml::to_string_pretty(&prefs)?)?;
            println!("preferences written to {}", path.display());
        }
        PrefsAction::Show { path } => {
            let prefs = super::suggest::load_prefs(path.as_deref())?;
            prefs.validate()?;
            println!("{}", toml::to_string_pretty(&prefs)?);
        }
    }
    Ok(())
}
