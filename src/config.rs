use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use configparser::ini::Ini;
use log::LevelFilter;

const DEFAULT_SCENARIO: &str = "resources/scenario.json";

pub struct ProgramConfig {
    pub log_level: LevelFilter,
    pub scenario: PathBuf,
    config: Ini,
    path: PathBuf,
}

impl ProgramConfig {
    /// Loads `path`, falling back to defaults if the file is missing or
    /// can't be parsed.
    pub fn from_file(path: &Path) -> Self {
        let mut config = Ini::new();
        if path.exists() {
            if let Err(err) = config.load(path) {
                eprintln!("Could not read {}: {}", path.display(), err);
                config = Ini::new();
            }
        }
        Self::from_ini(config, path)
    }

    fn from_ini(config: Ini, path: &Path) -> Self {
        let log_level = config
            .get("Logging", "Level")
            .and_then(|level| LevelFilter::from_str(&level).ok())
            .unwrap_or(LevelFilter::Info);
        let scenario = config
            .get("Probe", "Scenario")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENARIO));

        ProgramConfig {
            log_level,
            scenario,
            config,
            path: PathBuf::from(path),
        }
    }

    pub fn write_to_disk(&mut self) -> std::io::Result<()> {
        self.config
            .set("Logging", "Level", Some(self.log_level.to_string()));
        self.config.set(
            "Probe",
            "Scenario",
            Some(self.scenario.display().to_string()),
        );
        self.config.write(&self.path)
    }
}
