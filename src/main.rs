#[cfg(test)]
#[macro_use]
extern crate parameterized;

mod config;
mod logging;
mod scenario;

use std::path::PathBuf;

use config::ProgramConfig;

fn init_config() -> ProgramConfig {
    let mut config = ProgramConfig::from_file(&PathBuf::from("config.ini"));

    let args: Vec<String> = std::env::args().collect();
    if let Some(path) = scenario_arg(&args) {
        config.scenario = path;
    }

    config
}

fn scenario_arg(args: &[String]) -> Option<PathBuf> {
    let flag = args.iter().position(|arg| arg == "--scenario")?;
    args.get(flag + 1).map(PathBuf::from)
}

fn main() {
    /* Initialize */
    let mut config = init_config();
    logging::init_logging(config.log_level);

    let queries = match scenario::load_scenario(&config.scenario) {
        Ok(queries) => queries,
        Err(err) => {
            log::error!(
                "Could not load scenario {}: {:?}",
                config.scenario.display(),
                err
            );
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} queries from {}",
        queries.len(),
        config.scenario.display()
    );

    /* Evaluate */
    for query in &queries {
        let outcome = query.evaluate();
        log::debug!("{:?} => {:?}", query, outcome);
        match serde_json::to_string(&outcome) {
            Ok(json) => println!("{}", json),
            Err(err) => log::error!("Could not serialize {:?}: {}", outcome, err),
        }
    }

    if let Err(err) = config.write_to_disk() {
        log::warn!("Could not write config.ini: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scenario_flag_takes_next_argument() {
        let args = args(&["rect_probe", "--scenario", "edges.json"]);
        assert_eq!(scenario_arg(&args), Some(PathBuf::from("edges.json")));
    }

    #[test]
    fn scenario_flag_without_value_is_ignored() {
        assert_eq!(scenario_arg(&args(&["rect_probe", "--scenario"])), None);
        assert_eq!(scenario_arg(&args(&["rect_probe"])), None);
    }
}
