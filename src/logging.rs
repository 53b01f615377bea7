use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init_logging(level: LevelFilter) {
    let result = SimpleLogger::new().with_level(level).init();

    if let Err(err) = result {
        eprintln!("Logger already initialized: {}", err);
    }
}
