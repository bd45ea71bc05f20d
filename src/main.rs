use std::process;
use log::{error, LevelFilter};

use geobuffer::utils::config::Settings;
use geobuffer::utils::logger::Logger;
use geobuffer::commands::{build_cli, CommandFactory, GeoBufferCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
            .init();
    }

    let settings = match Settings::load(matches.get_one::<String>("config").map(String::as_str)) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let factory = GeoBufferCommandFactory::new();

    match factory.create_command(&matches, &settings) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
