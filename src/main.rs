use std::process;
use log::{error, info};

use pointkit::commands::{build_cli, CommandFactory, PointkitCommandFactory};
use pointkit::utils::config::CliConfig;
use pointkit::utils::logger::{init_logging, verbose_level};

fn main() {
    let matches = build_cli().get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match CliConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration {}: {}", path, e);
                process::exit(1);
            }
        },
        None => CliConfig::default(),
    };

    init_logging(verbose_level(matches.get_flag("verbose"), config.log_level));
    info!("Default coordinate system: {}", config.system);

    let factory = PointkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &config);
    match command_result {
        Ok(command) => match command.execute() {
            Ok(output) => println!("{}", output),
            Err(e) => {
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
