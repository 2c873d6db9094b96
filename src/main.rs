use std::io;
use std::process::ExitCode;

use clap::Parser;

use tiffin_pricing::cli::{execute, Args};
use tiffin_pricing::{init_tracing, PricingConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match PricingConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config);
    config.log_settings();

    match execute(&args, &config, io::stdin().lock()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(json) => {
            eprintln!("{}", json);
            ExitCode::FAILURE
        }
    }
}
