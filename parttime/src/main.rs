use std::process::ExitCode;

use clap::Parser;
use parttime::{cli, logging, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::run(&cli) {
        Ok(report) => {
            println!("{}", cli::render(&cli, &report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
