use std::process::ExitCode;

use clap::Parser;

use vault_decode::cli::{self, Cli, Exit};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too, on stdout
            let exit = if err.use_stderr() {
                Exit::Usage
            } else {
                Exit::Success
            };
            let _ = err.print();
            return exit.into();
        }
    };

    match cli::run(&cli) {
        Ok(exit) => exit.into(),
        Err(err) => {
            eprintln!("Unexpected error: {:#}", err);
            Exit::Usage.into()
        }
    }
}
