use std::io;
use std::path::PathBuf;

use rlox as lox;

use clap::error::ErrorKind;
use clap::Parser as ClapParser;

use lox::lox::Lox;

#[derive(ClapParser, Debug)]
#[command(version, about = "Tree-walking interpreter for the Lox language", long_about = None)]
pub struct Cli {
    /// Lox script to execute; omit to start the interactive prompt
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Cli = match Cli::try_parse() {
        Ok(args) => args,

        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }

        Err(_) => {
            println!("Usage: lox [script]");
            std::process::exit(64);
        }
    };

    let mut lox: Lox<io::Stdout> = Lox::new(io::stdout());

    match args.script {
        Some(path) => {
            lox.run_file(&path)?;

            if lox.had_error() {
                std::process::exit(65);
            }

            if lox.had_runtime_error() {
                std::process::exit(70);
            }
        }

        None => {
            lox.run_prompt()?;
        }
    }

    Ok(())
}
