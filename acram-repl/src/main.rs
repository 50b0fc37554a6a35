mod config;
mod error;
mod session;

use config::{Config, TEX_COMMAND_VAR};
use error::Error;
use log::{debug, warn};
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};

/// Reads definitions from each of the files in the configuration. Files that cannot be read are
/// skipped, but at least one must be readable.
fn read_files(config: &Config, session: &mut Session) -> Result<(), Error> {
    let mut unreadable = Vec::new();
    for path in &config.files {
        match fs::read_to_string(path) {
            Ok(input) => session.process_source(&path.display().to_string(), &input),
            Err(err) => {
                eprintln!("cannot open {}: {}", path.display(), err);
                unreadable.push(path.clone());
            },
        }
    }

    if unreadable.len() == config.files.len() {
        return Err(Error::NoInputFile(unreadable));
    }
    Ok(())
}

/// Runs the interactive prompt, processing each line as a definition until end of input.
fn interactive(session: &mut Session) -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;
    let mut line_number = 0;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        line_number += 1;
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        session.process(&format!("input:{}", line_number), &input);
    }
}

fn run() -> Result<(), Error> {
    let config = Config::from_args(std::env::args().skip(1), std::env::var(TEX_COMMAND_VAR).ok())?;
    debug!("{:?}", config);
    let mut session = Session::new(&config);

    if !config.files.is_empty() {
        read_files(&config, &mut session)?;
    } else if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        session.process_source("stdin", &input);
    } else {
        interactive(&mut session)?;
    }

    if session.failed() > 0 {
        warn!("{} definition(s) could not be processed", session.failed());
    }
    debug!("{} equation(s) in the document", session.equations());
    session.finish(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}
