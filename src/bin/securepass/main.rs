use std::process;

use clap::Parser;

mod clipboard;

/// Generate one strong 16-character password.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Copy the password to the clipboard instead of printing it.
    #[arg(long)]
    copy: bool,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    let password = securepass::generate_password()?;
    if args.copy {
        clipboard::send_to_clipboard(password.as_str().as_bytes())?;
        eprintln!("Copied to the clipboard.");
    } else {
        // stdout carries nothing but the password itself.
        println!("{}", password.as_str());
    }
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Failed to generate a password: {0}")]
    Generation(securepass::GeneratorError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<securepass::GeneratorError> for ProgError {
    fn from(err: securepass::GeneratorError) -> ProgError {
        ProgError::Generation(err)
    }
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
