use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use tracing::{debug, warn};

use code_parser::cli::{ask_output_filename, ask_save_results, Args};
use code_parser::error::Result;
use code_parser::models::Config;
use code_parser::parser::parse_codes_from_file;
use code_parser::player::{run_player, CodePlayer};
use code_parser::report::{print_results, save_codes_to_file};

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse());
    code_parser::utils::init_logging(&config);
    debug!("Configuration: {:?}", config);

    if let Some(play_path) = &config.play_path {
        return play_saved_codes(play_path);
    }

    println!("Parsing codes from file: {}", config.input_path.display());

    let results = parse_codes_from_file(&config.input_path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_results(&results, &mut out)?;

    if results.is_empty() {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    if !ask_save_results(&mut input, &mut out)? {
        return Ok(());
    }

    let output_path = ask_output_filename(&mut input, &mut out, &config.default_output)?;
    match save_codes_to_file(&results, &output_path) {
        Ok(path) => writeln!(out, "Results saved to '{}'", path.display())?,
        Err(err) => {
            warn!("Save to {} failed", output_path.display());
            writeln!(out, "Error saving to file: {}", err)?;
        }
    }

    Ok(())
}

fn play_saved_codes(path: &Path) -> Result<()> {
    println!("Playing codes from file: {}", path.display());

    let mut player = match CodePlayer::from_file(path) {
        Ok(player) => player,
        Err(err) => {
            println!("Error: {}", err);
            return Ok(());
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_player(&mut player, &mut stdin.lock(), &mut stdout.lock())
}
