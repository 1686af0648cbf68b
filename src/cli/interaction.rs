use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Print `prompt` and read one trimmed line; `None` on end of input
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask whether the results should be written to a file
pub fn ask_save_results<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let answer = prompt_line(input, output, "\nSave results to file? (y/n): ")?;
    Ok(answer.is_some_and(|a| a.to_lowercase() == "y"))
}

/// Ask for the output filename, falling back to `default` on a blank answer
pub fn ask_output_filename<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: &Path,
) -> Result<PathBuf> {
    let prompt = format!("Enter output filename (default: {}): ", default.display());
    match prompt_line(input, output, &prompt)? {
        Some(name) if !name.is_empty() => Ok(PathBuf::from(name)),
        _ => Ok(default.to_path_buf()),
    }
}
