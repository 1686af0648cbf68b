use std::io::{BufRead, Write};

use crate::error::Result;
use crate::player::CodePlayer;

const COMMANDS: &str = "[n]ext, [p]revious, [r]eset, [g]o <N>, [q]uit: ";

/// Console loop driving a player until `q` or end of input.
///
/// A blank line advances like `n`. `g` takes a 1-based position.
pub fn run_player<R: BufRead, W: Write>(
    player: &mut CodePlayer,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", player.status())?;
    show_current(player, output)?;

    loop {
        write!(output, "{}", COMMANDS)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let mut words = line.split_whitespace();
        match words.next().map(str::to_lowercase).as_deref() {
            None | Some("n") => {
                player.next();
            }
            Some("p") => {
                player.previous();
            }
            Some("r") => {
                player.reset();
            }
            Some("g") => match words.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(target) if target > 0 => {
                    player.seek(target - 1);
                }
                _ => {
                    writeln!(output, "Usage: g <position>, starting at 1")?;
                    continue;
                }
            },
            Some("q") => break,
            Some(other) => {
                writeln!(output, "Unknown command '{}'", other)?;
                continue;
            }
        }

        writeln!(output, "{}", player.status())?;
        show_current(player, output)?;
    }

    Ok(())
}

fn show_current<W: Write>(player: &CodePlayer, output: &mut W) -> Result<()> {
    writeln!(
        output,
        "[{}/{}] {}",
        player.position() + 1,
        player.code_count(),
        player.current()
    )?;
    Ok(())
}
