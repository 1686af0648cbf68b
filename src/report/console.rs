use std::io::{self, Write};

use crate::models::{join_codes, total_code_count, SectionRecord};

const BANNER_WIDTH: usize = 50;

/// Write the parsing summary to `out`
pub fn print_results<W: Write>(results: &[SectionRecord], out: &mut W) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No codes found.")?;
        return Ok(());
    }

    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", banner)?;
    writeln!(out, "CODE PARSING RESULTS")?;
    writeln!(out, "{}", banner)?;
    writeln!(out, "Total codes found: {}", total_code_count(results))?;
    writeln!(out, "\nAll codes in order:")?;
    writeln!(out, "{}", join_codes(results))?;
    Ok(())
}
