//! Interactive walk-through of the write/read/append helpers.
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use mdpost::file_ops::{append_text, read_text, write_text};
use mdpost::logging;

const DEFAULT_FILENAME: &str = "demo.txt";
const GREETING: &str = "Hello from mdpost";

fn main() -> Result<()> {
    logging::init(false);

    let path = prompt_filename(&mut io::stdin().lock(), &mut io::stdout())?;
    tracing::info!(path = %path.display(), "running file demo");

    write_text(&path, GREETING)?;
    println!("Written. Contents: {}", read_text(&path)?);

    append_text(&path, GREETING, true)?;
    println!("Appended. Contents: {}", read_text(&path)?);
    Ok(())
}

fn prompt_filename(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    write!(output, "Enter filename: ").context("write prompt")?;
    output.flush().context("flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("read filename")?;
    let name = line.trim();
    Ok(PathBuf::from(if name.is_empty() {
        DEFAULT_FILENAME
    } else {
        name
    }))
}
