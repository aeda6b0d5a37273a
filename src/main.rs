use varcalc::config::ReplConfig;
use varcalc::util::number_to_string;
use varcalc::{logger, Session};
use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use tracing::warn;

fn main() -> Result<()> {
    let config = ReplConfig::from_env()?;
    logger::init_with_level(config.log_level);
    let marker = &config.output_marker;

    let mut session = Session::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        match line.as_str() {
            "" => continue,
            "exit" => break,
            // only the display is reset; variables survive
            "clear" => print!("\x1b[2J\x1b[H"),
            "vars" => {
                for (name, value) in session.variables().iter() {
                    println!("{} {} = {}", marker, name, number_to_string(value));
                }
            },
            _ => match session.evaluate(&line) {
                Ok(result) => println!("{} {}", marker, result),
                Err(e) => {
                    warn!(kind = e.kind(), "{}", e);
                    println!("{} {}", marker, e)
                }
            }
        }
        stdout.flush().context("flushing output")?;
    }
    Ok(())
}
