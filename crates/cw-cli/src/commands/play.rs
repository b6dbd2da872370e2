use std::io::{self, BufRead, Write};

use colored::Colorize;

use cw_session::{ChamberSession, SessionConfig};

pub fn run(config: SessionConfig) -> Result<(), String> {
    let lethal = config.chamber.lethal;
    let harmless = config.chamber.harmless;
    let dealer = config.dealer;
    let seed = config.seed;

    let mut session =
        ChamberSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} Chamberwatch", "Starting".bold());
    if dealer {
        println!("  {lethal} lethal, {harmless} harmless | Dealer seed: {seed}");
    } else {
        println!("  {lethal} lethal, {harmless} harmless | You call every round");
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
