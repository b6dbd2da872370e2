use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use cw_core::{AggregateReport, Estimate, ProbabilityReport};
use cw_session::SessionConfig;

pub fn run(config: SessionConfig, script: Option<&str>, json: bool) -> Result<(), String> {
    let session = super::scripted_session(config, script)?;
    let report = session
        .state()
        .map(|s| s.report())
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &ProbabilityReport) {
    let (counts, odds) = match report.aggregate {
        AggregateReport::Exhausted => {
            println!("  All rounds have been fired.");
            return;
        }
        AggregateReport::Remaining { counts, odds } => (counts, odds),
    };

    println!(
        "  {} {} lethal ({}), {} harmless ({})",
        "Remaining:".bold(),
        counts.lethal,
        odds.lethal,
        counts.harmless,
        odds.harmless
    );
    if let Some(next) = &report.next {
        let odds = next.estimate.odds();
        println!(
            "  {} slot {}: lethal {} | harmless {} ({})",
            "Next:".bold(),
            next.position + 1,
            odds.lethal,
            odds.harmless,
            basis(&next.estimate)
        );
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "Left", "Lethal", "Harmless", "Basis"]);

    for pos in &report.positions {
        let odds = pos.estimate.odds();
        table.add_row(vec![
            (pos.position + 1).to_string(),
            pos.remaining_ordinal.to_string(),
            odds.lethal.to_string(),
            odds.harmless.to_string(),
            basis(&pos.estimate).to_string(),
        ]);
    }

    println!("{table}");
}

fn basis(estimate: &Estimate) -> &'static str {
    match estimate {
        Estimate::Disclosed { .. } => "disclosed",
        Estimate::Excluded { .. } => "certain",
        Estimate::Uncertain { .. } => "odds",
    }
}
