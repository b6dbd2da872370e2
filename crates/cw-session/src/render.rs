//! Plain-text rendering of reports and snapshots.

use cw_core::{
    AggregateReport, ChamberSnapshot, Estimate, NextPreview, PositionEstimate, ProbabilityReport,
    RoundKind, SlotState,
};

/// Render the three probability views.
pub fn report_text(report: &ProbabilityReport) -> String {
    let (counts, odds) = match report.aggregate {
        AggregateReport::Exhausted => return "All rounds have been fired.".to_string(),
        AggregateReport::Remaining { counts, odds } => (counts, odds),
    };

    let total = counts.total();
    let lethal = odds.lethal.to_string();
    let harmless = odds.harmless.to_string();
    let mut out = String::from("Remaining:\n");
    out.push_str(&format!(
        "  lethal   {lethal:>6}  ({}/{total})\n",
        counts.lethal
    ));
    out.push_str(&format!(
        "  harmless {harmless:>6}  ({}/{total})\n",
        counts.harmless
    ));

    if let Some(next) = &report.next {
        out.push_str(&format!(
            "Next round (slot {}): {}\n",
            next.position + 1,
            estimate_text(&next.estimate)
        ));
    }

    out.push_str("By slot:\n");
    for pos in &report.positions {
        out.push_str(&format!("  {}\n", position_line(pos)));
    }
    out.trim_end().to_string()
}

/// One line for a per-position estimate.
pub fn position_line(pos: &PositionEstimate) -> String {
    format!(
        "#{:<2} ({} left) {}",
        pos.position + 1,
        ordinal(pos.remaining_ordinal),
        estimate_text(&pos.estimate)
    )
}

/// Describe an estimate in one phrase.
pub fn estimate_text(estimate: &Estimate) -> String {
    match estimate {
        Estimate::Disclosed { kind } => format!("{kind} (disclosed)"),
        Estimate::Excluded { kind } => format!("{kind} (certain)"),
        Estimate::Uncertain { odds } => {
            format!("lethal {} | harmless {}", odds.lethal, odds.harmless)
        }
    }
}

/// Render the chamber view.
pub fn snapshot_text(snap: &ChamberSnapshot) -> String {
    let mut out = format!(
        "Chamber: {} rounds, {} left ({} lethal, {} harmless)\n",
        snap.slots.len(),
        snap.remaining.total(),
        snap.remaining.lethal,
        snap.remaining.harmless
    );

    let slots: Vec<String> = snap
        .slots
        .iter()
        .map(|s| {
            let mark = match s.state {
                SlotState::Hidden => "?".to_string(),
                SlotState::Revealed(kind) => format!("{}*", kind_letter(kind)),
                SlotState::Fired(kind) => format!("x{}", kind_letter(kind)),
            };
            format!("{}:{mark}", s.position + 1)
        })
        .collect();
    out.push_str(&format!("  [{}]\n", slots.join("] [")));

    let next = match snap.next {
        NextPreview::Empty => "none left".to_string(),
        NextPreview::Disclosed(kind) => format!("{kind} (disclosed)"),
        NextPreview::Certain(kind) => format!("{kind} (certain)"),
        NextPreview::Unknown => "unknown".to_string(),
    };
    out.push_str(&format!("Next: {next}\n"));

    let allowed: Vec<String> = RoundKind::ALL
        .iter()
        .filter(|k| snap.fire_options.allows(**k))
        .map(|k| k.to_string())
        .collect();
    if allowed.is_empty() {
        out.push_str("Fire: nothing to fire");
    } else {
        out.push_str(&format!("Fire: {}", allowed.join(", ")));
    }
    out
}

fn kind_letter(kind: RoundKind) -> char {
    match kind {
        RoundKind::Lethal => 'L',
        RoundKind::Harmless => 'H',
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_core::ChamberState;

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
    }

    #[test]
    fn report_for_fresh_chamber() {
        let state = ChamberState::create(1, 3).unwrap();
        let text = report_text(&state.report());
        assert!(text.contains("lethal    25.0%  (1/4)"));
        assert!(text.contains("harmless  75.0%  (3/4)"));
        assert!(text.contains("Next round (slot 1): lethal 25.0% | harmless 75.0%"));
        assert!(text.contains("#4  (4th left)"));
    }

    #[test]
    fn report_shows_zero_plainly() {
        let mut state = ChamberState::create(1, 2).unwrap();
        state.fire(RoundKind::Lethal).unwrap();
        let text = report_text(&state.report());
        assert!(text.contains("lethal       0%  (0/2)"));
        assert!(text.contains("harmless (certain)"));
    }

    #[test]
    fn report_when_exhausted() {
        let mut state = ChamberState::create(1, 1).unwrap();
        state.fire(RoundKind::Lethal).unwrap();
        state.fire(RoundKind::Harmless).unwrap();
        assert_eq!(report_text(&state.report()), "All rounds have been fired.");
    }

    #[test]
    fn snapshot_marks() {
        let mut state = ChamberState::create(2, 1).unwrap();
        state.fire(RoundKind::Lethal).unwrap();
        state.reveal_at(2, Some(RoundKind::Harmless)).unwrap();
        let text = snapshot_text(&state.snapshot());
        assert!(text.contains("[1:xL] [2:?] [3:H*]"));
        assert!(text.contains("Next: lethal (certain)"));
        assert!(text.contains("Fire: lethal"));
    }
}
