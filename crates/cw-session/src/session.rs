//! Line-oriented chamber session.
//!
//! `ChamberSession` owns a [`ChamberEngine`], turns text commands into
//! engine calls, and journals every action that changed the game.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use cw_core::{
    ChamberConfig, ChamberEngine, ChamberError, ChamberState, DisclosedRound, DisclosureStatus,
    RoundKind,
};

use crate::config::SessionConfig;
use crate::dealer::Dealer;
use crate::error::{SessionError, SessionResult};
use crate::journal::{Journal, JournalEntry, Tool};
use crate::render;

/// An interactive chamber session.
pub struct ChamberSession {
    engine: ChamberEngine,
    config: SessionConfig,
    dealer: Option<Dealer>,
    rng: StdRng,
    journal: Journal,
    game: u32,
}

impl ChamberSession {
    /// Create a session and load the first chamber from the config.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        let mut session = Self {
            engine: ChamberEngine::new(),
            config,
            dealer: None,
            rng,
            journal: Journal::new(),
            game: 0,
        };
        session.start(session.config.chamber)?;
        Ok(session)
    }

    /// Get the engine.
    pub fn engine(&self) -> &ChamberEngine {
        &self.engine
    }

    /// Get the current chamber state.
    pub fn state(&self) -> SessionResult<&ChamberState> {
        Ok(self.engine.state()?)
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Whether a dealer supplies the true kinds.
    pub fn has_dealer(&self) -> bool {
        self.config.dealer
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let mut words = trimmed.split_whitespace();
        let cmd = words.next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = words.collect();

        match cmd.as_str() {
            "start" | "load" => self.do_start(&args),
            "fire" | "shoot" => self.do_fire(&args),
            "peek" => self.do_peek(&args),
            "scan" => self.do_scan(&args),
            "odds" | "report" => self.do_odds(),
            "chamber" | "status" => self.do_chamber(),
            "journal" => self.do_journal_show(),
            "export" => self.do_journal_export(args.first().copied().unwrap_or("")),
            "reset" => self.do_reset(),
            "help" => Ok(help_text().to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    /// Run a `;`-separated list of commands, stopping at the first error.
    pub fn run_script(&mut self, script: &str) -> SessionResult<Vec<String>> {
        script
            .split(';')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.process(line))
            .collect()
    }

    fn start(&mut self, config: ChamberConfig) -> SessionResult<()> {
        self.engine.start_with(config)?;
        self.dealer = if self.config.dealer {
            Some(Dealer::deal(config, &mut self.rng))
        } else {
            None
        };
        self.game += 1;
        self.journal.append(JournalEntry::GameStarted {
            game: self.game,
            lethal: config.lethal,
            harmless: config.harmless,
            dealer: self.config.dealer,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    fn do_start(&mut self, args: &[&str]) -> SessionResult<String> {
        let config = match args {
            [] => self.config.chamber,
            [lethal, harmless] => ChamberConfig::new(parse_count(lethal)?, parse_count(harmless)?),
            _ => {
                return Err(SessionError::InvalidChoice(
                    "usage: start [<lethal> <harmless>]".to_string(),
                ));
            }
        };
        self.start(config)?;
        Ok(format!(
            "Game {}: loaded {} rounds ({} lethal, {} harmless).",
            self.game,
            config.total(),
            config.lethal,
            config.harmless
        ))
    }

    fn do_fire(&mut self, args: &[&str]) -> SessionResult<String> {
        let kind = match (self.has_dealer(), args) {
            (true, []) => self.dealer_kind_at_head()?,
            (true, _) => {
                return Err(SessionError::InvalidChoice(
                    "the dealer decides what fires, use plain 'fire'".to_string(),
                ));
            }
            (false, [kind]) => parse_kind(kind)?,
            (false, _) => {
                return Err(SessionError::InvalidChoice(
                    "usage: fire <lethal|harmless>".to_string(),
                ));
            }
        };

        let fired = self.engine.fire(kind)?;
        self.journal.append(JournalEntry::Fired {
            game: self.game,
            position: fired.position,
            kind: fired.kind,
            was_disclosed: fired.was_disclosed,
            timestamp: Utc::now(),
        });

        let mut out = format!(
            "Slot {} fired: {}. Remaining: {} lethal, {} harmless.",
            fired.position + 1,
            fired.kind,
            fired.remaining.lethal,
            fired.remaining.harmless
        );
        if fired.remaining.total() == 0 {
            out.push_str("\nThe chamber is empty.");
        }
        Ok(out)
    }

    fn do_peek(&mut self, args: &[&str]) -> SessionResult<String> {
        let asserted = match (self.has_dealer(), args) {
            (true, []) => Some(self.dealer_kind_at_head()?),
            (false, []) => None,
            (false, [kind]) => Some(parse_kind(kind)?),
            _ => {
                return Err(SessionError::InvalidChoice(
                    "usage: peek [lethal|harmless]".to_string(),
                ));
            }
        };

        let disclosed = self.engine.reveal_next(asserted).map_err(|e| match e {
            ChamberError::AssertionRequired { .. } => SessionError::InvalidChoice(
                "the next round is unknown, say what you saw: peek <lethal|harmless>"
                    .to_string(),
            ),
            other => other.into(),
        })?;
        Ok(self.record_disclosure(disclosed, Tool::Peek))
    }

    fn do_scan(&mut self, args: &[&str]) -> SessionResult<String> {
        let (slot, kind) = match args {
            [slot] => (*slot, None),
            [slot, kind] => (*slot, Some(*kind)),
            _ => {
                return Err(SessionError::InvalidChoice(
                    "usage: scan <slot> [lethal|harmless]".to_string(),
                ));
            }
        };

        if !self.engine.snapshot()?.can_reveal_any {
            return Err(SessionError::InvalidChoice(
                "every remaining round is already known".to_string(),
            ));
        }

        let position = parse_slot(slot)?;
        let asserted = match (self.has_dealer(), kind) {
            (true, None) => self.dealer.as_ref().and_then(|d| d.kind_at(position)),
            (true, Some(_)) => {
                return Err(SessionError::InvalidChoice(
                    "the dealer already knows the load, use 'scan <slot>'".to_string(),
                ));
            }
            (false, Some(kind)) => Some(parse_kind(kind)?),
            (false, None) => None,
        };

        let disclosed = self
            .engine
            .reveal_at(position, asserted)
            .map_err(|e| match e {
                ChamberError::AssertionRequired { position } => SessionError::InvalidChoice(
                    format!(
                        "slot {} is unknown, say what you saw: scan {} <lethal|harmless>",
                        position + 1,
                        position + 1
                    ),
                ),
                other => other.into(),
            })?;
        Ok(self.record_disclosure(disclosed, Tool::Scan))
    }

    fn record_disclosure(&mut self, disclosed: DisclosedRound, tool: Tool) -> String {
        let slot = disclosed.position + 1;
        match disclosed.status {
            DisclosureStatus::AlreadyKnown => {
                debug!(slot, %tool, "disclosure was already known");
                format!("Slot {slot} is already known: {}.", disclosed.kind)
            }
            DisclosureStatus::Recorded => {
                self.journal.append(JournalEntry::Disclosed {
                    game: self.game,
                    position: disclosed.position,
                    kind: disclosed.kind,
                    tool,
                    timestamp: Utc::now(),
                });
                format!("Slot {slot} is {}.", disclosed.kind)
            }
        }
    }

    fn dealer_kind_at_head(&self) -> SessionResult<RoundKind> {
        let head = self
            .engine
            .state()?
            .head()
            .map(|r| r.position())
            .ok_or(ChamberError::EmptyChamber)?;
        self.dealer
            .as_ref()
            .and_then(|d| d.kind_at(head))
            .ok_or(SessionError::Chamber(ChamberError::EmptyChamber))
    }

    fn do_odds(&self) -> SessionResult<String> {
        Ok(render::report_text(&self.engine.report()?))
    }

    fn do_chamber(&self) -> SessionResult<String> {
        Ok(render::snapshot_text(&self.engine.snapshot()?))
    }

    fn do_journal_show(&self) -> SessionResult<String> {
        if self.journal.is_empty() {
            return Ok("Journal is empty.".to_string());
        }
        Ok(self.journal.export_text().trim_end().to_string())
    }

    fn do_journal_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            "json" => self.journal.export_json(),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }

    fn do_reset(&mut self) -> SessionResult<String> {
        if !self.engine.is_active() {
            return Ok("No game in progress.".to_string());
        }
        self.engine.reset();
        self.dealer = None;
        self.journal.append(JournalEntry::Reset {
            game: self.game,
            timestamp: Utc::now(),
        });
        Ok(format!(
            "Game {} discarded. Type 'start' to load a new chamber.",
            self.game
        ))
    }
}

fn parse_kind(s: &str) -> SessionResult<RoundKind> {
    RoundKind::parse(s).ok_or_else(|| {
        SessionError::InvalidChoice(format!("'{s}' is not a round kind, use lethal or harmless"))
    })
}

fn parse_count(s: &str) -> SessionResult<u32> {
    s.parse()
        .map_err(|_| SessionError::InvalidChoice(format!("'{s}' is not a round count")))
}

/// Slots are 1-based on the command line.
fn parse_slot(s: &str) -> SessionResult<usize> {
    match s.parse::<usize>() {
        Ok(slot) if slot >= 1 => Ok(slot - 1),
        _ => Err(SessionError::InvalidChoice(format!(
            "'{s}' is not a slot number"
        ))),
    }
}

fn help_text() -> &'static str {
    "\
Chamber Commands:
  start [<lethal> <harmless>]   Load a new chamber
  fire <lethal|harmless>        Fire the next round (dealer mode: plain 'fire')
  peek [lethal|harmless]        Disclose the next round
  scan <slot> [lethal|harmless] Disclose a round by slot number
  odds                          Show probabilities
  chamber                       Show the chamber
  journal                       Show the journal
  export [markdown|text|json]   Export the journal
  reset                         Discard the current game
  help                          Show this help
  quit                          Exit"
}
