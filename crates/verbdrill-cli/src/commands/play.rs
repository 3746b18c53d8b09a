//! The `verbdrill play` command.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use verbdrill_adapters::config::{create_catalog_source, create_speaker};
use verbdrill_core::events::LogEvents;
use verbdrill_core::i18n::{self, LANGUAGES};
use verbdrill_core::loader::CatalogLoader;
use verbdrill_core::persistence::Persistence;
use verbdrill_core::speech::{NoopSpeaker, SpeechAdapter};
use verbdrill_core::traits::{MemoryStore, Speaker};
use verbdrill_core::{Intent, Session, View};

use super::{open_persistence, resolve_config};
use crate::render::render;
use crate::StorageArgs;

const HELP: &str = "\
  1-4   choose an answer
  n     next verb
  d     show conjugation
  c     close conjugation
  s     speak the verb
  l     change language
  q     quit
";

/// One line of learner input.
#[derive(Debug, PartialEq)]
enum Command {
    Intent(Intent),
    Help,
    Redraw,
    Quit,
    Unknown(String),
}

/// Interpret a line in the context of the screen currently shown.
fn parse_command(line: &str, view: &View) -> Command {
    let input = line.trim();
    match input {
        "" => return Command::Redraw,
        "q" | "quit" => return Command::Quit,
        "h" | "?" | "help" => return Command::Help,
        _ => {}
    }

    if matches!(view, View::LanguagePicker(_)) {
        let code = input.to_lowercase();
        if i18n::is_supported(&code) {
            return Command::Intent(Intent::PickLanguage(code));
        }
        return match input.parse::<usize>() {
            Ok(n) if (1..=LANGUAGES.len()).contains(&n) => {
                Command::Intent(Intent::PickLanguage(LANGUAGES[n - 1].code.to_string()))
            }
            _ => Command::Unknown(input.to_string()),
        };
    }

    let intent = match input {
        "n" | "next" => Intent::RequestNext,
        "d" | "detail" => Intent::OpenDetail,
        "c" | "close" => Intent::CloseDetail,
        "s" | "speak" => Intent::SpeakCurrent,
        "l" | "lang" => Intent::OpenLanguagePicker,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Intent::SelectOption(n - 1),
            _ => return Command::Unknown(input.to_string()),
        },
    };
    Command::Intent(intent)
}

pub async fn execute(
    storage: StorageArgs,
    seed: Option<u64>,
    no_speech: bool,
    ephemeral: bool,
) -> Result<()> {
    let config = resolve_config(&storage)?;
    let events = Arc::new(LogEvents::new());
    info!(
        session = %events.session_id(),
        catalog = %config.catalog,
        data_dir = %config.data_dir.display(),
        ephemeral,
        "starting quiz"
    );

    let persistence = if ephemeral {
        Persistence::new(Arc::new(MemoryStore::new()))
    } else {
        open_persistence(&config)?
    };
    let source = create_catalog_source(&config.catalog)?;
    let loader = CatalogLoader::new(source, persistence.clone());

    let speaker: Arc<dyn Speaker> = if no_speech {
        Arc::new(NoopSpeaker)
    } else {
        create_speaker(&config.speech)
    };
    let speech = SpeechAdapter::new(speaker).with_voice(&config.speech.voice);

    let mut session = Session::new(loader, persistence, speech, events)
        .with_fallback_language(&config.default_language);
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }

    if let Err(e) = session.start().await {
        eprintln!("Could not load catalog from {}: {e}", config.catalog);
        if e.blocks_loading() {
            eprintln!("No quiz until a catalog is available. Press q to quit.");
        }
    }

    let mut stdout = std::io::stdout();
    write!(stdout, "{}", render(&session.view()))?;
    stdout.flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line, &session.view()) {
            Command::Quit => break,
            Command::Help => write!(stdout, "{HELP}")?,
            Command::Redraw => write!(stdout, "{}", render(&session.view()))?,
            Command::Unknown(input) => writeln!(stdout, "  Unknown command: {input} (h for help)")?,
            Command::Intent(intent) => {
                session.handle(intent);
                write!(stdout, "{}", render(&session.view()))?;
            }
        }
        stdout.flush()?;
    }

    session.drain_speech().await;
    Ok(())
}
