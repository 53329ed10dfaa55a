//! Terminal front end: pass the keyboard around the table.
//!
//! Usage: `mr-white [words.json] [settings.json]`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use mr_white::core::GameRng;
use mr_white::session::{FileSettingsStore, GameSession, STORAGE_KEY};
use mr_white::view::{project, EndSummary, Screen};
use mr_white::words::JsonFileSource;
use mr_white::{GameConfig, RoundEngine};
use tracing_subscriber::EnvFilter;

type Session = GameSession<FileSettingsStore>;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let words_path = args.next().unwrap_or_else(|| "words.json".to_string());
    let settings_path = args.next().unwrap_or_else(|| format!("{}.json", STORAGE_KEY));

    let mut session = GameSession::new(FileSettingsStore::new(settings_path), GameRng::from_entropy());
    println!("🤐 Mr. White");
    println!("{}", session.load_words(&JsonFileSource::new(words_path)).info());

    let mut input = io::stdin().lock();
    loop {
        if !setup(&mut session, &mut input)? {
            return Ok(());
        }
        let Some(engine) = session.game_mut() else {
            continue;
        };
        if !distribute(engine, &mut input)? || !play(engine, &mut input)? {
            return Ok(());
        }
        match prompt(&mut input, "Play again? [Y/n] ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("n") => return Ok(()),
            Some(_) => session.restart(),
            None => return Ok(()),
        }
    }
}

/// Print `label` and read one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Config and names screens. Returns false when input ended.
fn setup(session: &mut Session, input: &mut impl BufRead) -> io::Result<bool> {
    loop {
        let current = session.config();
        println!();
        println!("{}", current.summary());
        let label = format!(
            "Players, impostors, Mr. Whites [{} {} {}]: ",
            current.player_count, current.impostor_count, current.mr_white_count
        );
        let Some(line) = prompt(input, &label)? else {
            return Ok(false);
        };

        let config = if line.trim().is_empty() {
            current
        } else {
            let numbers: Vec<usize> = line.split_whitespace().filter_map(|n| n.parse().ok()).collect();
            match numbers.as_slice() {
                [players, impostors, mr_whites] => GameConfig::new(*players)
                    .with_impostors(*impostors)
                    .with_mr_whites(*mr_whites),
                _ => {
                    println!("⚠️ Enter three numbers.");
                    continue;
                }
            }
        };
        if let Err(e) = session.set_config(config) {
            println!("{}", e);
            continue;
        }

        let slots = match session.name_slots() {
            Ok(slots) => slots,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let mut names = Vec::with_capacity(slots.len());
        for (i, default) in slots.iter().enumerate() {
            let Some(name) = prompt(input, &format!("Player {} [{}]: ", i + 1, default))? else {
                return Ok(false);
            };
            names.push(if name.trim().is_empty() { default.clone() } else { name });
        }

        match session.start_game(&names) {
            Ok(_) => return Ok(true),
            Err(e) => println!("{}", e),
        }
    }
}

/// Pass the device so everyone reads their card in private.
fn distribute(engine: &mut RoundEngine, input: &mut impl BufRead) -> io::Result<bool> {
    let total = engine.state().player_count();
    for _ in 0..total {
        let Screen::Card { name, position, total, .. } = project(engine).screen else {
            break;
        };
        clear_screen();
        if prompt(input, &format!("({}/{}) Hand over to {} and press Enter to see your card.", position, total, name))?
            .is_none()
        {
            return Ok(false);
        }
        match engine.reveal_card() {
            Ok(player) => println!("\n{}\n", player.card_text()),
            Err(e) => println!("{}", e),
        }
        if prompt(input, "Memorize it, then press Enter.")?.is_none() {
            return Ok(false);
        }
        if let Err(e) = engine.next_card() {
            println!("{}", e);
        }
    }
    clear_screen();
    Ok(true)
}

/// Wait out the pending pause, then perform it.
fn run_pending(engine: &mut RoundEngine) {
    if let Some(scheduled) = engine.pending_transition() {
        std::thread::sleep(scheduled.delay);
        if let Err(e) = engine.fire(scheduled.ticket) {
            tracing::debug!(error = %e, "scheduled transition skipped");
        }
    }
}

/// Rounds until someone wins. Returns false when input ended.
fn play(engine: &mut RoundEngine, input: &mut impl BufRead) -> io::Result<bool> {
    loop {
        let view = project(engine);
        match view.screen {
            Screen::Card { .. } => return Ok(true),
            Screen::AwaitingRoundStart => {
                if engine.pending_transition().is_some() {
                    run_pending(engine);
                } else if let Err(e) = engine.start_round() {
                    println!("{}", e);
                    return Ok(true);
                }
            }
            Screen::Clues { lines } => {
                println!("\n== {} ==  {}", view.stats.title(), view.stats.line());
                for line in lines {
                    println!("#{} • {}: \"{}\"", line.position, line.name, line.clue);
                }
                if prompt(input, "Press Enter to vote.")?.is_none() {
                    return Ok(false);
                }
                if let Err(e) = engine.advance_to_voting() {
                    println!("{}", e);
                }
            }
            Screen::Voting { targets, .. } => {
                for (i, target) in targets.iter().enumerate() {
                    println!("  [{}] {}", i + 1, target.name);
                }
                let Some(choice) = prompt(input, "Eliminate: ")? else {
                    return Ok(false);
                };
                let picked = choice
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| targets.get(i));
                match picked {
                    Some(target) => {
                        if let Err(e) = engine.select_vote(target.id).and_then(|_| engine.submit_vote().map(|_| ())) {
                            println!("{}", e);
                        }
                    }
                    None => println!("⚠️ Pick a number from the list."),
                }
            }
            Screen::Revelation { name, role, word } => {
                println!("\n❌ {} is eliminated: {} {} {}", name, role.emoji(), role, word);
                run_pending(engine);
            }
            Screen::Guess { guesser, steal } => {
                if steal {
                    println!("\n🤐 {} can steal the win by naming the Civilians' word!", guesser);
                } else {
                    println!("\n🤐 {} has one guess at the Civilians' word.", guesser);
                }
                let Some(guess) = prompt(input, "Guess: ")? else {
                    return Ok(false);
                };
                match engine.submit_guess(&guess) {
                    Ok(true) => println!("✅ Correct!"),
                    Ok(false) => println!("❌ Wrong."),
                    Err(e) => println!("{}", e),
                }
            }
            Screen::GameOver(summary) => {
                print_summary(&summary);
                return Ok(true);
            }
        }
    }
}

fn print_summary(summary: &EndSummary) {
    println!("\n{}\n", summary.message);
    println!("{:<20} {:<14} Status", "Player", "Role");
    for row in &summary.players {
        let role = format!("{} {}", row.role.emoji(), row.role);
        println!("{:<20} {:<14} {}", row.name, role, if row.alive { "✅" } else { "❌" });
    }
    println!("\n📌 Civilians' word: {}\n", summary.civilian_word);
}
