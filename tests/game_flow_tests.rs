//! Full-game flow tests.
//!
//! These drive the engine the way a front end would: distribute cards,
//! run rounds, vote, and fire the scheduled pauses.

use mr_white::core::{GameConfig, GameRng, InvalidAction, Phase, PlayerId, Role, Winner};
use mr_white::rules::{GameBuilder, RoundEngine, Transition, Verdict};
use mr_white::session::{GameSession, MemorySettingsStore};
use mr_white::view::{project, Screen};
use mr_white::words::{InlineSource, WordPair};

fn deal(config: GameConfig, seed: u64) -> RoundEngine {
    let mut engine = GameBuilder::new(config)
        .pairs(vec![WordPair::new("Pizza", "Burger").unwrap()])
        .build(&GameRng::new(seed))
        .unwrap();
    for _ in 0..config.player_count {
        engine.reveal_card().unwrap();
        engine.next_card().unwrap();
    }
    engine
}

fn first_alive(engine: &RoundEngine, role: Role) -> Option<PlayerId> {
    engine.state().alive_players().find(|p| p.role == role).map(|p| p.id)
}

fn eliminate(engine: &mut RoundEngine, id: PlayerId) {
    engine.advance_to_voting().unwrap();
    engine.select_vote(id).unwrap();
    let scheduled = engine.submit_vote().unwrap();
    assert_eq!(scheduled.transition, Transition::ResolveRevelation);
    engine.fire(scheduled.ticket).unwrap();
}

/// 3 players, 1 impostor: voting out a civilian hands impostors the win.
#[test]
fn test_three_player_tie_goes_to_impostors() {
    let mut engine = deal(GameConfig::new(3).with_impostors(1), 1);
    engine.start_round().unwrap();

    let civilian = first_alive(&engine, Role::Civilian).unwrap();
    eliminate(&mut engine, civilian);

    assert_eq!(engine.winner(), Some(Winner::Impostors));
    assert_eq!(engine.phase(), &Phase::GameOver);
}

/// Civilians hunt down every villain over several rounds.
#[test]
fn test_civilians_clear_the_table() {
    let mut engine = deal(GameConfig::new(8).with_impostors(2).with_mr_whites(1), 2);

    engine.start_round().unwrap();
    let imp = first_alive(&engine, Role::Impostor).unwrap();
    eliminate(&mut engine, imp);
    assert_eq!(engine.phase(), &Phase::AwaitingRoundStart);

    engine.fire_pending().unwrap();
    let white = first_alive(&engine, Role::MrWhite).unwrap();
    eliminate(&mut engine, white);
    assert_eq!(engine.phase(), &Phase::Guess { guesser: white });
    assert_eq!(engine.submit_guess("Nope"), Ok(false));

    engine.continue_after_round().unwrap();
    assert_eq!(engine.round(), 3);
    let imp = first_alive(&engine, Role::Impostor).unwrap();
    eliminate(&mut engine, imp);

    assert_eq!(engine.winner(), Some(Winner::Civilians));
    assert_eq!(engine.state().alive_counts().civilians, 5);
}

/// Impostors reach parity while Mr. White lives: he may steal, and a miss
/// hands the win to impostors.
#[test]
fn test_failed_steal_gives_impostors_the_win() {
    let mut engine = deal(GameConfig::new(4).with_impostors(1).with_mr_whites(1), 3);
    engine.start_round().unwrap();
    let civilian = first_alive(&engine, Role::Civilian).unwrap();
    eliminate(&mut engine, civilian);

    let white = first_alive(&engine, Role::MrWhite).unwrap();
    assert_eq!(engine.phase(), &Phase::Guess { guesser: white });
    assert!(matches!(project(&engine).screen, Screen::Guess { steal: true, .. }));

    assert_eq!(engine.submit_guess("Sushi"), Ok(false));
    assert_eq!(engine.winner(), Some(Winner::Impostors));
}

#[test]
fn test_successful_steal() {
    let mut engine = deal(GameConfig::new(4).with_impostors(1).with_mr_whites(1), 4);
    engine.start_round().unwrap();
    let civilian = first_alive(&engine, Role::Civilian).unwrap();
    eliminate(&mut engine, civilian);

    let word = engine.state().words.civilian.to_lowercase();
    assert_eq!(engine.submit_guess(&word), Ok(true));
    assert_eq!(engine.winner(), Some(Winner::MrWhite));
}

/// Acting twice or out of turn never corrupts the game.
#[test]
fn test_invalid_actions_are_noops() {
    let mut engine = deal(GameConfig::new(5).with_impostors(1), 5);

    assert!(engine.advance_to_voting().is_err());
    assert!(engine.submit_vote().is_err());
    assert!(engine.submit_guess("x").is_err());
    assert!(engine.evaluate_victory().is_err());
    assert_eq!(engine.phase(), &Phase::AwaitingRoundStart);

    engine.start_round().unwrap();
    engine.advance_to_voting().unwrap();
    assert_eq!(engine.submit_vote(), Err(InvalidAction::NoVoteSelected));

    let civilian = first_alive(&engine, Role::Civilian).unwrap();
    engine.select_vote(civilian).unwrap();
    let scheduled = engine.submit_vote().unwrap();

    // Second submit while the reveal is showing.
    assert!(engine.submit_vote().is_err());
    assert_eq!(engine.state().alive_players().count(), 4);

    engine.fire(scheduled.ticket).unwrap();
    assert!(engine.fire(scheduled.ticket).is_err());

    let next = engine.pending_transition().unwrap();
    assert_eq!(next.transition, Transition::StartRound);
    engine.fire(next.ticket).unwrap();
    assert_eq!(engine.round(), 2);
    assert!(!engine.state().is_alive(civilian));
}

#[test]
fn test_eliminated_players_stay_dead() {
    let mut engine = deal(GameConfig::new(7).with_impostors(2), 6);
    let mut dead = Vec::new();

    while !engine.is_over() {
        engine.start_round().unwrap();
        let civilian = first_alive(&engine, Role::Civilian).unwrap();
        eliminate(&mut engine, civilian);
        dead.push(civilian);
        for id in &dead {
            assert!(!engine.state().is_alive(*id));
            assert!(!engine.speaking_order().contains(id));
        }
        if engine.phase() == &Phase::AwaitingRoundStart {
            engine.fire_pending().unwrap();
        }
    }

    // 5 civilians vs 2 impostors: parity after 3 civilians are out.
    assert_eq!(dead.len(), 3);
    assert_eq!(engine.winner(), Some(Winner::Impostors));
}

#[test]
fn test_victory_verdict_is_reported() {
    let mut engine = deal(GameConfig::new(5).with_impostors(1), 7);
    engine.start_round().unwrap();
    let imp = first_alive(&engine, Role::Impostor).unwrap();
    engine.advance_to_voting().unwrap();
    engine.select_vote(imp).unwrap();
    engine.submit_vote().unwrap();

    assert_eq!(engine.evaluate_victory(), Ok(Verdict::Win(Winner::Civilians)));
}

#[test]
fn test_session_flow_with_fallback_words() {
    let mut session = GameSession::new(MemorySettingsStore::new(), GameRng::new(99));
    let status = session.load_words(&InlineSource("not json".into())).clone();
    assert!(!status.is_ok());

    session.set_config(GameConfig::new(3).with_impostors(1)).unwrap();
    let names = session.name_slots().unwrap();
    assert_eq!(names, vec!["Player 1", "Player 2", "Player 3"]);

    let engine = session.start_game(&names).unwrap();
    let words = engine.state().words.clone();
    assert_ne!(words.civilian.to_lowercase(), words.impostor.to_lowercase());

    let fallback = ["Fanta", "Coca", "Cat", "Dog", "Pizza", "Burger"];
    assert!(fallback.contains(&words.civilian.as_str()));
}
