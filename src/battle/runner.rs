use crate::battle::engine::{check_game_over, play_round};
use crate::battle::state::{BattleEvent, EventBus, GameSession, GameState, TurnRng};
use crate::errors::BattleResult;
use crate::prefab_roster::standard_roster;
use crate::report::{ConsoleReporter, Reporter, StatisticsReport};

/// Runs rounds until one side is wiped out.
///
/// The outcome is checked before every round, including before the first, so
/// a session that starts decided never plays a round. The reporter sees the
/// opening statistics, then each round's events and statistics, then a
/// closing `BattleEnded` event.
pub fn run_game(
    session: &mut GameSession,
    rng: &mut TurnRng,
    reporter: &mut dyn Reporter,
) -> BattleResult<GameState> {
    reporter.report_statistics(&StatisticsReport::capture(session));

    loop {
        let state = check_game_over(session);
        if state.is_over() {
            session.game_state = state;
            break;
        }

        let events = play_round(session, rng)?;
        reporter.report_events(&events, session);
        reporter.report_statistics(&StatisticsReport::capture(session));
    }

    let outcome = session.game_state;
    tracing::info!(?outcome, rounds = session.round_number, "battle finished");
    let mut closing = EventBus::new();
    closing.push(BattleEvent::BattleEnded { outcome });
    reporter.report_events(&closing, session);
    Ok(outcome)
}

/// Builds the standard raid and plays it out on the console.
pub fn start_game() -> BattleResult<GameState> {
    start_game_with(TurnRng::new_random(), &mut ConsoleReporter)
}

/// Standard raid with a caller-supplied random source and reporter.
pub fn start_game_with(mut rng: TurnRng, reporter: &mut dyn Reporter) -> BattleResult<GameState> {
    let mut session = standard_roster()?.build_session()?;
    tracing::info!(
        boss = %session.boss,
        heroes = session.heroes.len(),
        "starting raid"
    );
    run_game(&mut session, &mut rng, reporter)
}
