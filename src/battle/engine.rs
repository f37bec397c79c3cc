use crate::battle::abilities::{calculate_basic_attack, calculate_special_power};
use crate::battle::boss_actions::{calculate_boss_attack, choose_defence};
use crate::battle::commands::execute_command_batch;
use crate::battle::state::{BattleEvent, EventBus, GameSession, GameState, TurnRng};
use crate::entity::Entity;
use crate::errors::BattleResult;

/// Decides whether the battle is over.
///
/// The boss is checked first, so a round that kills both sides goes to the
/// heroes. A party with no living heroes (including an empty one) loses.
pub fn check_game_over(session: &GameSession) -> GameState {
    if !session.boss.is_alive() {
        return GameState::HeroesWon;
    }
    if session.heroes.iter().all(|hero| !hero.is_alive()) {
        return GameState::BossWon;
    }
    GameState::Running
}

/// Main entry point for round resolution.
/// Executes one complete round and returns the events it produced.
/// A session that has already ended is left untouched.
pub fn play_round(session: &mut GameSession, rng: &mut TurnRng) -> BattleResult<EventBus> {
    let mut bus = EventBus::new();
    if session.game_state.is_over() {
        return Ok(bus);
    }

    // 1. Initialization
    initialize_round(session, &mut bus);

    // 2. Boss Defence
    let commands = choose_defence(session, rng)?;
    execute_command_batch(commands, session, &mut bus)?;

    // 3. Boss Attack
    let commands = calculate_boss_attack(session, rng);
    execute_command_batch(commands, session, &mut bus)?;

    // 4. Hero Phase
    for hero_index in 0..session.heroes.len() {
        execute_hero_turn(session, hero_index, &mut bus, rng)?;
    }

    // 5. Finalization
    bus.push(BattleEvent::RoundEnded);
    bus.log_debug(session.round_number);
    Ok(bus)
}

fn initialize_round(session: &mut GameSession, bus: &mut EventBus) {
    session.round_number += 1;
    for hero in &mut session.heroes {
        hero.clear_round_effects();
    }
    tracing::debug!(round = session.round_number, "round started");
    bus.push(BattleEvent::RoundStarted {
        round_number: session.round_number,
    });
}

/// A living hero strikes unless the boss defends against its tag, then uses
/// its special power either way.
fn execute_hero_turn(
    session: &mut GameSession,
    hero_index: usize,
    bus: &mut EventBus,
    rng: &mut TurnRng,
) -> BattleResult<()> {
    let hero = &session.heroes[hero_index];
    if !hero.is_alive() || !session.boss.is_alive() {
        return Ok(());
    }

    let ability = hero.ability();
    if session.boss.defends_against(ability) {
        bus.push(BattleEvent::AttackParried {
            hero: hero_index,
            defence: ability,
        });
    } else {
        let commands = calculate_basic_attack(session, hero_index);
        execute_command_batch(commands, session, bus)?;
    }

    let commands = calculate_special_power(session, hero_index, rng)?;
    execute_command_batch(commands, session, bus)
}
