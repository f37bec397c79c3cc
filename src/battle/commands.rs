use crate::battle::state::{BattleEvent, EventBus, GameSession};
use crate::entity::Entity;
use crate::errors::{BattleError, BattleResult};
use crate::hero::{Hero, HeroKind};
use schema::Ability;

/// Atomic commands representing final state changes.
///
/// Calculators read the session and return commands; only
/// [`execute_command`] mutates.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleCommand {
    // Boss modifications
    SetDefence(Ability),
    DamageBoss { amount: i32 },

    // Hero modifications
    DamageHero { hero: usize, amount: i32 },
    HealHero { hero: usize, amount: i32 },
    SetHeroHealth { hero: usize, health: i32 },
    BoostDamage { hero: usize, amount: i32 },
    GrantProtection { hero: usize },
    ConsumeProtection { hero: usize },
    RecordBlockedDamage { hero: usize, amount: i32 },

    // Ability bookkeeping
    SpendMagicRound { hero: usize },
    MarkReviveUsed { hero: usize },
    AdvanceHackerCounter { hero: usize },
    MarkExplosionUsed { hero: usize },

    // Battle flow
    EmitEvent(BattleEvent),
}

pub fn execute_command_batch(
    commands: Vec<BattleCommand>,
    session: &mut GameSession,
    bus: &mut EventBus,
) -> BattleResult<()> {
    for command in commands {
        execute_command(command, session, bus)?;
    }
    Ok(())
}

/// Helper function to execute commands that operate on a single hero
fn execute_hero_command<F>(hero: usize, session: &mut GameSession, operation: F) -> BattleResult<()>
where
    F: FnOnce(&mut Hero),
{
    let target = session
        .heroes
        .get_mut(hero)
        .ok_or(BattleError::InvalidHeroIndex(hero))?;
    operation(target);
    Ok(())
}

/// Applies a health change to a hero and reports a fall if it dropped to zero.
fn execute_hero_health_command<F>(
    hero: usize,
    session: &mut GameSession,
    bus: &mut EventBus,
    operation: F,
) -> BattleResult<()>
where
    F: FnOnce(&mut Hero),
{
    let target = session
        .heroes
        .get_mut(hero)
        .ok_or(BattleError::InvalidHeroIndex(hero))?;
    let was_alive = target.is_alive();
    operation(target);
    if was_alive && !target.is_alive() {
        bus.push(BattleEvent::HeroFallen { hero });
    }
    Ok(())
}

pub fn execute_command(
    command: BattleCommand,
    session: &mut GameSession,
    bus: &mut EventBus,
) -> BattleResult<()> {
    match command {
        BattleCommand::EmitEvent(event) => {
            bus.push(event);
            Ok(())
        }
        BattleCommand::SetDefence(defence) => {
            session.boss.set_defence(defence);
            bus.push(BattleEvent::DefenceChosen { defence });
            Ok(())
        }
        BattleCommand::DamageBoss { amount } => {
            let was_alive = session.boss.is_alive();
            session.boss.take_damage(amount);
            if was_alive && !session.boss.is_alive() {
                bus.push(BattleEvent::BossDefeated);
            }
            Ok(())
        }
        BattleCommand::DamageHero { hero, amount } => {
            let target = session
                .heroes
                .get_mut(hero)
                .ok_or(BattleError::InvalidHeroIndex(hero))?;
            let was_alive = target.is_alive();
            target.take_damage(amount);
            bus.push(BattleEvent::BossStruck {
                hero,
                damage: amount,
                remaining_health: target.health(),
            });
            if was_alive && !target.is_alive() {
                bus.push(BattleEvent::HeroFallen { hero });
            }
            Ok(())
        }
        BattleCommand::HealHero { hero, amount } => {
            execute_hero_command(hero, session, |target| target.heal(amount))
        }
        BattleCommand::SetHeroHealth { hero, health } => {
            execute_hero_health_command(hero, session, bus, |target| target.set_health(health))
        }
        BattleCommand::BoostDamage { hero, amount } => execute_hero_command(hero, session, |target| {
            target.set_damage(target.damage().saturating_add(amount))
        }),
        BattleCommand::GrantProtection { hero } => {
            execute_hero_command(hero, session, |target| target.grant_protection())
        }
        BattleCommand::ConsumeProtection { hero } => execute_hero_command(hero, session, |target| {
            target.consume_protection();
        }),
        BattleCommand::RecordBlockedDamage { hero, amount } => {
            execute_hero_command(hero, session, |target| target.round_effects.blocked_damage = amount)
        }
        BattleCommand::SpendMagicRound { hero } => execute_hero_command(hero, session, |target| {
            if let HeroKind::Magic { rounds_active, .. } = &mut target.kind {
                *rounds_active = rounds_active.saturating_sub(1);
            }
        }),
        BattleCommand::MarkReviveUsed { hero } => execute_hero_command(hero, session, |target| {
            if let HeroKind::Witcher { used_revive } = &mut target.kind {
                *used_revive = true;
            }
        }),
        BattleCommand::AdvanceHackerCounter { hero } => execute_hero_command(hero, session, |target| {
            if let HeroKind::Hacker { rounds_counter, .. } = &mut target.kind {
                *rounds_counter += 1;
            }
        }),
        BattleCommand::MarkExplosionUsed { hero } => execute_hero_command(hero, session, |target| {
            if let HeroKind::Kamikadze { used_explosion } = &mut target.kind {
                *used_explosion = true;
            }
        }),
    }
}
