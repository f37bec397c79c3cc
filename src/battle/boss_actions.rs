use crate::battle::commands::BattleCommand;
use crate::battle::state::{BattleEvent, GameSession, TurnRng};
use crate::entity::Entity;
use crate::errors::{BattleError, BattleResult, PartyRequirement};
use crate::hero::HeroKind;
use schema::Ability;

/// Damage a Berserk can shave off a boss attack; one is picked uniformly.
pub const BERSERK_BLOCK_OPTIONS: [i32; 2] = [5, 10];

/// Picks the boss's defence for the round.
///
/// The pick is uniform over the whole party, fallen heroes included, so the
/// boss can defend against a tag nobody alive still carries.
pub fn choose_defence(session: &GameSession, rng: &mut TurnRng) -> BattleResult<Vec<BattleCommand>> {
    if session.heroes.is_empty() {
        return Err(BattleError::EmptyParty(PartyRequirement::DefenceSelection));
    }
    let index = rng.pick_index(session.heroes.len(), "boss defence");
    let defence = session.heroes[index].ability();
    tracing::debug!(%defence, copied_from = session.hero_name(index), "boss chose defence");
    Ok(vec![BattleCommand::SetDefence(defence)])
}

/// Resolves the boss's strike against every living hero in party order.
///
/// Protection absorbs the whole hit and is spent. A Berserk whose tag is not
/// the current defence blocks part of it; blocking more than the boss deals
/// heals the Berserk.
pub fn calculate_boss_attack(session: &GameSession, rng: &mut TurnRng) -> Vec<BattleCommand> {
    let mut commands = Vec::new();
    let boss_damage = session.boss.damage();

    for (index, hero) in session.heroes.iter().enumerate() {
        if !hero.is_alive() {
            continue;
        }

        if hero.is_protected() {
            commands.push(BattleCommand::ConsumeProtection { hero: index });
            commands.push(BattleCommand::EmitEvent(BattleEvent::ProtectionAbsorbed { hero: index }));
        } else if matches!(hero.kind, HeroKind::Berserk)
            && !session.boss.defends_against(Ability::BlockRevert)
        {
            let blocked = rng.choose(&BERSERK_BLOCK_OPTIONS, "berserk block");
            commands.push(BattleCommand::RecordBlockedDamage { hero: index, amount: blocked });
            commands.push(BattleCommand::EmitEvent(BattleEvent::DamageBlocked { hero: index, blocked }));
            commands.push(BattleCommand::DamageHero {
                hero: index,
                amount: boss_damage - blocked,
            });
        } else {
            commands.push(BattleCommand::DamageHero {
                hero: index,
                amount: boss_damage,
            });
        }
    }

    commands
}
