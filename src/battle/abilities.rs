use crate::battle::commands::BattleCommand;
use crate::battle::state::{BattleEvent, GameSession, TurnRng};
use crate::entity::Entity;
use crate::errors::{BattleError, BattleResult, PartyRequirement};
use crate::hero::HeroKind;

/// Warrior critical multiplier bounds, inclusive.
pub const CRITICAL_MULTIPLIER_RANGE: (i32, i32) = (2, 5);
/// Percent chance per activation that an Avenger shields the party.
pub const PROTECTION_CHANCE_PERCENT: i32 = 20;

/// A hero's plain strike on the boss. Witchers never strike.
pub fn calculate_basic_attack(session: &GameSession, hero_index: usize) -> Vec<BattleCommand> {
    let hero = &session.heroes[hero_index];
    if !hero.kind.has_basic_attack() {
        return Vec::new();
    }

    let damage = hero.damage();
    vec![
        BattleCommand::DamageBoss { amount: damage },
        BattleCommand::EmitEvent(BattleEvent::HeroStruck {
            hero: hero_index,
            damage,
            boss_health: (session.boss.health() - damage).max(0),
        }),
    ]
}

/// Effects of the hero's special power against the current session.
///
/// Pure with respect to the session; randomness is drawn from `rng` in a fixed
/// order per variant so scripted tests can steer each decision.
pub fn calculate_special_power(
    session: &GameSession,
    hero_index: usize,
    rng: &mut TurnRng,
) -> BattleResult<Vec<BattleCommand>> {
    let hero = &session.heroes[hero_index];

    let commands = match &hero.kind {
        HeroKind::Warrior => {
            let (low, high) = CRITICAL_MULTIPLIER_RANGE;
            let multiplier = rng.next_in_range(low, high, "critical multiplier");
            let damage = hero.damage().saturating_mul(multiplier);
            vec![
                BattleCommand::DamageBoss { amount: damage },
                BattleCommand::EmitEvent(BattleEvent::CriticalHit {
                    hero: hero_index,
                    multiplier,
                    damage,
                }),
            ]
        }
        HeroKind::Magic { rounds_active, boost_value } => {
            if *rounds_active == 0 {
                return Ok(Vec::new());
            }
            let mut commands: Vec<BattleCommand> = session
                .living_hero_indices()
                .into_iter()
                .map(|hero| BattleCommand::BoostDamage { hero, amount: *boost_value })
                .collect();
            commands.push(BattleCommand::SpendMagicRound { hero: hero_index });
            commands.push(BattleCommand::EmitEvent(BattleEvent::DamageBoosted {
                hero: hero_index,
                boost: *boost_value,
                rounds_left: rounds_active - 1,
            }));
            commands
        }
        HeroKind::Medic { heal_points } => {
            let mut commands = Vec::new();
            for target in session.living_hero_indices() {
                if target == hero_index {
                    continue;
                }
                commands.push(BattleCommand::HealHero { hero: target, amount: *heal_points });
                commands.push(BattleCommand::EmitEvent(BattleEvent::HeroHealed {
                    healer: hero_index,
                    target,
                    amount: *heal_points,
                }));
            }
            commands
        }
        HeroKind::Berserk => {
            // Zero when the boss attack never reached the Berserk this round.
            let damage = hero.round_effects.blocked_damage;
            vec![
                BattleCommand::DamageBoss { amount: damage },
                BattleCommand::EmitEvent(BattleEvent::DamageReverted { hero: hero_index, damage }),
            ]
        }
        HeroKind::Witcher { used_revive } => {
            if *used_revive {
                return Ok(Vec::new());
            }
            let Some(target) = session.heroes.iter().position(|other| !other.is_alive()) else {
                return Ok(Vec::new());
            };
            let health = hero.health();
            vec![
                BattleCommand::SetHeroHealth { hero: target, health },
                BattleCommand::EmitEvent(BattleEvent::HeroRevived {
                    witcher: hero_index,
                    target,
                    health,
                }),
                BattleCommand::SetHeroHealth { hero: hero_index, health: 0 },
                BattleCommand::MarkReviveUsed { hero: hero_index },
            ]
        }
        HeroKind::Hacker { rounds_counter, steal_amount } => {
            let mut commands = vec![BattleCommand::AdvanceHackerCounter { hero: hero_index }];
            let activation = rounds_counter + 1;
            if activation % 2 == 0 && session.boss.is_alive() {
                let living = session.living_hero_indices();
                if !living.is_empty() {
                    let beneficiary = living[rng.pick_index(living.len(), "hacker beneficiary")];
                    commands.push(BattleCommand::DamageBoss { amount: *steal_amount });
                    commands.push(BattleCommand::HealHero {
                        hero: beneficiary,
                        amount: *steal_amount,
                    });
                    commands.push(BattleCommand::EmitEvent(BattleEvent::HealthStolen {
                        hacker: hero_index,
                        beneficiary,
                        amount: *steal_amount,
                    }));
                }
            }
            commands
        }
        HeroKind::Kamikadze { used_explosion } => {
            if *used_explosion || !hero.is_alive() {
                return Ok(Vec::new());
            }
            let direct_hit = rng.coin_flip("kamikadze explosion");
            let damage = if direct_hit { hero.health() } else { hero.health() / 2 };
            vec![
                BattleCommand::DamageBoss { amount: damage },
                BattleCommand::EmitEvent(BattleEvent::Exploded {
                    hero: hero_index,
                    damage,
                    direct_hit,
                }),
                BattleCommand::SetHeroHealth { hero: hero_index, health: 0 },
                BattleCommand::MarkExplosionUsed { hero: hero_index },
            ]
        }
        HeroKind::Avenger => {
            if !rng.percent_chance(PROTECTION_CHANCE_PERCENT, "avenger protection") {
                return Ok(Vec::new());
            }
            let living = session.living_hero_indices();
            if living.is_empty() {
                return Err(BattleError::EmptyParty(PartyRequirement::ProtectionGrant));
            }
            let protected_count = living.len();
            let mut commands: Vec<BattleCommand> = living
                .into_iter()
                .map(|hero| BattleCommand::GrantProtection { hero })
                .collect();
            commands.push(BattleCommand::EmitEvent(BattleEvent::ProtectionGranted {
                hero: hero_index,
                protected_count,
            }));
            commands
        }
    };

    tracing::debug!(
        hero = hero.name(),
        ability = %hero.ability(),
        commands = commands.len(),
        "special power resolved"
    );
    Ok(commands)
}
