use crate::battle::abilities::calculate_special_power;
use crate::battle::boss_actions::calculate_boss_attack;
use crate::battle::commands::execute_command_batch;
use crate::battle::state::{EventBus, GameSession, TurnRng};
use crate::boss::Boss;
use crate::entity::Vitals;
use crate::hero::{Hero, HeroKind};

/// A builder for creating test heroes with common defaults.
///
/// # Example
/// ```ignore
/// let medic = TestHeroBuilder::new(HeroKind::Medic { heal_points: 15 })
///     .with_health(50)
///     .build();
/// ```
pub struct TestHeroBuilder {
    kind: HeroKind,
    health: i32,
    damage: i32,
}

impl TestHeroBuilder {
    /// Creates a builder with 100 health and 10 damage.
    pub fn new(kind: HeroKind) -> Self {
        Self {
            kind,
            health: 100,
            damage: 10,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    /// Builds the `Hero`, named after its class.
    pub fn build(self) -> Hero {
        let name = self.kind.ability().class_name();
        let vitals = match Vitals::new(name, self.health, self.damage) {
            Ok(vitals) => vitals,
            Err(err) => panic!("Failed to build test vitals: {}", err),
        };
        match Hero::new(vitals, self.kind) {
            Ok(hero) => hero,
            Err(err) => panic!("Failed to build test hero: {}", err),
        }
    }
}

pub fn warrior() -> TestHeroBuilder {
    TestHeroBuilder::new(HeroKind::Warrior)
}

pub fn medic(heal_points: i32) -> TestHeroBuilder {
    TestHeroBuilder::new(HeroKind::Medic { heal_points })
}

pub fn berserk() -> TestHeroBuilder {
    TestHeroBuilder::new(HeroKind::Berserk)
}

pub fn witcher() -> TestHeroBuilder {
    TestHeroBuilder::new(HeroKind::Witcher { used_revive: false }).with_damage(0)
}

pub fn hacker(steal_amount: i32) -> TestHeroBuilder {
    TestHeroBuilder::new(HeroKind::Hacker {
        rounds_counter: 0,
        steal_amount,
    })
}

pub fn kamikadze() -> TestHeroBuilder {
    TestHeroBuilder::new(HeroKind::Kamikadze {
        used_explosion: false,
    })
    .with_damage(0)
}

pub fn avenger() -> TestHeroBuilder {
    TestHeroBuilder::new(HeroKind::Avenger)
}

/// Creates a session at round 0 against a boss with the given stats.
pub fn create_test_session(boss_health: i32, boss_damage: i32, heroes: Vec<Hero>) -> GameSession {
    let boss = match Boss::new("Splinter", boss_health, boss_damage) {
        Ok(boss) => boss,
        Err(err) => panic!("Failed to build test boss: {}", err),
    };
    GameSession::new(boss, heroes)
}

/// A `TurnRng` that panics on any draw. Proves a code path is deterministic.
pub fn no_rng() -> TurnRng {
    TurnRng::new_for_test(Vec::new())
}

/// Runs one hero's special power against the session and returns its events.
pub fn apply_special(session: &mut GameSession, hero: usize, rng: &mut TurnRng) -> EventBus {
    let mut bus = EventBus::new();
    let commands = match calculate_special_power(session, hero, rng) {
        Ok(commands) => commands,
        Err(err) => panic!("Special power failed for hero {}: {}", hero, err),
    };
    if let Err(err) = execute_command_batch(commands, session, &mut bus) {
        panic!("Special power commands failed for hero {}: {}", hero, err);
    }
    bus
}

/// Runs the boss's attack against the session and returns its events.
pub fn apply_boss_attack(session: &mut GameSession, rng: &mut TurnRng) -> EventBus {
    let mut bus = EventBus::new();
    let commands = calculate_boss_attack(session, rng);
    if let Err(err) = execute_command_batch(commands, session, &mut bus) {
        panic!("Boss attack commands failed: {}", err);
    }
    bus
}
