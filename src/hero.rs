use crate::entity::{Entity, Vitals};
use crate::errors::{ConfigError, ConfigResult};
use schema::Ability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of activations a fresh Magic gets before its boost runs out.
pub const MAGIC_ROUNDS_ACTIVE: u8 = 4;
/// Damage added to every living hero per Magic activation.
pub const MAGIC_BOOST_VALUE: i32 = 5;

/// Variant discriminator plus whatever state that variant mutates over a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroKind {
    Warrior,
    Magic { rounds_active: u8, boost_value: i32 },
    Medic { heal_points: i32 },
    Berserk,
    Witcher { used_revive: bool },
    Hacker { rounds_counter: u32, steal_amount: i32 },
    Kamikadze { used_explosion: bool },
    Avenger,
}

impl HeroKind {
    pub fn magic() -> Self {
        HeroKind::Magic {
            rounds_active: MAGIC_ROUNDS_ACTIVE,
            boost_value: MAGIC_BOOST_VALUE,
        }
    }

    pub fn ability(&self) -> Ability {
        match self {
            HeroKind::Warrior => Ability::CriticalDamage,
            HeroKind::Magic { .. } => Ability::Boosting,
            HeroKind::Medic { .. } => Ability::Heal,
            HeroKind::Berserk => Ability::BlockRevert,
            HeroKind::Witcher { .. } => Ability::Revive,
            HeroKind::Hacker { .. } => Ability::StealHealth,
            HeroKind::Kamikadze { .. } => Ability::Kamik,
            HeroKind::Avenger => Ability::Protection,
        }
    }

    /// Witcher spends its turns on revival, never on basic attacks.
    pub fn has_basic_attack(&self) -> bool {
        !matches!(self, HeroKind::Witcher { .. })
    }
}

/// Effects that only live for the round in which they were produced.
/// Cleared by the engine before the boss acts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEffects {
    /// Damage a Berserk blocked from this round's boss attack.
    pub blocked_damage: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    vitals: Vitals,
    pub kind: HeroKind,
    is_protected: bool,
    pub round_effects: RoundEffects,
}

impl Hero {
    pub fn new(vitals: Vitals, kind: HeroKind) -> ConfigResult<Self> {
        let parameter = match &kind {
            HeroKind::Magic { boost_value, .. } => Some(("boost_value", *boost_value)),
            HeroKind::Medic { heal_points } => Some(("heal_points", *heal_points)),
            HeroKind::Hacker { steal_amount, .. } => Some(("steal_amount", *steal_amount)),
            _ => None,
        };
        if let Some((parameter, value)) = parameter {
            if value < 0 {
                return Err(ConfigError::NegativeParameter {
                    name: vitals.name().to_string(),
                    parameter,
                    value,
                });
            }
        }
        Ok(Self {
            vitals,
            kind,
            is_protected: false,
            round_effects: RoundEffects::default(),
        })
    }

    pub fn warrior(name: &str, health: i32, damage: i32) -> ConfigResult<Self> {
        Self::new(Vitals::new(name, health, damage)?, HeroKind::Warrior)
    }

    pub fn magic(name: &str, health: i32, damage: i32) -> ConfigResult<Self> {
        Self::new(Vitals::new(name, health, damage)?, HeroKind::magic())
    }

    pub fn medic(name: &str, health: i32, damage: i32, heal_points: i32) -> ConfigResult<Self> {
        Self::new(Vitals::new(name, health, damage)?, HeroKind::Medic { heal_points })
    }

    pub fn berserk(name: &str, health: i32, damage: i32) -> ConfigResult<Self> {
        Self::new(Vitals::new(name, health, damage)?, HeroKind::Berserk)
    }

    pub fn witcher(name: &str, health: i32, damage: i32) -> ConfigResult<Self> {
        Self::new(
            Vitals::new(name, health, damage)?,
            HeroKind::Witcher { used_revive: false },
        )
    }

    pub fn hacker(name: &str, health: i32, damage: i32, steal_amount: i32) -> ConfigResult<Self> {
        Self::new(
            Vitals::new(name, health, damage)?,
            HeroKind::Hacker { rounds_counter: 0, steal_amount },
        )
    }

    /// Kamikadze deals no basic damage until something boosts it.
    pub fn kamikadze(name: &str, health: i32) -> ConfigResult<Self> {
        Self::new(
            Vitals::new(name, health, 0)?,
            HeroKind::Kamikadze { used_explosion: false },
        )
    }

    pub fn avenger(name: &str, health: i32, damage: i32) -> ConfigResult<Self> {
        Self::new(Vitals::new(name, health, damage)?, HeroKind::Avenger)
    }

    pub fn ability(&self) -> Ability {
        self.kind.ability()
    }

    pub fn is_protected(&self) -> bool {
        self.is_protected
    }

    pub fn grant_protection(&mut self) {
        self.is_protected = true;
    }

    /// Clears protection, returning whether there was any to spend.
    pub fn consume_protection(&mut self) -> bool {
        std::mem::replace(&mut self.is_protected, false)
    }

    pub fn clear_round_effects(&mut self) {
        self.round_effects = RoundEffects::default();
    }
}

impl Entity for Hero {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ability().class_name(), self.vitals)
    }
}
