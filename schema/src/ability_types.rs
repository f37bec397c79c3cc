use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoStaticStr};

/// The special-power kind carried by every hero.
///
/// The boss adopts one of these as its defence each round; heroes sharing the
/// adopted tag cannot land a basic attack that round.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    CriticalDamage,
    Boosting,
    Heal,
    BlockRevert,
    Revive,
    StealHealth,
    Kamik,
    Protection,
}

impl Ability {
    /// The fixed tag string for this ability, e.g. `"BLOCK_REVERT"`.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Name of the hero class that owns this ability.
    pub fn class_name(self) -> &'static str {
        match self {
            Ability::CriticalDamage => "Warrior",
            Ability::Boosting => "Magic",
            Ability::Heal => "Medic",
            Ability::BlockRevert => "Berserk",
            Ability::Revive => "Witcher",
            Ability::StealHealth => "Hacker",
            Ability::Kamik => "Kamikadze",
            Ability::Protection => "Avenger",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
