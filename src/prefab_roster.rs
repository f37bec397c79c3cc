use crate::battle::state::GameSession;
use crate::boss::Boss;
use crate::errors::{ConfigError, ConfigResult};
use crate::hero::Hero;
use serde::{Deserialize, Serialize};

const STANDARD_ROSTER: &str = include_str!("../data/standard_roster.ron");

/// A predefined boss or hero stat line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantTemplate {
    pub name: String,
    pub health: i32,
    pub damage: i32,
}

/// A predefined hero, one variant per class with its class parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroTemplate {
    Warrior { name: String, health: i32, damage: i32 },
    Magic { name: String, health: i32, damage: i32 },
    Medic { name: String, health: i32, damage: i32, heal_points: i32 },
    Berserk { name: String, health: i32, damage: i32 },
    Witcher { name: String, health: i32, damage: i32 },
    Hacker { name: String, health: i32, damage: i32, steal_amount: i32 },
    Kamikadze { name: String, health: i32 },
    Avenger { name: String, health: i32, damage: i32 },
}

impl HeroTemplate {
    pub fn build(&self) -> ConfigResult<Hero> {
        match self {
            HeroTemplate::Warrior { name, health, damage } => Hero::warrior(name, *health, *damage),
            HeroTemplate::Magic { name, health, damage } => Hero::magic(name, *health, *damage),
            HeroTemplate::Medic { name, health, damage, heal_points } => {
                Hero::medic(name, *health, *damage, *heal_points)
            }
            HeroTemplate::Berserk { name, health, damage } => Hero::berserk(name, *health, *damage),
            HeroTemplate::Witcher { name, health, damage } => Hero::witcher(name, *health, *damage),
            HeroTemplate::Hacker { name, health, damage, steal_amount } => {
                Hero::hacker(name, *health, *damage, *steal_amount)
            }
            HeroTemplate::Kamikadze { name, health } => Hero::kamikadze(name, *health),
            HeroTemplate::Avenger { name, health, damage } => Hero::avenger(name, *health, *damage),
        }
    }
}

/// Boss plus party, in turn order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTemplate {
    pub boss: CombatantTemplate,
    pub heroes: Vec<HeroTemplate>,
}

impl RosterTemplate {
    pub fn parse(source: &str) -> ConfigResult<Self> {
        ron::from_str(source).map_err(|err| ConfigError::MalformedRoster(err.to_string()))
    }

    /// Validates every entry and builds a fresh session at round 0.
    pub fn build_session(&self) -> ConfigResult<GameSession> {
        let boss = Boss::new(&self.boss.name, self.boss.health, self.boss.damage)?;
        let heroes = self
            .heroes
            .iter()
            .map(HeroTemplate::build)
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(GameSession::new(boss, heroes))
    }
}

/// The roster every standard game starts from.
pub fn standard_roster() -> ConfigResult<RosterTemplate> {
    RosterTemplate::parse(STANDARD_ROSTER)
}
