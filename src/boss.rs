use crate::entity::{Entity, Vitals};
use crate::errors::ConfigResult;
use schema::Ability;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    vitals: Vitals,
    defence: Option<Ability>,
}

impl Boss {
    pub fn new(name: &str, health: i32, damage: i32) -> ConfigResult<Self> {
        Ok(Self {
            vitals: Vitals::new(name, health, damage)?,
            defence: None,
        })
    }

    /// Ability tag the boss is immune to this round. `None` until the first round.
    pub fn defence(&self) -> Option<Ability> {
        self.defence
    }

    pub fn set_defence(&mut self, defence: Ability) {
        self.defence = Some(defence);
    }

    /// True when a hero with `ability` has its basic attack blocked.
    pub fn defends_against(&self, ability: Ability) -> bool {
        self.defence == Some(ability)
    }
}

impl Entity for Boss {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl fmt::Display for Boss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.defence {
            Some(defence) => write!(f, "BOSS {} defence: {}", self.vitals, defence),
            None => write!(f, "BOSS {} defence: None", self.vitals),
        }
    }
}
