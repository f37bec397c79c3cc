use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name, health and damage shared by the boss and every hero.
///
/// Health is clamped at zero on every write, so a stored value is never
/// negative. Damage is unrestricted after construction; Magic boosts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    name: String,
    health: i32,
    damage: i32,
}

impl Vitals {
    pub fn new(name: impl Into<String>, health: i32, damage: i32) -> ConfigResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if health < 0 {
            return Err(ConfigError::NegativeHealth { name, value: health });
        }
        if damage < 0 {
            return Err(ConfigError::NegativeDamage { name, value: damage });
        }
        Ok(Self { name, health, damage })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn set_health(&mut self, value: i32) {
        self.health = value.max(0);
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn set_damage(&mut self, value: i32) {
        self.damage = value;
    }
}

impl fmt::Display for Vitals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} health: {}, damage: {}", self.name, self.health, self.damage)
    }
}

/// Common capability of everything that fights.
pub trait Entity {
    fn vitals(&self) -> &Vitals;
    fn vitals_mut(&mut self) -> &mut Vitals;

    fn name(&self) -> &str {
        self.vitals().name()
    }

    fn health(&self) -> i32 {
        self.vitals().health()
    }

    fn set_health(&mut self, value: i32) {
        self.vitals_mut().set_health(value);
    }

    fn damage(&self) -> i32 {
        self.vitals().damage()
    }

    fn set_damage(&mut self, value: i32) {
        self.vitals_mut().set_damage(value);
    }

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Subtracts `amount` from health. A negative amount heals.
    fn take_damage(&mut self, amount: i32) {
        let next = self.health().saturating_sub(amount);
        self.set_health(next);
    }

    fn heal(&mut self, amount: i32) {
        let next = self.health().saturating_add(amount);
        self.set_health(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_health_is_clamped_on_write() {
        let mut vitals = Vitals::new("Dummy", 10, 1).unwrap();
        vitals.set_health(-25);
        assert_eq!(vitals.health(), 0);
    }

    #[test]
    fn test_rejects_negative_starting_values() {
        assert_eq!(
            Vitals::new("Dummy", -1, 0),
            Err(ConfigError::NegativeHealth { name: "Dummy".to_string(), value: -1 })
        );
        assert_eq!(
            Vitals::new("Dummy", 1, -3),
            Err(ConfigError::NegativeDamage { name: "Dummy".to_string(), value: -3 })
        );
        assert_eq!(Vitals::new("  ", 1, 1), Err(ConfigError::EmptyName));
    }

    #[test]
    fn test_zero_health_is_a_valid_starting_value() {
        let vitals = Vitals::new("Fallen", 0, 0).unwrap();
        assert_eq!(vitals.health(), 0);
    }

    #[test]
    fn test_display_lists_name_health_and_damage() {
        let vitals = Vitals::new("Django", 280, 10).unwrap();
        assert_eq!(vitals.to_string(), "Django health: 280, damage: 10");
    }
}
