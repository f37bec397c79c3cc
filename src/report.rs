use crate::battle::state::{EventBus, GameSession};
use crate::entity::Entity;
use schema::Ability;
use serde::Serialize;
use std::fmt;

/// Snapshot of the boss for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BossInfo {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    pub defence: Option<Ability>,
}

/// Snapshot of one hero for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroInfo {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    pub ability: Ability,
    pub is_alive: bool,
}

/// Round number plus the state of every combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsReport {
    pub round_number: u32,
    pub boss: BossInfo,
    pub heroes: Vec<HeroInfo>,
}

impl StatisticsReport {
    pub fn capture(session: &GameSession) -> Self {
        let boss = BossInfo {
            name: session.boss.name().to_string(),
            health: session.boss.health(),
            damage: session.boss.damage(),
            defence: session.boss.defence(),
        };
        let heroes = session
            .heroes
            .iter()
            .map(|hero| HeroInfo {
                name: hero.name().to_string(),
                health: hero.health(),
                damage: hero.damage(),
                ability: hero.ability(),
                is_alive: hero.is_alive(),
            })
            .collect();

        Self {
            round_number: session.round_number,
            boss,
            heroes,
        }
    }
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ROUND {} ----------------", self.round_number)?;
        let defence = self.boss.defence.map_or("None", Ability::tag);
        writeln!(
            f,
            "BOSS {} health: {}, damage: {} defence: {}",
            self.boss.name, self.boss.health, self.boss.damage, defence
        )?;
        for hero in &self.heroes {
            writeln!(
                f,
                "{} {} health: {}, damage: {}",
                hero.ability.class_name(),
                hero.name,
                hero.health,
                hero.damage
            )?;
        }
        Ok(())
    }
}

/// Receives everything a player watching the battle should see.
pub trait Reporter {
    /// State at game start (round 0) and after every round.
    fn report_statistics(&mut self, report: &StatisticsReport);

    /// Events produced by the round that just finished.
    fn report_events(&mut self, events: &EventBus, session: &GameSession);
}

/// Prints the battle to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report_statistics(&mut self, report: &StatisticsReport) {
        print!("{}", report);
    }

    fn report_events(&mut self, events: &EventBus, session: &GameSession) {
        for line in events.formatted_lines(session) {
            println!("  {}", line);
        }
    }
}

/// Keeps everything it is given. Used by tests and by callers that render the
/// battle themselves.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub statistics: Vec<StatisticsReport>,
    pub lines: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn report_statistics(&mut self, report: &StatisticsReport) {
        self.statistics.push(report.clone());
    }

    fn report_events(&mut self, events: &EventBus, session: &GameSession) {
        self.lines.extend(events.formatted_lines(session));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boss::Boss;
    use crate::hero::Hero;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_statistics_render_one_line_per_entity() {
        let session = GameSession::new(
            Boss::new("Splinter", 1000, 50).unwrap(),
            vec![
                Hero::warrior("Django", 280, 10).unwrap(),
                Hero::kamikadze("Kami", 400).unwrap(),
            ],
        );
        let report = StatisticsReport::capture(&session);

        assert_eq!(
            report.to_string(),
            "ROUND 0 ----------------\n\
             BOSS Splinter health: 1000, damage: 50 defence: None\n\
             Warrior Django health: 280, damage: 10\n\
             Kamikadze Kami health: 400, damage: 0\n"
        );
    }

    #[test]
    fn test_capture_marks_fallen_heroes() {
        let mut session = GameSession::new(
            Boss::new("Splinter", 1000, 50).unwrap(),
            vec![Hero::warrior("Django", 280, 10).unwrap()],
        );
        session.heroes[0].set_health(0);
        let report = StatisticsReport::capture(&session);
        assert!(!report.heroes[0].is_alive);
    }
}
