use crate::boss::Boss;
use crate::entity::Entity;
use crate::hero::Hero;
use schema::Ability;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
pub enum GameState {
    Running,
    HeroesWon,
    BossWon,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Running)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Round Management
    RoundStarted {
        round_number: u32,
    },
    DefenceChosen {
        defence: Ability,
    },
    RoundEnded,

    // Boss Attack
    BossStruck {
        hero: usize,
        damage: i32,
        remaining_health: i32,
    },
    DamageBlocked {
        hero: usize,
        blocked: i32,
    },
    ProtectionAbsorbed {
        hero: usize,
    },
    HeroFallen {
        hero: usize,
    },

    // Hero Attacks
    HeroStruck {
        hero: usize,
        damage: i32,
        boss_health: i32,
    },
    AttackParried {
        hero: usize,
        defence: Ability,
    },
    BossDefeated,

    // Special Powers
    CriticalHit {
        hero: usize,
        multiplier: i32,
        damage: i32,
    },
    DamageBoosted {
        hero: usize,
        boost: i32,
        rounds_left: u8,
    },
    HeroHealed {
        healer: usize,
        target: usize,
        amount: i32,
    },
    DamageReverted {
        hero: usize,
        damage: i32,
    },
    HeroRevived {
        witcher: usize,
        target: usize,
        health: i32,
    },
    HealthStolen {
        hacker: usize,
        beneficiary: usize,
        amount: i32,
    },
    Exploded {
        hero: usize,
        damage: i32,
        direct_hit: bool,
    },
    ProtectionGranted {
        hero: usize,
        protected_count: usize,
    },

    // Battle End
    BattleEnded {
        outcome: GameState,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle context.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, session: &GameSession) -> Option<String> {
        match self {
            // === Round Management Events ===
            BattleEvent::RoundStarted { round_number } => {
                Some(format!("=== Round {} ===", round_number))
            }
            BattleEvent::DefenceChosen { defence } => Some(format!(
                "{} raises a defence against {}",
                session.boss.name(),
                defence
            )),
            BattleEvent::RoundEnded => None,

            // === Boss Attack Events ===
            BattleEvent::BossStruck { hero, damage, remaining_health } => {
                let name = session.hero_name(*hero);
                if *damage < 0 {
                    Some(format!("{} turned the blow into {} health ({} left)", name, -damage, remaining_health))
                } else {
                    Some(format!("{} took {} damage ({} left)", name, damage, remaining_health))
                }
            }
            BattleEvent::DamageBlocked { hero, blocked } => Some(format!(
                "{} blocked {} damage",
                session.hero_name(*hero),
                blocked
            )),
            BattleEvent::ProtectionAbsorbed { hero } => Some(format!(
                "{} is protected and takes no damage!",
                session.hero_name(*hero)
            )),
            BattleEvent::HeroFallen { hero } => {
                Some(format!("{} has fallen!", session.hero_name(*hero)))
            }

            // === Hero Attack Events ===
            BattleEvent::HeroStruck { .. } => {
                None // Silent - basic attacks happen every round
            }
            BattleEvent::AttackParried { hero, defence } => Some(format!(
                "{}'s attack was parried by the {} defence",
                session.hero_name(*hero),
                defence
            )),
            BattleEvent::BossDefeated => {
                Some(format!("{} has been defeated!", session.boss.name()))
            }

            // === Special Power Events ===
            BattleEvent::CriticalHit { hero, damage, .. } => Some(format!(
                "Warrior {} hit critically: {}",
                session.hero_name(*hero),
                damage
            )),
            BattleEvent::DamageBoosted { hero, boost, .. } => Some(format!(
                "Magic {} boosted heroes by {}",
                session.hero_name(*hero),
                boost
            )),
            BattleEvent::HeroHealed { .. } => {
                None // Silent - medics heal every round
            }
            BattleEvent::DamageReverted { hero, damage } => Some(format!(
                "Berserk {} reverted: {}",
                session.hero_name(*hero),
                damage
            )),
            BattleEvent::HeroRevived { witcher, target, .. } => Some(format!(
                "Witcher {} revived {} and died",
                session.hero_name(*witcher),
                session.hero_name(*target)
            )),
            BattleEvent::HealthStolen { hacker, beneficiary, amount } => Some(format!(
                "Hacker {} stole {} and gave it to {}",
                session.hero_name(*hacker),
                amount,
                session.hero_name(*beneficiary)
            )),
            BattleEvent::Exploded { hero, damage, direct_hit } => {
                let name = session.hero_name(*hero);
                if *direct_hit {
                    Some(format!("Kamikadze {} exploded for {}", name, damage))
                } else {
                    Some(format!("Kamikadze {} missed and dealt {}", name, damage))
                }
            }
            BattleEvent::ProtectionGranted { hero, .. } => Some(format!(
                "Avenger {} protected the whole team",
                session.hero_name(*hero)
            )),

            // === Battle End Events ===
            BattleEvent::BattleEnded { outcome } => match outcome {
                GameState::HeroesWon => Some("Heroes won!!!".to_string()),
                GameState::BossWon => Some("Boss won!!!".to_string()),
                GameState::Running => None,
            },
        }
    }
}

/// Event bus for collecting and managing battle events.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Log every event at debug level, tagged with the round it came from.
    pub fn log_debug(&self, round_number: u32) {
        for event in &self.events {
            tracing::debug!(round = round_number, ?event, "battle event");
        }
    }

    /// Formatted text for every non-silent event, in order.
    pub fn formatted_lines(&self, session: &GameSession) -> Vec<String> {
        self.events.iter().filter_map(|event| event.format(session)).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[derive(Debug, Clone)]
enum RngSource {
    Scripted { outcomes: Vec<i32>, index: usize },
    Live(rand::rngs::StdRng),
}

/// Source of every random decision in a battle.
///
/// Live rolls come from `StdRng`. Scripted rolls replay a fixed list in order,
/// so tests can force each decision; each scripted value must already lie in
/// the range the caller asks for.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<i32>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    pub fn new_random() -> Self {
        use rand::SeedableRng;
        Self {
            source: RngSource::Live(rand::rngs::StdRng::from_os_rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            source: RngSource::Live(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform integer in `low..=high`.
    pub fn next_in_range(&mut self, low: i32, high: i32, reason: &str) -> i32 {
        let outcome = match &mut self.source {
            RngSource::Live(rng) => {
                use rand::Rng;
                rng.random_range(low..=high)
            }
            RngSource::Scripted { outcomes, index } => {
                let Some(&outcome) = outcomes.get(*index) else {
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                };
                if outcome < low || outcome > high {
                    panic!(
                        "Scripted value {} for '{}' is outside {}..={}",
                        outcome, reason, low, high
                    );
                }
                *index += 1;
                outcome
            }
        };
        tracing::trace!(outcome, reason, "rng consumed");
        outcome
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        let high = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
        self.next_in_range(0, high, reason) as usize
    }

    pub fn choose<T: Copy>(&mut self, options: &[T], reason: &str) -> T {
        options[self.pick_index(options.len(), reason)]
    }

    /// Rolls 1..=100 and succeeds when the roll is at most `percent`.
    pub fn percent_chance(&mut self, percent: i32, reason: &str) -> bool {
        self.next_in_range(1, 100, reason) <= percent
    }

    /// Fair coin: 1 is heads.
    pub fn coin_flip(&mut self, reason: &str) -> bool {
        self.next_in_range(0, 1, reason) == 1
    }

    /// Scripted values not yet consumed. Always zero for a live source.
    pub fn remaining_outcomes(&self) -> usize {
        match &self.source {
            RngSource::Scripted { outcomes, index } => outcomes.len() - index,
            RngSource::Live(_) => 0,
        }
    }
}

/// Everything a running game owns: the combatants, the round counter and the
/// current outcome.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameSession {
    pub boss: Boss,
    pub heroes: Vec<Hero>,
    pub round_number: u32,
    pub game_state: GameState,
}

impl GameSession {
    pub fn new(boss: Boss, heroes: Vec<Hero>) -> Self {
        Self {
            boss,
            heroes,
            round_number: 0,
            game_state: GameState::Running,
        }
    }

    pub fn hero_name(&self, index: usize) -> &str {
        self.heroes.get(index).map(|hero| hero.name()).unwrap_or("<unknown>")
    }

    pub fn living_hero_indices(&self) -> Vec<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, hero)| hero.is_alive())
            .map(|(index, _)| index)
            .collect()
    }
}
