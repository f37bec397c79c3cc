pub mod abilities;
pub mod boss_actions;
pub mod commands;
pub mod engine;
pub mod runner;
pub mod state;

#[cfg(test)]
mod tests;
