//! Board engine for briefing diagrams.
//!
//! Owns the hecs ECS world, evaluates trajectories and formations at any
//! point on the timeline, and produces BoardSnapshots for the editor.

pub mod engine;
pub mod formation;
pub mod systems;
pub mod trajectory;
pub mod world_setup;

pub use briefing_core as core;
pub use engine::{BoardConfig, BriefingBoard};

#[cfg(test)]
mod tests;
