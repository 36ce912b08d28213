// ============================================
// Background Jobs Module
// ============================================
//
// Contains background job runners for:
// 1. Score simulation (periodic random score changes)

pub mod score_simulator;

pub use score_simulator::{
    spawn_score_simulator, ScoreSimulator, ScoreSimulatorConfig, ScoreUpdate,
};
