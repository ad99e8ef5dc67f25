pub mod errors;
pub mod render_orchestrator;
pub mod render_strategy;
