//! Garment agent - the tool-calling loop that voices a single dialogue turn.

mod garment_agent;

pub use garment_agent::{AgentConfig, GarmentDialogueAgent};
