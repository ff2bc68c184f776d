pub mod handoff;
pub mod provision;
pub mod publish;
