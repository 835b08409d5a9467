pub mod delivery;
pub mod jobs;
pub mod persistence;
