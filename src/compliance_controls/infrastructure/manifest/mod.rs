pub mod control_manifest_source;
pub mod file;
