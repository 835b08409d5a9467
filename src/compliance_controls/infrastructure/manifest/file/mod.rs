pub mod file_control_manifest_source_impl;
