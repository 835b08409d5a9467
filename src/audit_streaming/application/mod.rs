pub mod command_services;
pub mod processors;
pub mod query_services;
