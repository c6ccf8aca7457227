pub mod configuration;
pub mod domain;
pub mod flash_messages;
pub mod registry;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
