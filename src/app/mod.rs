pub mod api;
pub mod cli;
pub mod commands;
pub mod configuration;
mod message_generator;

pub use message_generator::MessageGenerator;
