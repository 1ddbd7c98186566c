mod config_reader;

pub use config_reader::load_config;
