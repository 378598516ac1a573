mod config_reader;

pub use config_reader::{load_config, load_config_from};
