mod argument_engine;
mod config_reader;

pub use argument_engine::ArgumentEngine;
pub use config_reader::ConfigReader;
