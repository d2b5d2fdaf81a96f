mod memory_reader;
mod recording_engine;

pub use memory_reader::MemoryReader;
pub use recording_engine::RecordingEngine;
