pub mod collector;
pub mod cpu;
pub mod gpu;
pub mod memory;
pub mod motherboard;
pub mod storage;
pub mod types;

pub use collector::Collector;
pub use types::*;
