// Core business logic module

pub mod config;
pub mod sensors;
pub mod sysfs;
pub mod system_info;

// Re-export commonly used items
pub use config::Config;
pub use sysfs::SysRoot;
pub use system_info::{Collector, Snapshot};
