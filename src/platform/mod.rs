// Platform-specific code module

pub mod elevation;
pub mod gpu;

// Re-exports para imports limpios
pub use elevation::{home_dir_of, is_elevated};
pub use gpu::identity_providers;
