mod loader;

pub use loader::{Config, DEFAULT_TARGET};
