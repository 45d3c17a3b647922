/// Database configuration and connection management
pub mod database;

/// Studio settings loading from config.toml (display currency, phase workflow)
pub mod settings;
