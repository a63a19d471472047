// Adapters layer: concrete clients for the two external services.
pub mod joplin;
pub mod notion;
