//! Configuration management for UrbanHouse.
//!
//! Site settings ([`settings::Config`]) are stored as a TOML file and loaded
//! at startup. Every field has a default, so the file is optional.

pub mod settings;
