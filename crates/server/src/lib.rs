#[cfg(feature = "server")]
pub mod config;

pub mod api;

pub mod advisor;

pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

// Mock data layer, compiled for the client as well: the store lives in the
// browser and resets on reload.
pub mod fixtures;
pub mod marks_import;
pub mod matching;
pub mod repo;
pub mod store;
