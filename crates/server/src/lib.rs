#[cfg(feature = "server")]
pub mod config;

pub mod api;

#[cfg(feature = "server")]
pub mod auth_client;

#[cfg(feature = "server")]
pub mod token;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod rate_limit;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;
