pub mod calculator;
pub mod config;
pub mod deck;
pub mod error;
pub mod telemetry;
