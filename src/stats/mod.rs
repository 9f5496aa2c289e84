//! # Módulo de Estadísticas
//! src/stats/mod.rs
//!
//! Contadores acumulativos de tráfico del servidor.

pub mod collector;

pub use collector::{StatsCollector, StatsSnapshot};
