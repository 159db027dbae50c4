//! Prep Pilot - Kitchen prep-time decision support.
//!
//! This crate implements a dynamic preparation-time estimator for a
//! restaurant kitchen: a rule-table decision engine over the live order
//! queue, a rolling log of estimate changes, and LLM-backed summaries
//! of recent adjustments for the kitchen manager.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
