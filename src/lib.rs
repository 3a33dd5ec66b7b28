//! State Active Duty Pay Engine
//!
//! This crate calculates State Active Duty (SAD) pay for Army National Guard,
//! Air National Guard and Texas State Guard members over a date range,
//! apportioned by calendar month, and compares an original payment against a
//! corrected one to find over- or under-payment.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
