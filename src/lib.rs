//! Wage estimation engine for part-time shift schedules.
//!
//! This crate parses loosely-formatted pasted shift tables into structured
//! shift records and computes per-day wage amounts by splitting each shift
//! into rate-banded sub-intervals (weekday morning/afternoon/evening bands,
//! with a flat weekend/holiday override).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
