//! Review Cycle Engine
//!
//! This crate decides which annual review period ("Gesprächsjahr") is currently
//! active, which employees are eligible for a review in that cycle, and how
//! review records are grouped for the reporting dashboards.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod cycle;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
