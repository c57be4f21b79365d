//! TOPSIS Rank - Multi-criteria decision ranking.
//!
//! This crate ranks the alternatives of a decision matrix by their relative
//! closeness to an ideal solution (TOPSIS), and persists the scored table.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
