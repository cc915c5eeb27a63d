//! Calculation engine for the Korean disability-employment levy reduction.
//!
//! This crate computes the statutory reduction ("연계고용 감면") a company may
//! claim against its disability-employment levy when it contracts work to a
//! disability-standard workplace. The result is advisory, not an authoritative
//! legal interpretation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
