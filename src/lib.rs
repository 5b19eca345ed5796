//! Paid Leave Engine for French home-care workers
//!
//! This crate accounts for statutory paid leave over a leave year running from
//! June 1 to May 31: it classifies which days of a request are charged,
//! enforces the prior-year balance and an employer-defined company limit, and
//! closes accounting months, rolling totals over when a new leave year opens.

#![warn(missing_docs)]

pub mod accounting;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
