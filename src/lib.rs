//! Tradeoff Engine - Multi-criteria comparison of technology options
//!
//! This crate scores two or three candidate technologies against a user's
//! priorities and situation, ranks them, surfaces the trade-offs between them
//! and explains the recommendation.

pub mod application;
pub mod config;
pub mod domain;
