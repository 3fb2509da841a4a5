//! Exam Finder Backend Library
//!
//! HTTP API for looking up exam schedules by course code, including:
//! - Case-insensitive lookup against a fixed exam catalog
//! - An in-memory store of exam records with create and list operations
//! - Liveness and info endpoints

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
