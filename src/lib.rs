// src/lib.rs

//! Data-shaping core for the study-abroad admin dashboard.

pub mod error;
pub mod models;
pub mod services;
