//! Request handlers

pub mod assignment;
pub mod health;
