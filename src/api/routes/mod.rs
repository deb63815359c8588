//! API route handlers

pub mod callback;
pub mod dashboard;
pub mod health;
pub mod sites;
