//! HTTP handlers

pub mod checkin;
pub mod health;
pub mod notifications;
pub mod reports;
pub mod tasks;
