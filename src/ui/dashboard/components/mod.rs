//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod chart;
pub mod footer;
pub mod fusion;
pub mod header;
pub mod logs;
pub mod panel_card;
