//! Roster Board Library
//!
//! This library groups a flat team list into categories and subgroups,
//! narrows that tree by search term and selected category, counts teams
//! for the category picker, and assigns each team a stable tile color.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod view_model;
