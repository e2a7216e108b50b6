// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of where teams come from and how they are drawn

pub mod categorization;
pub mod repositories;
pub mod team;
