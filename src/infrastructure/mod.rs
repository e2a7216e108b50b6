// Infrastructure layer module
// Contains adapters that load teams from outside the domain
// Follows Hexagonal Architecture

pub mod repositories;
