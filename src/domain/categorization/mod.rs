// Categorization module
// Pure stages that turn a flat team list into the grouped view:
// grouping, search narrowing, picker summary and category selection

pub mod grouping;
pub mod search;
pub mod selection;
pub mod summary;

pub use grouping::{group, CategoryGroup, GroupedTeams, SubgroupGroup, DEFAULT_CATEGORY};
pub use search::{filter_by_search, matches_search};
pub use selection::{filter_by_category, CategorySelection, ALL_KEY};
pub use summary::{summarize, SelectorEntry};
