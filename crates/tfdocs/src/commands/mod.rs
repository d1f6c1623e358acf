//! Command implementations

pub mod categories;
pub mod categorize;
pub mod check;
pub mod run;

pub use categories::show_categories;
pub use categorize::categorize_pages;
pub use check::check_pages;
pub use run::run_all;
