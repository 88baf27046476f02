//! UI Components
//!
//! Leptos components for the repository list.

mod repo_list;
mod repo_row;

pub use repo_list::RepoList;
pub use repo_row::RepoRow;
