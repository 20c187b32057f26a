//! Directory client: list filtering and the local view kept over the repository.

mod client;
mod filter;
mod view;

pub use client::DirectoryClient;
pub use filter::{filter_students, matching_indices};
pub use view::DirectoryView;
