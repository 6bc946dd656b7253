pub mod browse;

pub use browse::{BrowseFilesParams, BrowseFilesTool};
