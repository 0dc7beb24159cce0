mod directory;
mod ops;

pub use directory::{read_directory, read_subdirectories};
pub use ops::{delete_entries, open_with_default, DeleteReport};
