mod modals;
mod table;
mod toolbar;
mod tree;

pub use modals::Modal;
pub(crate) use table::RowClick;
