pub mod arrange;
pub mod list;

pub use arrange::arrange_schemas;
pub use list::list_refs;
