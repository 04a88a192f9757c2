pub mod document;
pub mod page;

pub use document::HeadingEntry;
pub use page::{Page, non_empty};
