//! Seams the feed engine depends on.

mod page_source;
mod sentinel;

pub use page_source::PageSource;
pub use sentinel::Sentinel;
