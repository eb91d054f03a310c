pub mod banners;
pub mod document;

pub use banners::{error_html, loading_html, show_error, show_loading, show_success, success_html};
pub use document::{MemoryDocument, MemoryElement};
