//! UI Components
//!
//! One component per page section.

mod sidebar;
mod page_header;
mod customer_section;
mod drawing_upload;
mod drawing_search;

pub use sidebar::Sidebar;
pub use page_header::PageHeader;
pub use customer_section::CustomerSection;
pub use drawing_upload::DrawingUpload;
pub use drawing_search::DrawingSearch;
