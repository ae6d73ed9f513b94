//! DataTable
//!
//! Filtering, sorting and pagination over in-memory rows, and a text renderer
//! for the resulting page.

pub mod column;
pub mod data_provider;
pub mod dates;
pub mod engine;
pub mod filter;
pub mod pagination;
pub mod render;
pub mod sort;

pub use column::Column;
pub use data_provider::{HttpRowSource, JsonFileSource, MemorySource, RowSource};
pub use engine::{ViewResult, view_rows};
pub use filter::FilterState;
pub use pagination::{PageInfo, PageState};
pub use render::{DataTable, Pagination};
pub use sort::{SortConfig, SortDirection};
