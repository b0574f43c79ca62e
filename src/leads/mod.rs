pub mod source;
pub mod store;
pub mod types;

pub use source::{load_leads, mock_leads};
pub use store::{LeadStore, SortColumn, SortDir};
pub use types::Lead;
