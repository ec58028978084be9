pub mod types;
pub mod classification;

pub use types::BrowseEaseError;
pub use classification::ErrorClassification;
