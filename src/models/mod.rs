pub mod event;
pub mod product;
pub mod summary;

pub use event::*;
pub use product::*;
pub use summary::*;
