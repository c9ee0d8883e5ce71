pub mod dto;
pub mod filters;
pub mod policy;
pub mod query;

pub use dto::*;
pub use filters::*;
pub use policy::*;
pub use query::*;
