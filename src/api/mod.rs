pub mod models;
pub mod query;
pub mod songs;

pub use models::*;
pub use query::*;
pub use songs::*;
