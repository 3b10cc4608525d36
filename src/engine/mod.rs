// Operation library and dispatch
pub mod operations;
pub mod dispatcher;

pub use dispatcher::*;
