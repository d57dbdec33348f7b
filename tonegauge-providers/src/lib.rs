pub mod analyze;
pub mod parse;
pub mod request;
pub mod runtime;
