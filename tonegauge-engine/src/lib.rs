pub mod controller;
pub mod flow;
pub mod traits;
