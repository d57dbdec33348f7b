pub mod service;
pub mod view;
