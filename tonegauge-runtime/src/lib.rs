pub mod config_store;
pub mod defaults;
pub mod env;
pub mod factory;
pub mod fs;
pub mod random;
pub mod remote;
