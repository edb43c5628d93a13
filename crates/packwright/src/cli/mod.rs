pub mod app;
pub mod bootstrap;
pub mod platform;
