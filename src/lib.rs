pub mod commands;
pub mod github;
pub mod page;
pub mod platform;
pub mod resolver;
