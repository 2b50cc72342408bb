mod commands;
mod logger;
mod render;
mod setup;
mod styles;

pub use commands::run;
