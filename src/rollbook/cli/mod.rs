mod commands;
mod menu;
mod print;
mod prompt;
mod setup;
mod styles;

pub use commands::run;
