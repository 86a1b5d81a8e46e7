mod command;
mod import;

pub use command::*;
pub use import::*;
