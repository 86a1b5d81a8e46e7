mod edit;
mod generate;
mod info;

pub use edit::*;
pub use generate::*;
pub use info::*;
