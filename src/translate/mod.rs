pub mod interface;
pub mod prompt;
pub mod translator;

pub use interface::*;
pub use prompt::*;
pub use translator::*;
