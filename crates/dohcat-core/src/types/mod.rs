mod catalog;
mod endpoint;
mod stamp;

pub use catalog::*;
pub use endpoint::*;
pub use stamp::*;
