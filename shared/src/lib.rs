pub mod aws;
pub mod utils;

pub use aws::*;
pub use utils::*;
