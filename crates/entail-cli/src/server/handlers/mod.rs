//! API request handlers.

mod dataset;
mod labeling;
mod session;

pub use dataset::*;
pub use labeling::*;
pub use session::*;
