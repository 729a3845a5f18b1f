mod bounded;
mod error;
mod traits;

pub use bounded::{run_bounded, BoundedConfig, OnTimeout, DEFAULT_TIMEOUT};
pub use error::{HandStoreError, Result};
pub use traits::HandRepository;
