pub mod local;

pub use local::{CacheSnapshot, LocalCache};
