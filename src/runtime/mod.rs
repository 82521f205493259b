pub mod feed;
pub mod source;
pub mod startup;

pub use feed::LifecycleFeed;
pub use source::{AssignmentSource, StaticSource};
