pub mod lifecycle;
pub mod naming;
pub mod submissions;

pub use lifecycle::{LifecyclePolicy, LifecycleService};
pub use naming::{NamingContext, NamingService};
pub use submissions::SubmissionService;
