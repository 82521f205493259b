pub mod entities;

pub use entities::{StudentProfile, UserRole};
