pub mod entities;
pub mod selection;

pub use entities::{Course, CourseId};
pub use selection::CourseSelection;
