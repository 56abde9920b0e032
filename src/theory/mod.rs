pub mod note_math;
pub mod resolver;

pub use resolver::resolve;
