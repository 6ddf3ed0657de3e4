pub mod id;
pub mod share;
pub mod story;

pub use share::ShareSnapshot;
pub use story::{Story, WritingStyle};
