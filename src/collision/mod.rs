pub mod collider;
pub mod geometry;
pub mod method;

// Re-export key types
pub use collider::Collider;
pub use method::{Method, UnsupportedMethodError};
