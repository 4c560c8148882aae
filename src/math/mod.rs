mod transform;

pub use transform::{perspective, Transform};
