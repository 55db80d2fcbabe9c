pub mod aggregate;

pub use aggregate::{MenuCategory, MenuCategoryId};
