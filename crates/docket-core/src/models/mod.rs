pub mod draft;
pub mod quantity;
