pub mod axis;
pub mod rotation;
pub mod space;
