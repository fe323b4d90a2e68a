//! Server-rendered pages

pub mod landing;
pub mod styles;

pub use landing::landing_page;
