//! Core types shared by every Bookfinder client

mod book;
mod mode;

pub use book::{Book, Year};
pub use mode::Mode;
