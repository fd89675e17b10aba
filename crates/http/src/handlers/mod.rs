pub mod content;
pub mod likes;
