pub mod blog;

pub use blog::{BlogPost, TRENDING_TOPIC};
