pub mod throttle;
pub use throttle::CallThrottle;

pub mod generation;
pub use generation::{BlogGenerator, GenerationError};

pub mod blog_service;
pub mod blog_service_impl;
pub use blog_service::{BlogError, BlogService};
pub use blog_service_impl::SeaOrmBlogService;
