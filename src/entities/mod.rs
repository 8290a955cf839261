pub mod prelude;

pub mod generated_law_blogs;
