pub use super::generated_law_blogs::Entity as GeneratedLawBlogs;
