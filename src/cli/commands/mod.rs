mod delete;
mod generate;
mod list;

pub use delete::cmd_delete_blog;
pub use generate::cmd_generate;
pub use list::cmd_list_blogs;
