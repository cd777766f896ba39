pub mod edit_comment;
pub mod get_comments;
pub mod post_comment;

pub use edit_comment::edit_comment_handler;
pub use get_comments::get_comments_handler;
pub use post_comment::post_comment_handler;
