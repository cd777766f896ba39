pub mod edit_comment;
pub mod get_comments;
pub mod post_comment;
