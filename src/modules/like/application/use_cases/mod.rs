pub mod toggle_like;
