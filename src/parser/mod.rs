pub mod posts;
pub mod slug;
