pub mod parse;
pub mod slug;
