pub mod bookmark;

pub use self::bookmark::{Bookmark, RenderContext};
