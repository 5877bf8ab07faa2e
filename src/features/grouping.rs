use crate::domain::{Bookmark, RenderContext};
use crate::parser::slug::slugify;

// single pass over the decoded posts, in response order:
// - every bookmark gets its slug
// - each of its tags points at it, so a later bookmark replaces an earlier one under the same tag
// - bookmarks flagged "yes" to read are collected as they come
pub fn group_bookmarks(posts: Vec<Bookmark>) -> RenderContext {
    let mut context = RenderContext::default();

    for mut post in posts {
        post.slug = slugify(&post.description);

        for tag in post.tag_tokens() {
            if let Some(replaced) = context.tags.insert(tag.to_string(), post.clone()) {
                tracing::debug!("Grouper: '{}' now points at {}, dropping {}", tag, post, replaced);
            }
        }

        if post.is_to_read() {
            context.reading_list.push(post);
        }
    }

    context
}
