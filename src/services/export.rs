use crate::domain::RenderContext;
use crate::features::grouping::group_bookmarks;
use crate::output::write_scoped;
use crate::parser::posts::decode_posts;
use crate::render::Renderer;
use crate::services::BookmarkSource;
use anyhow::{Context, Result};
use std::io::Write;

// drives one export: fetch -> decode -> group -> render
pub struct ExportService {
    source: Box<dyn BookmarkSource>,
    renderer: Renderer,
}

impl ExportService {
    pub fn new(source: Box<dyn BookmarkSource>, renderer: Renderer) -> Self {
        Self { source, renderer }
    }

    pub async fn collect(&self) -> Result<RenderContext> {
        let body = self
            .source
            .fetch_all_posts()
            .await
            .context("Failed to fetch bookmarks")?;

        let posts = decode_posts(&body)?;
        tracing::info!("Exporter: Decoded {} bookmarks.", posts.len());

        let context = group_bookmarks(posts);
        tracing::info!(
            "Exporter: Grouped into {} tags, {} on the reading list.",
            context.tags.len(),
            context.reading_list.len()
        );

        Ok(context)
    }

    // nothing is written unless the fetch and decode both succeed
    // a render failure leaves whatever was already written in place
    pub async fn export<W: Write>(&self, out: W) -> Result<()> {
        let context = self.collect().await?;
        write_scoped(out, |sink| self.renderer.render(&context, sink))
    }
}
