use crate::domain::Bookmark;
use anyhow::{Result, anyhow};

// decodes the posts/all body, any bad entry fails the whole response
pub fn decode_posts(body: &[u8]) -> Result<Vec<Bookmark>> {
    serde_json::from_slice::<Vec<Bookmark>>(body)
        .map_err(|e| anyhow!("Failed to decode posts response: {}", e))
}
