use crate::domain::Bookmark;
use axum::{Router, extract::Query, http::StatusCode, routing::get};
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

mod unit_adoc_renderer;

// a decoded bookmark as the api would hand it back, before the grouper gives it a slug
pub fn bookmark(description: &str, tags: &str, toread: &str) -> Bookmark {
    Bookmark {
        href: "https://example.com/post".to_string(),
        meta: "meta".to_string(),
        hash: "hash".to_string(),
        shared: "no".to_string(),
        description: description.to_string(),
        extended: String::new(),
        time: Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap(),
        tags: tags.to_string(),
        toread: toread.to_string(),
        slug: String::new(),
    }
}

pub const MY_POST_JSON: &str = r#"[{
    "href": "https://example.com/my-post",
    "description": "My Post",
    "extended": "",
    "meta": "abc",
    "hash": "def",
    "time": "2016-01-01T00:00:00Z",
    "shared": "no",
    "toread": "yes",
    "tags": "go web"
}]"#;

// --- Fake Pinboard API ---
// a real http server on a random local port that answers posts/all with a canned response
// and remembers the query string of every request it got
pub struct MockApi {
    pub base: String,
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockApi {
    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub async fn spawn_mock_api(status: StatusCode, body: &'static str) -> MockApi {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorder = requests.clone();

    let app = Router::new().route(
        "/v1/posts/all",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(params);
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base: format!("http://{}/v1", addr),
        requests,
    }
}
