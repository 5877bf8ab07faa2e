use chrono::{DateTime, Utc};
use derive_more::derive::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

// one entry of the posts/all response
// fields the API leaves out or sends as null are zero-filled: "" for strings, the unix epoch
// for time. a time that is present but malformed is still an error
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Display)]
#[display("{} ({})", description, href)]
pub struct Bookmark {
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hash: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shared: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        serialize_with = "serialize_collected_at"
    )]
    pub time: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub toread: String,
    // derived from description by the grouper, never read from the wire
    #[serde(default, skip_deserializing)]
    pub slug: String,
}

impl Bookmark {
    pub fn is_to_read(&self) -> bool {
        self.toread == "yes"
    }

    // tags are separated by single spaces, so "" is one empty tag and "a  b" has an empty tag
    // between a and b
    pub fn tag_tokens(&self) -> impl Iterator<Item = &str> {
        self.tags.split(' ')
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// templates see "2016-01-01 00:00:00 +0000 UTC"
fn serialize_collected_at<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%Y-%m-%d %H:%M:%S %z %Z"))
}

// tag -> the last bookmark seen under that tag
// sorted by tag name so templates iterate tags alphabetically
pub type TagIndex = BTreeMap<String, Bookmark>;

// to-read bookmarks in response order
pub type ReadingList = Vec<Bookmark>;

// everything a template gets to see
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct RenderContext {
    pub tags: TagIndex,
    pub reading_list: ReadingList,
}
