use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::db::DEFAULT_TITLE;

/// POST /api/boards
#[derive(Debug, Default, Deserialize)]
pub struct CreateBoardRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

impl CreateBoardRequest {
    /// Name to store. A missing name becomes the empty string.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// PUT /api/boards/{id}
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBoardRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// POST /api/boards/{id}/thumbnails
#[derive(Debug, Default, Deserialize)]
pub struct CreateThumbnailRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
}

impl CreateThumbnailRequest {
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Accept any JSON value; only strings count as present.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let req: CreateThumbnailRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.url(), "");
        assert_eq!(req.title(), "Untitled");

        let req: CreateBoardRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.name(), "");
    }

    #[test]
    fn wrong_types_are_ignored() {
        let req: CreateThumbnailRequest =
            serde_json::from_str(r#"{"url": "https://youtu.be/dQw4w9WgXcQ", "title": 5}"#).unwrap();
        assert_eq!(req.url(), "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(req.title(), "Untitled");

        let req: UpdateBoardRequest = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(req.name.is_none());

        let req: UpdateBoardRequest = serde_json::from_str(r#"{"name": ["x"]}"#).unwrap();
        assert!(req.name.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req: CreateBoardRequest =
            serde_json::from_str(r#"{"name": "Favorites", "color": "red"}"#).unwrap();
        assert_eq!(req.name(), "Favorites");
    }
}
