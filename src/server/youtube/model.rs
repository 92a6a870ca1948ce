use serde::{Deserialize, Serialize};

use crate::server::VideoMetadata;

// Only the fields requested through `fields=` are modelled.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    pub items: Option<Vec<VideoItem>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub snippet: Snippet,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub channel_title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub url: String,
}

impl VideoListResponse {
    /// First returned item, or `None` when `items` is absent or empty.
    pub fn into_metadata(self) -> Option<VideoMetadata> {
        let item = self.items?.into_iter().next()?;
        let thumbnails = item.snippet.thumbnails;
        let thumbnail = thumbnails
            .medium
            .or(thumbnails.high)
            .or(thumbnails.default)
            .map(|t| t.url)
            .unwrap_or_default();
        Some(VideoMetadata {
            title: item.snippet.title,
            channel_title: item.snippet.channel_title,
            thumbnail,
        })
    }
}

#[cfg(test)]
mod youtube_model_test {
    use super::VideoListResponse;

    #[test]
    fn test_first_item_medium_thumbnail() {
        let json = r#"{
            "items": [
                {"snippet": {"title": "Lemon", "channelTitle": "Kenshi Yonezu",
                    "thumbnails": {"default": {"url": "d.jpg"}, "medium": {"url": "m.jpg"}}}},
                {"snippet": {"title": "Other", "channelTitle": "Someone"}}
            ]
        }"#;
        let resp: VideoListResponse = serde_json::from_str(json).unwrap();
        let meta = resp.into_metadata().unwrap();
        assert_eq!(meta.title, "Lemon");
        assert_eq!(meta.channel_title, "Kenshi Yonezu");
        assert_eq!(meta.thumbnail, "m.jpg");
    }

    #[test]
    fn test_missing_or_empty_items_is_no_match() {
        let resp: VideoListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_metadata().is_none());

        let resp: VideoListResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(resp.into_metadata().is_none());

        let resp: VideoListResponse = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(resp.into_metadata().is_none());
    }

    #[test]
    fn test_thumbnail_falls_back_when_medium_missing() {
        let json = r#"{"items": [{"snippet": {"title": "t", "channelTitle": "c",
            "thumbnails": {"high": {"url": "h.jpg"}}}}]}"#;
        let resp: VideoListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_metadata().unwrap().thumbnail, "h.jpg");
    }
}
