use crate::error::LookupError;
use crate::server::youtube::model::VideoListResponse;

const VIDEO_FIELDS: &str = "items(snippet(title,channelTitle,thumbnails))";

/// Fetch the snippet of one video from the Data API `videos` endpoint.
pub async fn get_youtube_video(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    video_id: &str,
) -> Result<VideoListResponse, LookupError> {
    let url = format!("{}/youtube/v3/videos", base_url.trim_end_matches('/'));
    log::debug!("Looking up youtube video {}", video_id);

    let resp = client
        .get(&url)
        .query(&[
            ("part", "snippet"),
            ("id", video_id),
            ("fields", VIDEO_FIELDS),
            ("key", api_key),
        ])
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(LookupError::Status {
            status: status.as_u16(),
            message: text,
        });
    }
    let result: VideoListResponse = serde_json::from_str(&text)?;
    Ok(result)
}
