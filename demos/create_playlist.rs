use std::sync::Arc;

use playlist_draft::data;
use playlist_draft::{
    AuthContext, BuilderSession, CommentForm, PlaylistStore, Route, YoutubeClient, YoutubeConfig,
};

// Builds a playlist from the YouTube links given on the command line and stores it in
// a local sqlite file.
//
//   YOUTUBE_API_KEY=... cargo run --example create_playlist -- <url>...
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    let auth = AuthContext::new("demo-uid");
    let lookup = Arc::new(YoutubeClient::new(YoutubeConfig::from_env()?));
    let store = Arc::new(data::connect("sqlite://playlist_draft.db?mode=rwc").await?);
    if store.user_id_for_uid(&auth.uid).await?.is_none() {
        store.register_user(&auth.uid, "demo").await?;
    }

    println!("{}", Route::guard("/createplaylist", Some(&auth)).path());
    let session = BuilderSession::new(auth.clone(), lookup, store.clone());
    session
        .edit(|b| {
            b.set_title("Demo playlist");
            b.add_tag("demo");
        })
        .await;

    // lookups run side by side; the draft stays editable meanwhile
    let results = futures::future::join_all(urls.iter().map(|url| session.add_video(url))).await;
    for (url, result) in urls.iter().zip(results) {
        match result {
            Ok(outcome) => println!("{}: {:?}", url, outcome),
            Err(e) => println!("{}: {}", url, e),
        }
    }

    if !session.can_submit().await {
        println!("Draft is incomplete, nothing submitted");
        return Ok(());
    }
    let receipt = session.submit().await?;
    println!("Created playlist {}", receipt.playlist_id);
    if let Some(route) = receipt.redirect {
        println!("Next page: {}", route.path());
    }

    let mut form = CommentForm::new(receipt.playlist_id.clone());
    form.edit("First!")?;
    if let Some(id) = form.submit(&auth, store.as_ref()).await? {
        println!("Comment {} posted", id);
    }
    Ok(())
}
