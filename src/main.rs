//! Demo walkthrough binary
//!
//! Opens (and on first run seeds) the local store, signs in as a demo
//! creator, and exercises the main flows: feed, like toggle, tag search, and
//! the inbox. The assistant exchange runs only when `GEMINI_API_KEY` is set.

use funguys::assistant::{self, GeminiChat};
use funguys::shared::config::{AssistantConfig, StoreConfig};
use funguys::shared::model::ASSISTANT_USER_ID;
use funguys::store::{projections, Action, AppStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut store = AppStore::open(&StoreConfig::new()).await;

    let user = match store.login("creator_cat", "password123").await {
        Ok(user) => user,
        Err(err) => {
            eprintln!("demo login failed: {err}");
            return;
        }
    };
    println!("signed in as @{} ({})", user.username, user.display_name);

    println!("\nfeed:");
    for video in projections::feed(store.state()) {
        println!(
            "  {} — {} ({} likes, {} comments)",
            video.id,
            video.caption,
            video.likes.len(),
            video.comments.len()
        );
    }

    store
        .dispatch(Action::ToggleLike {
            video_id: "vid2".into(),
            user_id: user.id.clone(),
        })
        .await;
    let liked = store
        .state()
        .video("vid2")
        .map(|v| v.likes.contains(&user.id))
        .unwrap_or(false);
    println!("\ntoggled like on vid2 (now liked: {liked})");

    println!("\nvideos tagged #nature:");
    for video in projections::search_videos(store.state(), "#nature") {
        println!("  {} — {}", video.id, video.caption);
    }

    println!("\ninbox:");
    for partner in projections::conversation_partners(store.state()) {
        let preview = projections::last_message(store.state(), &partner.id)
            .map(|m| m.text.clone())
            .unwrap_or_else(|| format!("Start a conversation with {}", partner.display_name));
        println!("  {} — {}", partner.display_name, preview);
    }

    match GeminiChat::new(AssistantConfig::new()) {
        Ok(gemini) => {
            assistant::send_chat_message(
                &mut store,
                &gemini,
                ASSISTANT_USER_ID,
                "Give me one short idea for a cat video.",
            )
            .await;
            if let Some(reply) =
                projections::last_message(store.state(), ASSISTANT_USER_ID)
            {
                println!("\nassistant: {}", reply.text);
            }
        }
        Err(err) => println!("\nskipping assistant exchange: {err}"),
    }
}
