//! Inbound message handling: URL extraction, classification, and the
//! quality prompt.

use once_cell::sync::Lazy;
use regex::Regex;
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::HandlerDeps;
use crate::core::error::AppResult;
use crate::links::{self, LinkKind};
use crate::telegram::keyboard::{playlist_policy_keyboard, quality_keyboard};
use crate::telegram::Bot;

/// Cached regex for matching URLs
/// Compiled once at startup and reused for all requests
static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("Failed to compile URL regex"));

/// Greeting sent for /start and /help.
pub const GREETING: &str =
    "Send me a YouTube link, playlist link, or Shorts link, and I will download the video(s) and send you a link.";

const INVALID_LINK_TEXT: &str = "Please send a valid YouTube link, playlist link, or Shorts link.";
const QUALITY_PROMPT: &str = "Please select the video quality:";
const PLAYLIST_QUALITY_PROMPT: &str = "Please select the quality for all videos in the playlist:";
const PROBE_FAILED_TEXT: &str = "I could not read that video. Please check the link and try again.";
const NO_STREAMS_TEXT: &str = "No downloadable streams found for that video.";

/// Handles an inbound text message.
///
/// Extracts the first URL, classifies it, and answers with a quality
/// keyboard (videos and Shorts) or the playlist policy keyboard. The
/// normalized request is parked in the session store until the user
/// presses a button; sending another URL replaces it.
pub async fn handle_message(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> AppResult<()> {
    let Some(text) = msg.text() else {
        bot.send_message(msg.chat.id, INVALID_LINK_TEXT).await?;
        return Ok(());
    };
    log::debug!("handle_message: {:?}", text);

    let Some(url_text) = URL_REGEX.find(text).map(|m| m.as_str()) else {
        bot.send_message(msg.chat.id, INVALID_LINK_TEXT).await?;
        return Ok(());
    };

    let request = match links::classify(url_text) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Rejected link '{}': {}", url_text, e);
            bot.send_message(msg.chat.id, INVALID_LINK_TEXT).await?;
            return Ok(());
        }
    };

    match request.kind {
        LinkKind::Video | LinkKind::ShortForm => {
            let streams = match deps.source.probe(&request.url).await {
                Ok(streams) => streams,
                Err(e) => {
                    log::error!("Probe failed for {}: {}", request.url, e);
                    bot.send_message(msg.chat.id, PROBE_FAILED_TEXT).await?;
                    return Ok(());
                }
            };

            let labels = streams.labels();
            if labels.is_empty() {
                bot.send_message(msg.chat.id, NO_STREAMS_TEXT).await?;
                return Ok(());
            }

            deps.sessions.put(msg.chat.id, request).await;
            bot.send_message(msg.chat.id, QUALITY_PROMPT)
                .reply_markup(quality_keyboard(&labels))
                .await?;
        }
        LinkKind::Playlist => {
            deps.sessions.put(msg.chat.id, request).await;
            bot.send_message(msg.chat.id, PLAYLIST_QUALITY_PROMPT)
                .reply_markup(playlist_policy_keyboard())
                .await?;
        }
    }

    Ok(())
}
