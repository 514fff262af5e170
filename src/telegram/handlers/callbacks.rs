//! Callback-query handling: the quality selection stage of the
//! conversation and the processing that follows it.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId};
use url::Url;

use super::types::HandlerDeps;
use crate::core::error::{AppError, AppResult};
use crate::download::pipeline::{ItemOutcome, ProgressReporter, UploadResult};
use crate::download::playlist::{choose_uniform, survey_resolutions};
use crate::links::LinkKind;
use crate::resolution::{QualityChoice, ResolutionLabel};
use crate::telegram::Bot;

const MISSING_SELECTION_TEXT: &str =
    "I lost track of which link this button belongs to. Please send the link again.";
const RESOLUTION_NOT_FOUND_TEXT: &str =
    "Cannot find the specified resolution, please try again with a different option.";
const UPLOAD_FAILED_TEXT: &str = "Failed to upload the video.";
const EMPTY_PLAYLIST_TEXT: &str = "No videos found in the playlist.";
const INVALID_OPTION_TEXT: &str = "Invalid option.";

/// Handles a quality button press.
///
/// Consumes the chat's pending selection; a callback without one (e.g.
/// after a restart) gets the missing-selection reply. Processing runs to
/// completion inside the handler, so a conversation is busy until its
/// download finishes.
pub async fn handle_quality_callback(bot: &Bot, q: &CallbackQuery, deps: &HandlerDeps) -> AppResult<()> {
    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let (chat_id, message_id) = match q.message.as_ref() {
        Some(m) => (m.chat().id, m.id()),
        None => return Ok(()),
    };

    bot.answer_callback_query(q.id.clone()).await?;

    let Some(choice) = QualityChoice::parse_callback(data) else {
        bot.edit_message_text(chat_id, message_id, INVALID_OPTION_TEXT).await?;
        return Ok(());
    };

    let Some(pending) = deps.sessions.take(chat_id).await else {
        log::warn!("Callback '{}' from chat {} with no pending selection", data, chat_id);
        bot.send_message(chat_id, MISSING_SELECTION_TEXT).await?;
        return Ok(());
    };

    match (pending.request.kind, &choice) {
        (LinkKind::Playlist, QualityChoice::Lowest | QualityChoice::Highest) => {
            let policy_name = if matches!(choice, QualityChoice::Lowest) {
                "Lowest Quality"
            } else {
                "Highest Quality"
            };
            bot.edit_message_text(chat_id, message_id, format!("Selected quality: {}", policy_name))
                .await?;
            run_playlist_flow(bot, chat_id, deps, &pending.request.url, &choice).await?;
        }
        (LinkKind::Video | LinkKind::ShortForm, QualityChoice::Exact(label)) => {
            bot.edit_message_text(chat_id, message_id, format!("Selected video quality: {}", label))
                .await?;
            run_video_flow(bot, chat_id, message_id, deps, &pending.request.url, label).await?;
        }
        _ => {
            bot.edit_message_text(chat_id, message_id, INVALID_OPTION_TEXT).await?;
        }
    }

    Ok(())
}

/// Single-video processing after a quality pick.
async fn run_video_flow(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    deps: &HandlerDeps,
    url: &Url,
    label: &ResolutionLabel,
) -> AppResult<()> {
    match deps.pipeline.process_video(url, Some(label)).await {
        Ok(UploadResult::Uploaded { link, .. }) => {
            bot.send_message(chat_id, format!("Here is your video in {}: {}", label, link))
                .await?;
        }
        Ok(UploadResult::Failed { .. }) => {
            bot.send_message(chat_id, UPLOAD_FAILED_TEXT).await?;
        }
        Err(AppError::ResolutionNotFound(_)) => {
            bot.edit_message_text(chat_id, message_id, RESOLUTION_NOT_FOUND_TEXT).await?;
        }
        Err(e) => {
            log::error!("Video processing failed for {}: {}", url, e);
            bot.send_message(chat_id, format!("Error: {}", e)).await?;
        }
    }
    Ok(())
}

/// Playlist processing after a lowest/highest pick.
///
/// Extraction and the resolution survey happen before the per-item loop;
/// a failure there aborts the whole playlist with a generic error, while
/// per-item failures inside the loop only skip that item.
async fn run_playlist_flow(
    bot: &Bot,
    chat_id: ChatId,
    deps: &HandlerDeps,
    url: &Url,
    choice: &QualityChoice,
) -> AppResult<()> {
    let prepared = prepare_playlist(deps, url, choice).await;
    let (entries, label) = match prepared {
        Ok((entries, Some(label))) if !entries.is_empty() => (entries, label),
        Ok(_) => {
            bot.send_message(chat_id, EMPTY_PLAYLIST_TEXT).await?;
            return Ok(());
        }
        Err(e) => {
            log::error!("Playlist preparation failed for {}: {}", url, e);
            bot.send_message(chat_id, format!("Error: {}", e)).await?;
            return Ok(());
        }
    };

    let reporter = ChatReporter {
        bot: bot.clone(),
        chat_id,
        label: label.clone(),
    };
    deps.pipeline.run_playlist(&entries, &label, &reporter).await;

    Ok(())
}

async fn prepare_playlist(
    deps: &HandlerDeps,
    url: &Url,
    choice: &QualityChoice,
) -> AppResult<(Vec<crate::download::playlist::PlaylistEntry>, Option<ResolutionLabel>)> {
    let entries = deps.source.playlist_entries(url).await?;
    if entries.is_empty() {
        return Ok((entries, None));
    }
    let labels = survey_resolutions(deps.source.as_ref(), &entries).await?;
    let label = choose_uniform(&labels, choice);
    Ok((entries, label))
}

/// Reports playlist progress as chat replies, one line before and one
/// after each video.
struct ChatReporter {
    bot: Bot,
    chat_id: ChatId,
    label: ResolutionLabel,
}

#[async_trait]
impl ProgressReporter for ChatReporter {
    async fn item_started(&self, index: usize, total: usize) {
        let text = format!("Uploading video {}/{}...", index, total);
        if let Err(e) = self.bot.send_message(self.chat_id, text).await {
            log::warn!("Failed to send progress message: {}", e);
        }
    }

    async fn item_finished(&self, index: usize, total: usize, outcome: &ItemOutcome) {
        let text = match outcome {
            ItemOutcome::Uploaded { link, .. } => {
                format!("Uploaded video {}/{} in {}: {}", index, total, self.label, link)
            }
            ItemOutcome::UploadFailed { .. } => {
                format!("Failed to upload video {}/{} in {}.", index, total, self.label)
            }
            ItemOutcome::ResolutionUnavailable { label } => {
                format!("Video {}/{} has no {} stream, skipping.", index, total, label)
            }
            ItemOutcome::Failed { reason } => {
                format!("Failed to process video {}/{}: {}", index, total, reason)
            }
        };
        if let Err(e) = self.bot.send_message(self.chat_id, text).await {
            log::warn!("Failed to send result message: {}", e);
        }
    }
}
