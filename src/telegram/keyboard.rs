//! Inline keyboards for quality selection.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::resolution::{QualityChoice, ResolutionLabel};

/// Quality buttons for a single video, three per row, highest first.
pub fn quality_keyboard(labels: &[ResolutionLabel]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = labels
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .map(|label| {
                    InlineKeyboardButton::callback(
                        label.to_string(),
                        QualityChoice::Exact(label.clone()).callback_data(),
                    )
                })
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Lowest/Highest policy buttons for a playlist.
pub fn playlist_policy_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("Lowest Quality", QualityChoice::Lowest.callback_data()),
        InlineKeyboardButton::callback("Highest Quality", QualityChoice::Highest.callback_data()),
    ]])
}
