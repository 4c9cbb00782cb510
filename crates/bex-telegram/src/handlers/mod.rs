//! Telegram update handlers.
//!
//! Each handler validates its input, talks to the catalog client through
//! `AppState`, and replies through the messaging port. Failures surface as
//! short user-visible messages; the dispatcher keeps serving other updates.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;

mod callback;
mod commands;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    callback::handle_callback(q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return commands::handle_command(msg, state).await;
        }
    }

    // Plain text, media, stickers: nothing for this bot to do.
    Ok(())
}
