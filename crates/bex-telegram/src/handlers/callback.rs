use std::sync::Arc;

use teloxide::{prelude::*, types::CallbackQuery};

use bex_core::{
    extract,
    formatting::{escape_html, truncate_chars},
    messaging::types::{ChatAction, ChatId, MessageId, MessageRef},
    report, Result,
};

use crate::router::AppState;

/// User-visible error previews are cut to this many characters.
const ERROR_PREVIEW_CHARS: usize = 100;

fn selected_batch_id(data: &str) -> Option<&str> {
    data.strip_prefix("batch_").filter(|id| !id.is_empty())
}

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let _ = state.messenger.answer_callback_query(&q.id, None).await;

    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    let msg_ref = MessageRef {
        chat_id: ChatId(message.chat.id.0),
        message_id: MessageId(message.id.0),
    };

    let data = q.data.as_deref().unwrap_or_default();

    if data == "cancel" {
        let _ = state
            .messenger
            .edit_html(msg_ref, "❌ Operation cancelled.")
            .await;
        return Ok(());
    }

    let Some(batch_id) = selected_batch_id(data) else {
        return Ok(());
    };

    if let Err(e) = extract_and_send(&state, msg_ref, batch_id).await {
        tracing::error!("error extracting batch {batch_id}: {e}");
        let preview = truncate_chars(&e.to_string(), ERROR_PREVIEW_CHARS);
        let _ = state
            .messenger
            .edit_html(msg_ref, &format!("❌ Error: {}", escape_html(&preview)))
            .await;
    }

    Ok(())
}

/// The extraction flow: resolve the batch, fetch its detail, flatten, render,
/// upload. Catalog failures are ordinary empty results (the client already
/// swallowed them); only messenger failures propagate to the caller's catch.
async fn extract_and_send(state: &AppState, msg_ref: MessageRef, batch_id: &str) -> Result<()> {
    let chat_id = msg_ref.chat_id;

    // The list endpoint is the only source of batch names and thumbnails.
    let batches = state.api.list_batches().await;
    let Some(batch) = batches.iter().find(|b| b.id == batch_id) else {
        state
            .messenger
            .edit_html(msg_ref, "❌ Batch not found!")
            .await?;
        return Ok(());
    };

    state
        .messenger
        .edit_html(
            msg_ref,
            &format!(
                "⏳ Extracting links for: <b>{}</b>...",
                escape_html(&batch.name)
            ),
        )
        .await?;

    let Some(detail) = state.api.batch_detail(batch_id).await else {
        state
            .messenger
            .edit_html(msg_ref, "❌ Failed to get batch details!")
            .await?;
        return Ok(());
    };

    let links = extract::extract_links(&detail);
    if links.is_empty() {
        state
            .messenger
            .edit_html(msg_ref, "❌ No links found in this batch!")
            .await?;
        return Ok(());
    }

    let totals = report::summarize(&links);
    let body = report::render_body(&batch.name, &batch.thumbnail, &links);
    let file_name = report::file_name(&batch.name);
    let caption = report::caption(&batch.name, &totals);

    let _ = state
        .messenger
        .send_chat_action(chat_id, ChatAction::UploadDocument)
        .await;
    state
        .messenger
        .send_document(chat_id, &file_name, body.into_bytes(), Some(&caption))
        .await?;

    state
        .messenger
        .edit_html(msg_ref, "✅ Extraction complete! Check above for the file.")
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_data_parsing() {
        assert_eq!(selected_batch_id("batch_abc123"), Some("abc123"));
        assert_eq!(selected_batch_id("batch_"), None);
        assert_eq!(selected_batch_id("cancel"), None);
        assert_eq!(selected_batch_id(""), None);
    }
}
