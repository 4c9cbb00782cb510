use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use bex_core::{
    catalog::Batch,
    formatting::{escape_html, truncate_chars},
    messaging::types::{ChatId, InlineKeyboard},
};

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

/// One row per batch, labelled `<name> - ₹<price>`, plus a cancel row.
fn batch_keyboard(batches: &[Batch], list_limit: usize, label_max: usize) -> InlineKeyboard {
    let mut keyboard = InlineKeyboard::default();
    for batch in batches.iter().take(list_limit) {
        let name = truncate_chars(&batch.name, label_max);
        keyboard.push(
            format!("{name} - ₹{}", batch.price),
            format!("batch_{}", batch.id),
        );
    }
    keyboard.push("❌ Cancel", "cancel");
    keyboard
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = ChatId(msg.chat.id.0);
    let (cmd, _arg) = parse_command(text);

    match cmd.as_str() {
        "start" => {
            let first_name = msg
                .from()
                .map(|u| u.first_name.clone())
                .unwrap_or_else(|| "there".to_string());

            let body = format!(
                "👋 Hello {}!\n\n\
Welcome to <b>Batch Link Extractor Bot</b>\n\n\
Use /batches to see available batches\n\
Use /help for more information",
                escape_html(&first_name)
            );
            let _ = state.messenger.send_html(chat_id, &body).await;
        }

        "help" => {
            let body = "📚 <b>Available Commands:</b>\n\n\
/batches - Show all available batches\n\
/status - Check bot status\n\
/help - Show this help message\n\n\
⚙️ <b>How to use:</b>\n\
1. Use /batches to see all batches\n\
2. Tap a batch button\n\
3. The bot extracts all links\n\
4. Download the text file with all links\n\n\
🔗 <b>The bot extracts:</b>\n\
• Video links (720p preferred, then 480p/360p/240p)\n\
• PDF lecture materials\n\
• Study materials";
            let _ = state.messenger.send_html(chat_id, body).await;
        }

        "batches" => {
            let _ = state
                .messenger
                .send_html(chat_id, "📦 Fetching batches... Please wait...")
                .await;

            let batches = state.api.list_batches().await;
            if batches.is_empty() {
                let _ = state.messenger.send_html(chat_id, "❌ No batches found!").await;
                return Ok(());
            }

            let keyboard = batch_keyboard(
                &batches,
                state.cfg.batch_list_limit,
                state.cfg.button_label_max_length,
            );
            let text = format!(
                "📚 <b>Available Batches ({})</b>\nClick on a batch to extract links:",
                batches.len()
            );
            let _ = state
                .messenger
                .send_inline_keyboard(chat_id, &text, keyboard)
                .await;
        }

        "status" => {
            let body = format!(
                "✅ Bot is running!\n\
🔗 Catalog: <code>{}</code>\n\
📊 Use /batches to start",
                escape_html(&state.cfg.api_base_url)
            );
            let _ = state.messenger.send_html(chat_id, &body).await;
        }

        _ => {
            let _ = state
                .messenger
                .send_html(chat_id, "Unknown command. Use /help to see available commands.")
                .await;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_strips_slash_and_bot_mention() {
        assert_eq!(parse_command("/batches"), ("batches".to_string(), "".to_string()));
        assert_eq!(
            parse_command("/start@bex_bot hello"),
            ("start".to_string(), "hello".to_string())
        );
        assert_eq!(parse_command("  /HELP  "), ("help".to_string(), "".to_string()));
    }

    fn sample_batches(n: usize) -> Vec<Batch> {
        (0..n)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "batchId": format!("id{i}"),
                    "batchName": format!("Batch {i}"),
                    "discountPrice": 100 + i,
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn keyboard_has_one_row_per_batch_plus_cancel() {
        let keyboard = batch_keyboard(&sample_batches(3), 30, 25);
        assert_eq!(keyboard.len(), 4);
        assert_eq!(keyboard.buttons[0].label, "Batch 0 - ₹100");
        assert_eq!(keyboard.buttons[0].callback_data, "batch_id0");
        assert_eq!(keyboard.buttons[3].callback_data, "cancel");
    }

    #[test]
    fn keyboard_caps_the_batch_list() {
        let keyboard = batch_keyboard(&sample_batches(40), 30, 25);
        assert_eq!(keyboard.len(), 31);
    }

    #[test]
    fn keyboard_truncates_long_names() {
        let batches: Vec<Batch> = vec![serde_json::from_value(serde_json::json!({
            "batchId": "x",
            "batchName": "A very long batch name that keeps going",
            "discountPrice": "N/A",
        }))
        .unwrap()];

        let keyboard = batch_keyboard(&batches, 30, 10);
        assert_eq!(keyboard.buttons[0].label, "A very lon... - ₹N/A");
    }
}
