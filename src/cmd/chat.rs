//! Chat command - one-shot query against the assistant endpoint

use crate::chat::{reply_or_fallback, ChatMessage, HttpChatProvider};
use clap::Args;

#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Message to send to the assistant
    message: String,

    /// Chat completion endpoint URL
    #[arg(short, long)]
    endpoint: String,

    /// Optional system prompt
    #[arg(short, long)]
    system: Option<String>,
}

impl ChatCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let provider = HttpChatProvider::new(&self.endpoint);
        let history = [ChatMessage::user(&self.message)];
        let reply = reply_or_fallback(&provider, &history, self.system.as_deref());
        println!("{}", reply);
        Ok(())
    }
}
