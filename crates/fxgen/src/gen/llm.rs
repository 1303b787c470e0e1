use crate::prelude::*;
use fxgen_core::conversation::{Conversation, Role, Turn};
use rig::agent::Agent;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::{Chat, CompletionModel, Message};
use rig::providers::openai;

/// A chat model that answers a full conversation with one reply.
///
/// Seam between the repair loop and the hosted model, so tests can drive the
/// loop with scripted replies.
pub trait ChatModel {
    async fn send(&self, conversation: &Conversation) -> Result<String>;
}

/// Build an OpenAI-backed agent for the given model name.
///
/// The API key is read from `OPENAI_API_KEY`; a missing key is fatal here.
pub fn create_agent(model: &str) -> Agent<impl CompletionModel> {
    let client = openai::Client::from_env();
    client.agent(model).build()
}

impl<M: CompletionModel> ChatModel for Agent<M> {
    async fn send(&self, conversation: &Conversation) -> Result<String> {
        let (last, history) = conversation
            .split_last()
            .ok_or(Error::DanglingConversation)?;
        if last.role != Role::User {
            return Err(Error::DanglingConversation.into());
        }

        let history: Vec<Message> = history.iter().map(to_message).collect();

        self.chat(to_message(last), history)
            .await
            .map_err(|e| eyre!("Chat completion failed: {}", e))
    }
}

fn to_message(turn: &Turn) -> Message {
    match turn.role {
        Role::User => Message::user(turn.content.clone()),
        Role::Assistant => Message::assistant(turn.content.clone()),
    }
}
