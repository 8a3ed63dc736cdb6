/**
 * Chat Entry Points
 *
 * `list_chats`, `get_messages` and `send_message`, each returning an
 * `ApiResponse` envelope.
 *
 * # Send Flow
 *
 * 1. Resolve the conversation key and check the recipient exists
 * 2. Append the message and register both participants
 * 3. Stop if the conversation already has an activity offer
 * 4. If both participants have now written, generate an offer and append
 *    its id as a system message
 *
 * A failed generation is logged and does not fail the send; the message
 * itself is already stored.
 */

use std::sync::Arc;

use crate::backend::activity::{ActivityError, ActivityOfferGenerator};
use crate::backend::auth::identity::Identity;
use crate::backend::auth::users::UserDirectory;
use crate::backend::chat::detector;
use crate::backend::chat::ledger::ConversationLedger;
use crate::backend::error::BackendError;
use crate::shared::messaging::{
    ChatMessage, ConversationKey, ConversationSummary, SendMessageRequest, SendReceipt,
};
use crate::shared::ApiResponse;

pub const USER_DOES_NOT_EXIST: &str = "User doesn't exist";
pub const EMPTY_MESSAGE: &str = "Message cannot be empty";

#[derive(Clone)]
pub struct ChatService {
    ledger: ConversationLedger,
    users: UserDirectory,
    activities: Arc<ActivityOfferGenerator>,
}

impl ChatService {
    pub fn new(
        ledger: ConversationLedger,
        users: UserDirectory,
        activities: Arc<ActivityOfferGenerator>,
    ) -> Self {
        Self {
            ledger,
            users,
            activities,
        }
    }

    pub fn ledger(&self) -> &ConversationLedger {
        &self.ledger
    }

    /// The caller's conversations with the counterpart's display name
    pub async fn list_chats(
        &self,
        identity: &Identity,
    ) -> Result<ApiResponse<Vec<ConversationSummary>>, BackendError> {
        tracing::info!("list_chats for {}", identity.email);
        let mut summaries = self.ledger.list_conversations(&identity.email).await?;
        for summary in &mut summaries {
            summary.name = self.users.display_name(&summary.email).await?;
        }
        Ok(ApiResponse::success(summaries))
    }

    /// Messages exchanged with `target`; marks the conversation read
    pub async fn get_messages(
        &self,
        identity: &Identity,
        target: &str,
    ) -> Result<ApiResponse<Vec<ChatMessage>>, BackendError> {
        tracing::info!("get_messages {} <-> {}", identity.email, target);
        let key = match ConversationLedger::resolve_key(&identity.email, target) {
            Ok(key) => key,
            Err(e) => return Ok(ApiResponse::fail(e.to_string())),
        };

        let record = self.ledger.mark_read(&key, &identity.email).await?;
        Ok(ApiResponse::success(record.messages))
    }

    /// Send a message from the caller to `target`
    pub async fn send_message(
        &self,
        identity: &Identity,
        target: &str,
        request: SendMessageRequest,
    ) -> Result<ApiResponse<SendReceipt>, BackendError> {
        tracing::info!("send_message {} -> {}", identity.email, target);
        let key = match ConversationLedger::resolve_key(&identity.email, target) {
            Ok(key) => key,
            Err(e) => return Ok(ApiResponse::fail(e.to_string())),
        };
        if self.users.get(target).await?.is_none() {
            return Ok(ApiResponse::fail(USER_DOES_NOT_EXIST));
        }
        if request.message.trim().is_empty() {
            return Ok(ApiResponse::fail(EMPTY_MESSAGE));
        }

        let message = ChatMessage::from_user(identity.email.as_str(), request.message, request.timestamp);
        let record = self.ledger.append_message(&key, message).await?;
        self.ledger.register_participant(&identity.email, &key).await?;
        self.ledger.register_participant(target, &key).await?;

        if self.activities.check_exists(&key).await? || !detector::is_mutual(&record) {
            return Ok(ApiResponse::success(SendReceipt::default()));
        }

        let activity_id = self.offer_activity(&key).await?;
        Ok(ApiResponse::success(SendReceipt { activity_id }))
    }

    async fn offer_activity(&self, key: &ConversationKey) -> Result<Option<ConversationKey>, BackendError> {
        match self.activities.generate(key.first(), key.second()).await {
            Ok(activity_id) => {
                self.ledger
                    .append_message(key, ChatMessage::activity_offer(&activity_id))
                    .await?;
                Ok(Some(activity_id))
            }
            Err(ActivityError::AlreadyExists(_)) => {
                tracing::debug!("Activity for {} was generated concurrently", key);
                Ok(None)
            }
            Err(e) => {
                tracing::error!("Failed to generate activity for {}: {}", key, e);
                Ok(None)
            }
        }
    }
}
