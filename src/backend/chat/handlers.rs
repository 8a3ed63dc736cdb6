/**
 * Chat Handlers
 *
 * - `GET /chat` - The caller's conversation list
 * - `GET /chat/message?target_user_email=` - Messages with one user
 * - `POST /chat/message/{target_email}` - Send a message
 *
 * All three sit behind the auth middleware.
 */

use axum::extract::{Path, State};

use crate::backend::chat::service::ChatService;
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, ApiQuery, AuthUser};
use crate::shared::messaging::{
    ChatMessage, ConversationSummary, MessagesQuery, SendMessageRequest, SendReceipt,
};
use crate::shared::ApiResponse;

pub async fn list_chats(
    State(chat): State<ChatService>,
    AuthUser(identity): AuthUser,
) -> Result<ApiResponse<Vec<ConversationSummary>>, BackendError> {
    chat.list_chats(&identity).await
}

pub async fn get_messages(
    State(chat): State<ChatService>,
    AuthUser(identity): AuthUser,
    ApiQuery(query): ApiQuery<MessagesQuery>,
) -> Result<ApiResponse<Vec<ChatMessage>>, BackendError> {
    chat.get_messages(&identity, &query.target_user_email).await
}

pub async fn send_message(
    State(chat): State<ChatService>,
    AuthUser(identity): AuthUser,
    Path(target_email): Path<String>,
    ApiJson(request): ApiJson<SendMessageRequest>,
) -> Result<ApiResponse<SendReceipt>, BackendError> {
    chat.send_message(&identity, &target_email, request).await
}
