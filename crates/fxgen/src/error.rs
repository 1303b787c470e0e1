#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("An error occurred while running the provided code: {message}\n{traceback}")]
    Execution { message: String, traceback: String },

    #[error("Conversation must end with a user turn")]
    DanglingConversation,
}
