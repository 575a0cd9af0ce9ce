use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

use crate::domain::model::EmailMessage;
use crate::domain::ports::Outbox;
use crate::utils::error::Result;

const EMAIL_FILE_PREFIX: &str = "emails";

/// Outbox that drops each message as a text file in a directory, ready to be
/// pasted into a mail client.
#[derive(Debug, Clone)]
pub struct FileOutbox {
    base_path: PathBuf,
}

impl FileOutbox {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn message_path(&self, message: &EmailMessage) -> PathBuf {
        let recipient = message.recipient.replace(['/', '\\'], "_");
        self.base_path
            .join(format!("{}_{}.txt", EMAIL_FILE_PREFIX, recipient))
    }
}

#[async_trait]
impl Outbox for FileOutbox {
    async fn deliver(&self, message: &EmailMessage) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;

        let contents = format!(
            "To: {}\nSubject: {}\n\n{}",
            message.recipient, message.subject, message.body
        );
        fs::write(self.message_path(message), contents)?;
        Ok(())
    }
}
