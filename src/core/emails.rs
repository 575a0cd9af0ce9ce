use crate::core::{Directory, EmailMessage, Outbox, Result};

/// One message per active director with an email address. Directors without
/// an address cannot receive the rota and are skipped.
pub fn rota_deliveries(subject: &str, body: &str, directors: &Directory) -> Vec<EmailMessage> {
    directors
        .values()
        .filter(|director| director.active && !director.email.is_empty())
        .map(|director| EmailMessage {
            recipient: director.email.clone(),
            subject: subject.to_string(),
            body: body.to_string(),
        })
        .collect()
}

/// Deliver the rota to every active director and return the number sent.
pub async fn send_rota<O: Outbox>(
    outbox: &O,
    subject: &str,
    body: &str,
    directors: &Directory,
) -> Result<usize> {
    let mut emails_sent = 0;
    for message in rota_deliveries(subject, body, directors) {
        outbox.deliver(&message).await?;
        tracing::info!("Email sent to {}", message.recipient);
        emails_sent += 1;
    }
    Ok(emails_sent)
}
