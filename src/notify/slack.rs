/// Slack incoming-webhook payload.
#[derive(Debug, serde::Serialize)]
pub struct Envelope {
    channel: String,
    username: &'static str,
    text: String,
}

impl Envelope {
    pub fn new(channel: &str, text: String) -> Self {
        Self {
            channel: channel.to_string(),
            username: "Pull Request reviews reminder",
            text,
        }
    }
}
