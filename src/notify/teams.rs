use crate::domain::identity::IdentityMap;
use crate::domain::pr::Recipient;

// Teams wants the message wrapped in an adaptive card, with one mention
// entity per <at> tag in the text. The entity id is omitted (not null) for
// logins without a mapped provider identity.

#[derive(Debug, serde::Serialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    kind: &'static str,
    attachments: [Attachment; 1],
}

#[derive(Debug, serde::Serialize)]
struct Attachment {
    #[serde(rename = "contentType")]
    content_type: &'static str,
    content: Card,
}

#[derive(Debug, serde::Serialize)]
struct Card {
    #[serde(rename = "type")]
    kind: &'static str,
    body: [TextBlock; 1],
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    msteams: CardOptions,
}

#[derive(Debug, serde::Serialize)]
struct TextBlock {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
    wrap: bool,
}

#[derive(Debug, serde::Serialize)]
struct CardOptions {
    width: &'static str,
    entities: Vec<Mention>,
}

#[derive(Debug, serde::Serialize)]
struct Mention {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
    mentioned: Mentioned,
}

#[derive(Debug, serde::Serialize)]
struct Mentioned {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
}

fn mentions(recipients: &[Recipient], identities: &IdentityMap) -> Vec<Mention> {
    recipients
        .iter()
        .map(|r| Mention {
            kind: "mention",
            text: format!("<at>{}</at>", r.login),
            mentioned: Mentioned {
                id: identities.provider_id(&r.login).map(str::to_string),
                name: r.login.clone(),
            },
        })
        .collect()
}

impl Envelope {
    pub fn new(text: String, recipients: &[Recipient], identities: &IdentityMap) -> Self {
        Self {
            kind: "message",
            attachments: [Attachment {
                content_type: "application/vnd.microsoft.card.adaptive",
                content: Card {
                    kind: "AdaptiveCard",
                    body: [TextBlock {
                        kind: "TextBlock",
                        text,
                        wrap: true,
                    }],
                    schema: "http://adaptivecards.io/schemas/adaptive-card.json",
                    version: "1.0",
                    msteams: CardOptions {
                        width: "Full",
                        entities: mentions(recipients, identities),
                    },
                },
            }],
        }
    }
}
