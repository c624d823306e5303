use crate::config::Provider;
use crate::domain::identity::IdentityMap;
use crate::domain::pr::Recipient;

/// Render the reminder body, one line per recipient.
///
/// Slack lines end in a bare newline; Teams lines end in two spaces plus a
/// newline so the card markdown renders a line break. The Teams mention tag
/// always carries the login; the mapped provider ID travels in the mention
/// entity built alongside the envelope.
pub fn format_message(
    recipients: &[Recipient],
    identities: &IdentityMap,
    provider: Provider,
) -> String {
    let mut message = String::new();
    for r in recipients {
        match provider {
            Provider::Slack => {
                let mention = match identities.provider_id(&r.login) {
                    Some(id) => format!("<@{id}>"),
                    None => format!("@{}", r.login),
                };
                message.push_str(&format!(
                    "Hey {mention}, the PR \"{}\" is waiting for your review: {}\n",
                    r.title, r.url
                ));
            }
            Provider::Msteams => {
                let mention = if identities.provider_id(&r.login).is_some() {
                    format!("<at>{}</at>", r.login)
                } else {
                    format!("@{}", r.login)
                };
                message.push_str(&format!(
                    "Hey {mention}, the PR \"{}\" is waiting for your review: [{}]({})  \n",
                    r.title, r.url, r.url
                ));
            }
        }
    }
    message
}
