use std::collections::HashMap;

/// Lookup from GitHub login to chat-provider identity, built once from the
/// `name1:ID1,name2:ID2` configuration string.
#[derive(Debug, Default, Clone)]
pub struct IdentityMap {
    entries: HashMap<String, Option<String>>,
}

impl IdentityMap {
    /// Parse the raw mapping string. Splits on `,`, then each segment on the
    /// first `:`. A segment without a `:` still registers the login, with no
    /// provider ID attached. Empty input yields an empty map; on duplicate
    /// logins the last occurrence wins. Never fails.
    pub fn parse(raw: &str) -> Self {
        let mut entries = HashMap::new();
        for segment in raw.split(',') {
            if segment.is_empty() {
                continue;
            }
            match segment.split_once(':') {
                Some((login, id)) => entries.insert(login.to_string(), Some(id.to_string())),
                None => entries.insert(segment.to_string(), None),
            };
        }
        Self { entries }
    }

    /// Provider ID for a login. Absent when the login is unknown or was
    /// registered without an ID; callers fall back to a plain `@login`.
    pub fn provider_id(&self, login: &str) -> Option<&str> {
        self.entries.get(login).and_then(|id| id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        let map = IdentityMap::parse("a:1,b:2");
        assert_eq!(map.provider_id("a"), Some("1"));
        assert_eq!(map.provider_id("b"), Some("2"));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        let map = IdentityMap::parse("");
        assert_eq!(map.provider_id("a"), None);
    }

    #[test]
    fn segment_without_colon_has_no_id() {
        let map = IdentityMap::parse("a");
        assert!(map.entries.contains_key("a"));
        assert_eq!(map.provider_id("a"), None);
    }

    #[test]
    fn value_keeps_everything_after_first_colon() {
        let map = IdentityMap::parse("a:1:2");
        assert_eq!(map.provider_id("a"), Some("1:2"));
    }

    #[test]
    fn duplicate_login_last_wins() {
        let map = IdentityMap::parse("a:1,a:9");
        assert_eq!(map.provider_id("a"), Some("9"));
    }

    #[test]
    fn lookup_miss_is_none() {
        let map = IdentityMap::parse("a:1");
        assert_eq!(map.provider_id("nobody"), None);
    }
}
