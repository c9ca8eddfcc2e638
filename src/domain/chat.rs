//! Chat list mockup data.
//!
//! The chat backend does not exist yet; the list renders demo previews so
//! the tab has content. Search filtering is real and reused once the
//! backend lands.

// ============================================================================
// Chat Preview
// ============================================================================

/// One row in the chat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPreview {
    pub name: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub online: bool,
    pub group: bool,
}

impl ChatPreview {
    fn new(name: &str, last_message: &str, time: &str, unread: u32, online: bool, group: bool) -> Self {
        Self {
            name: name.to_string(),
            last_message: last_message.to_string(),
            time: time.to_string(),
            unread,
            online,
            group,
        }
    }
}

/// Demo chat previews shown while the chat backend is a mockup.
#[must_use]
pub fn demo_chats() -> Vec<ChatPreview> {
    vec![
        ChatPreview::new("John Doe", "Hey, how are you doing?", "2:30 PM", 2, true, false),
        ChatPreview::new(
            "CarloWorks Team",
            "New job opportunity available!",
            "1:15 PM",
            0,
            false,
            true,
        ),
        ChatPreview::new("Mary Smith", "Thanks for the help earlier", "11:45 AM", 0, true, false),
        ChatPreview::new("Study Group", "Meeting at 3 PM today", "10:20 AM", 5, false, true),
    ]
}

/// Case-insensitive name filter over chat previews. Pure; order preserved.
#[must_use]
pub fn filter_chats<'a>(chats: &'a [ChatPreview], search: &str) -> Vec<&'a ChatPreview> {
    let needle = search.trim().to_lowercase();
    chats
        .iter()
        .filter(|chat| needle.is_empty() || chat.name.to_lowercase().contains(&needle))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_chats_are_stable() {
        let chats = demo_chats();
        assert_eq!(chats.len(), 4);
        assert_eq!(chats[0].name, "John Doe");
        assert!(chats[3].group);
    }

    #[test]
    fn test_filter_chats_by_name() {
        let chats = demo_chats();
        let filtered = filter_chats(&chats, "mary");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Mary Smith");
    }

    #[test]
    fn test_empty_search_returns_all() {
        let chats = demo_chats();
        assert_eq!(filter_chats(&chats, "  ").len(), 4);
    }
}
