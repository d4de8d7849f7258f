//! Designated-channel policy

use crate::domain::entities::ChannelRef;

/// Exact, case-sensitive comparison of the invoking channel's name
pub fn is_authorized(channel_name: &str, required_name: &str) -> bool {
    channel_name == required_name
}

/// Notice sent when a restricted command is used elsewhere.
///
/// `found` is the result of looking the required channel up at the time of the
/// invocation; channels can be renamed or removed between calls.
pub fn redirect_notice(found: Option<&ChannelRef>, required_name: &str) -> String {
    match found {
        Some(channel) => format!("Please use {} for bot commands!", channel.mention()),
        None => format!("Please use the #{} channel for bot commands!", required_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_authorized_is_exact() {
        assert!(is_authorized("help", "help"));
        assert!(!is_authorized("Help", "help"));
        assert!(!is_authorized("help-desk", "help"));
        assert!(!is_authorized("general", "help"));
    }

    #[test]
    fn test_redirect_notice_mentions_found_channel() {
        let channel = ChannelRef::new("555", "help");
        assert_eq!(redirect_notice(Some(&channel), "help"), "Please use <#555> for bot commands!");
    }

    #[test]
    fn test_redirect_notice_falls_back_to_name() {
        assert_eq!(redirect_notice(None, "help"), "Please use the #help channel for bot commands!");
    }
}
