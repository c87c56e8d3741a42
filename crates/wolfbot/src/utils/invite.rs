use std::sync::LazyLock;

use regex::Regex;

static INVITE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?(?:discord\.gg|discord(?:app)?\.com/invite)/([a-z0-9-]+)",
    )
    .unwrap()
});

/// Pulls the invite code out of an invite link.
///
/// Input without a recognised invite host is taken to already be a code and
/// is returned trimmed.
pub fn get_fragment_from_invite(input: &str) -> String {
    let input = input.trim();

    INVITE_REGEX
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map_or(input, |m| m.as_str())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_links() {
        assert_eq!(get_fragment_from_invite("https://discord.gg/wolfpack"), "wolfpack");
        assert_eq!(get_fragment_from_invite("discord.gg/wolf-pack"), "wolf-pack");
        assert_eq!(get_fragment_from_invite("http://www.discord.gg/Ab12Cd"), "Ab12Cd");
    }

    #[test]
    fn long_links() {
        assert_eq!(
            get_fragment_from_invite("https://discord.com/invite/wolfpack"),
            "wolfpack"
        );
        assert_eq!(
            get_fragment_from_invite("https://discordapp.com/invite/wolfpack/"),
            "wolfpack"
        );
        assert_eq!(
            get_fragment_from_invite("https://discord.com/invite/wolfpack?event=1"),
            "wolfpack"
        );
    }

    #[test]
    fn link_inside_suppressed_embed() {
        assert_eq!(get_fragment_from_invite("<https://discord.gg/wolfpack>"), "wolfpack");
    }

    #[test]
    fn bare_codes_pass_through() {
        assert_eq!(get_fragment_from_invite("wolfpack"), "wolfpack");
        assert_eq!(get_fragment_from_invite("  wolfpack \n"), "wolfpack");
        assert_eq!(
            get_fragment_from_invite("https://example.com/invite/wolfpack"),
            "https://example.com/invite/wolfpack"
        );
    }
}
