//! Username input handling

use once_cell::sync::Lazy;
use regex::Regex;

static HANDLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._]{1,30}$").expect("handle pattern is valid")
});

/// Hosts whose profile URLs we accept in the search box
const PROFILE_HOSTS: &[&str] = &["instagram.com", "www.instagram.com", "m.instagram.com"];

/// First path segments that name a page kind rather than an account
const RESERVED_SEGMENTS: &[&str] = &["p", "reel", "reels", "tv", "explore"];

/// Outcome of cleaning up what the user typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameInput {
    /// Nothing to search for
    Empty,
    /// Not a handle the platform would accept
    Invalid(String),
    Valid(String),
}

/// Trim, drop a leading `@` and pull the handle out of a pasted profile link
pub fn normalize_username(input: &str) -> UsernameInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return UsernameInput::Empty;
    }

    let candidate = match handle_from_profile_url(trimmed) {
        Some(Ok(handle)) => handle,
        Some(Err(())) => return UsernameInput::Invalid(trimmed.to_string()),
        None => trimmed.trim_start_matches('@').to_string(),
    };

    if candidate.is_empty() {
        UsernameInput::Empty
    } else if HANDLE_RE.is_match(&candidate) {
        UsernameInput::Valid(candidate)
    } else {
        UsernameInput::Invalid(candidate)
    }
}

/// `None` when `input` is not a profile link, `Err` when it is a link that names no account
fn handle_from_profile_url(input: &str) -> Option<Result<String, ()>> {
    let with_scheme = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else if PROFILE_HOSTS.iter().any(|host| input.starts_with(&format!("{}/", host))) {
        format!("https://{}", input)
    } else {
        return None;
    };

    let parsed = url::Url::parse(&with_scheme).ok()?;
    let host = parsed.host_str()?;
    if !PROFILE_HOSTS.contains(&host) {
        return None;
    }

    let mut segments = parsed.path_segments()?.filter(|segment| !segment.is_empty());
    let handle = match segments.next() {
        // stories/<handle>/<story id>
        Some("stories") => segments.next().ok_or(()),
        Some(segment) if RESERVED_SEGMENTS.contains(&segment) => Err(()),
        Some(segment) => Ok(segment),
        None => Err(()),
    };
    Some(handle.map(|segment| segment.trim_start_matches('@').to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_username(""), UsernameInput::Empty);
        assert_eq!(normalize_username("   "), UsernameInput::Empty);
        assert_eq!(normalize_username("@"), UsernameInput::Empty);
    }

    #[test]
    fn test_plain_and_at_prefixed_handles() {
        assert_eq!(normalize_username("natgeo"), UsernameInput::Valid("natgeo".into()));
        assert_eq!(normalize_username("  @nat.geo_1 "), UsernameInput::Valid("nat.geo_1".into()));
    }

    #[test]
    fn test_profile_urls() {
        assert_eq!(
            normalize_username("https://www.instagram.com/natgeo/"),
            UsernameInput::Valid("natgeo".into())
        );
        assert_eq!(
            normalize_username("instagram.com/natgeo?igsh=abc"),
            UsernameInput::Valid("natgeo".into())
        );
        assert_eq!(
            normalize_username("https://www.instagram.com/stories/natgeo/3301/"),
            UsernameInput::Valid("natgeo".into())
        );
        assert_eq!(
            normalize_username("https://www.instagram.com/natgeo/reels/"),
            UsernameInput::Valid("natgeo".into())
        );
    }

    #[test]
    fn test_post_links_name_no_account() {
        for link in [
            "https://www.instagram.com/p/C0abc123/",
            "instagram.com/reel/C0abc123",
            "https://instagram.com/reels/C0abc123/",
            "https://www.instagram.com/tv/C0abc123",
            "https://www.instagram.com/explore/",
            "https://www.instagram.com/stories/",
            "https://www.instagram.com/",
        ] {
            assert_eq!(
                normalize_username(link),
                UsernameInput::Invalid(link.to_string()),
                "{}",
                link
            );
        }
    }

    #[test]
    fn test_invalid_handles() {
        assert_eq!(normalize_username("two words"), UsernameInput::Invalid("two words".into()));
        assert!(matches!(
            normalize_username(&"a".repeat(31)),
            UsernameInput::Invalid(_)
        ));
        assert!(matches!(
            normalize_username("https://example.com/natgeo"),
            UsernameInput::Invalid(_)
        ));
    }
}
