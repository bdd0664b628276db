//! Anchors around the user names, hashtags and links in a plain text.
//!
//! The anchor target is the matched token itself (`href="@alice"`, `href="#rust "`),
//! the display layer intercepts such links and resolves them on its own.

use std::borrow::Cow;

use lazy_static::lazy_static;
use log::{log_enabled, trace, Level};
use regex::Regex;

// the whole match goes both into the target and into the text
const ANCHOR: &str = r#"<a href="${0}">${0}</a>"#;

lazy_static! {
    static ref RE_USERNAME: Regex = Regex::new(r"(@\w+)").expect("Username regex is valid");
    static ref RE_MENTIONS_AND_LINKS: Regex =
        Regex::new(r"(@\w+)|(#\S+)\s|(http\S+)").expect("Mentions and links regex is valid");
    static ref RE_MENTIONS: Regex =
        Regex::new(r"(@\w+)|(#\w+)").expect("Mentions regex is valid");
}

fn wrap_matches<'t>(re: &Regex, text: &'t str) -> Cow<'t, str> {
    if log_enabled!(Level::Trace) {
        trace!("wrapping {} tokens into anchors", re.find_iter(text).count());
    }
    re.replace_all(text, ANCHOR)
}

/// Make the `@username`-s clickable.
///
/// ```
/// use geoformat::make_usernames_clickable;
///
/// assert_eq!(
///     make_usernames_clickable("hi @bob"),
///     r#"hi <a href="@bob">@bob</a>"#
/// );
/// ```
pub fn make_usernames_clickable(text: &str) -> String {
    wrap_matches(&RE_USERNAME, text).into_owned()
}

/// Make the `@username`-s and `#hashtag`-s clickable, and optionally the `http` links too.
///
/// The two modes recognize hashtags differently:
/// - with the links, a hashtag is any non-space run followed by a whitespace character,
///   and that whitespace ends up inside the anchor; only the ASCII whitespace counts,
///   so a no-break space (U+00A0) does not end a hashtag;
/// - without the links, a hashtag is made of word characters only.
pub fn make_text_clickable(text: &str, links_clickable: bool) -> String {
    let re: &Regex = if links_clickable {
        &RE_MENTIONS_AND_LINKS
    } else {
        &RE_MENTIONS
    };
    wrap_matches(re, text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username() {
        assert_eq!(
            make_usernames_clickable("hi @bob"),
            r#"hi <a href="@bob">@bob</a>"#
        );
    }

    #[test]
    fn many_usernames() {
        assert_eq!(
            make_usernames_clickable("@alice and @bob_2!"),
            r#"<a href="@alice">@alice</a> and <a href="@bob_2">@bob_2</a>!"#
        );
    }

    #[test]
    fn username_hashtags_are_not_touched() {
        assert_eq!(make_usernames_clickable("#rust @ nothing"), "#rust @ nothing");
    }

    #[test]
    fn username_inside_email() {
        assert_eq!(
            make_usernames_clickable("me@example.com"),
            r#"me<a href="@example">@example</a>.com"#
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(make_usernames_clickable("nothing here"), "nothing here");
        assert_eq!(make_text_clickable("nothing here", true), "nothing here");
        assert_eq!(make_text_clickable("", false), "");
    }

    #[test]
    fn link_clickable() {
        assert_eq!(
            make_text_clickable("see http://x.com", true),
            r#"see <a href="http://x.com">http://x.com</a>"#
        );
    }

    #[test]
    fn link_not_clickable() {
        assert_eq!(make_text_clickable("see http://x.com", false), "see http://x.com");
    }

    #[test]
    fn https_link_runs_till_whitespace() {
        assert_eq!(
            make_text_clickable("go https://x.com/a?b=1, now", true),
            r#"go <a href="https://x.com/a?b=1,">https://x.com/a?b=1,</a> now"#
        );
    }

    #[test]
    fn hashtag_with_links_takes_the_whitespace() {
        assert_eq!(
            make_text_clickable("#rust is fun", true),
            r##"<a href="#rust ">#rust </a>is fun"##
        );
    }

    #[test]
    fn hashtag_with_links_needs_the_whitespace() {
        assert_eq!(make_text_clickable("love #rust", true), "love #rust");
    }

    #[test]
    fn hashtag_with_links_takes_punctuation() {
        assert_eq!(
            make_text_clickable("#rust! yes", true),
            r##"<a href="#rust! ">#rust! </a>yes"##
        );
    }

    #[test]
    fn hashtag_with_links_runs_over_no_break_space() {
        assert_eq!(
            make_text_clickable("#rust\u{a0}is fun", true),
            "<a href=\"#rust\u{a0}is \">#rust\u{a0}is </a>fun"
        );
        assert_eq!(make_text_clickable("#rust\u{a0}", true), "#rust\u{a0}");
    }

    #[test]
    fn hashtag_without_links() {
        assert_eq!(
            make_text_clickable("love #rust! yes", false),
            r##"love <a href="#rust">#rust</a>! yes"##
        );
    }

    #[test]
    fn everything_together() {
        assert_eq!(
            make_text_clickable("@bob #maps http://osm.org", true),
            r##"<a href="@bob">@bob</a> <a href="#maps ">#maps </a><a href="http://osm.org">http://osm.org</a>"##
        );
        assert_eq!(
            make_text_clickable("@bob #maps http://osm.org", false),
            r##"<a href="@bob">@bob</a> <a href="#maps">#maps</a> http://osm.org"##
        );
    }

    #[test]
    fn non_ascii_word_is_cut() {
        assert_eq!(
            make_text_clickable("@zoë", false),
            r#"<a href="@zo">@zo</a>ë"#
        );
    }
}
