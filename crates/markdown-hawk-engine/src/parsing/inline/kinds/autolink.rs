use std::sync::LazyLock;

use regex::Regex;

use crate::{
    parsing::inline::types::{Excerpt, InlineMatch},
    render::RenderNode,
};

static URL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<(\w+://[^ >]+)>").expect("valid url tag pattern"));

static EMAIL_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^<((mailto:)?\S+?@\S+?)>").expect("valid email tag pattern")
});

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhttps?://[^\s<]+\b/*").expect("valid url pattern"));

/// Escapes the characters that would start an entity or a tag, or close
/// the attribute value.
pub fn escape_href(url: &str) -> String {
    url.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

/// An anchor whose visible text is `text` escaped.
fn anchor(text: &str, href: String) -> RenderNode {
    RenderNode::verbatim("a", html_escape::encode_text(text)).with_attribute("href", href)
}

/// `<scheme://target>`.
pub struct UrlTag;

impl UrlTag {
    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        if !excerpt.text.contains('>') {
            return None;
        }
        let caps = URL_TAG.captures(excerpt.text)?;
        let url = &caps[1];
        Some(InlineMatch::element(caps[0].len(), anchor(url, escape_href(url))))
    }
}

/// `<user@host>` or `<mailto:user@host>`.
pub struct EmailTag;

impl EmailTag {
    pub const SCHEME: &'static str = "mailto:";

    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        if !excerpt.text.contains('>') {
            return None;
        }
        let caps = EMAIL_TAG.captures(excerpt.text)?;
        let address = &caps[1];
        let href = if caps.get(2).is_some() {
            escape_href(address)
        } else {
            format!("{}{}", Self::SCHEME, escape_href(address))
        };
        Some(InlineMatch::element(caps[0].len(), anchor(address, href)))
    }
}

/// A bare `http://` or `https://` URL in running text.
///
/// Dispatched on the `:` after the scheme, so the match is searched for in
/// the whole remaining text and positioned where the scheme starts.
pub struct Url;

impl Url {
    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        if excerpt.byte(2) != Some(b'/') {
            return None;
        }
        let found = BARE_URL.find(excerpt.context)?;
        Some(
            InlineMatch::element(found.len(), anchor(found.as_str(), escape_href(found.as_str())))
                .at(found.start()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Content;
    use pretty_assertions::assert_eq;

    fn excerpt(text: &str) -> Excerpt<'_> {
        Excerpt {
            text,
            context: text,
        }
    }

    fn href(m: &InlineMatch) -> Option<&str> {
        match &m.node {
            crate::parsing::inline::InlineNode::Element(node) => node.attribute("href"),
            _ => None,
        }
    }

    fn text(m: &InlineMatch) -> Option<&Content> {
        match &m.node {
            crate::parsing::inline::InlineNode::Element(node) => node.content.as_ref(),
            _ => None,
        }
    }

    #[test]
    fn url_tag_escapes_ampersand() {
        let m = UrlTag::parse(&excerpt("<http://e.org/?a=1&b=2> x")).expect("url tag");
        assert_eq!(m.extent, 23);
        assert_eq!(href(&m), Some("http://e.org/?a=1&amp;b=2"));
        assert_eq!(
            text(&m),
            Some(&Content::Verbatim("http://e.org/?a=1&amp;b=2".into()))
        );
    }

    #[test]
    fn email_tag_escapes_address() {
        let m = EmailTag::parse(&excerpt("<a&b@c.d>")).expect("email");
        assert_eq!(href(&m), Some("mailto:a&amp;b@c.d"));
        assert_eq!(text(&m), Some(&Content::Verbatim("a&amp;b@c.d".into())));
    }

    #[test]
    fn bare_url_quote_stays_inside_href() {
        let context = r#"see http://x.com/"onmouseover="alert(1) now"#;
        let marker = context.find(':').expect("colon");
        let m = Url::parse(&Excerpt {
            text: &context[marker..],
            context,
        })
        .expect("url");
        assert_eq!(
            href(&m),
            Some("http://x.com/&quot;onmouseover=&quot;alert(1")
        );
        assert_eq!(
            text(&m),
            Some(&Content::Verbatim(r#"http://x.com/"onmouseover="alert(1"#.into()))
        );
    }

    #[test]
    fn url_tag_needs_scheme() {
        assert!(UrlTag::parse(&excerpt("<e.org>")).is_none());
    }

    #[test]
    fn email_tag_adds_mailto() {
        let m = EmailTag::parse(&excerpt("<me@e.org>")).expect("email");
        assert_eq!(href(&m), Some("mailto:me@e.org"));

        let m = EmailTag::parse(&excerpt("<MAILTO:me@e.org>")).expect("email");
        assert_eq!(href(&m), Some("MAILTO:me@e.org"));
    }

    #[test]
    fn bare_url_is_positioned_at_scheme() {
        let context = "go to https://e.org/path/ now";
        let marker = context.find(':').expect("colon");
        let m = Url::parse(&Excerpt {
            text: &context[marker..],
            context,
        })
        .expect("url");
        assert_eq!(m.position, Some(6));
        assert_eq!(href(&m), Some("https://e.org/path/"));
    }

    #[test]
    fn bare_url_stops_before_trailing_punctuation() {
        let context = "http://e.org.";
        let m = Url::parse(&Excerpt {
            text: &context[4..],
            context,
        })
        .expect("url");
        assert_eq!(href(&m), Some("http://e.org"));
    }

    #[test]
    fn colon_without_slashes_declines() {
        let context = "note: nothing";
        assert!(
            Url::parse(&Excerpt {
                text: &context[4..],
                context,
            })
            .is_none()
        );
    }
}
