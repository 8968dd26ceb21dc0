use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::{
    parsing::inline::types::{Excerpt, InlineMatch},
    render::RenderNode,
};

static STRONG_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^[*]{2}((?:\\\*|[^*]|[*][^*]*[*])+?)[*]{2}(?![*])")
        .expect("valid strong pattern")
});

static STRONG_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^__((?:\\_|[^_]|_[^_]*_)+?)__(?!_)").expect("valid strong pattern")
});

static EM_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^[*]((?:\\\*|[^*]|[*][*][^*]+?[*][*])+?)[*](?![*])")
        .expect("valid emphasis pattern")
});

static EM_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^_((?:\\_|[^_]|__[^_]*__)+?)_(?!_)\b").expect("valid emphasis pattern")
});

/// `**strong**`, `__strong__`, `*em*` and `_em_`.
///
/// Strong is only tried when the marker is doubled. Underscore emphasis
/// must end on a word boundary, so `snake_case_name` stays literal.
pub struct Emphasis;

impl Emphasis {
    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        let marker = excerpt.byte(0)?;
        excerpt.byte(1)?;

        let (strong, em) = match marker {
            b'*' => (&*STRONG_STAR, &*EM_STAR),
            b'_' => (&*STRONG_UNDERSCORE, &*EM_UNDERSCORE),
            _ => return None,
        };

        if excerpt.byte(1) == Some(marker)
            && let Some(m) = capture(strong, excerpt.text, "strong")
        {
            return Some(m);
        }
        capture(em, excerpt.text, "em")
    }
}

/// A pattern that errors out (backtracking limit) counts as no match.
fn capture(pattern: &Regex, text: &str, name: &'static str) -> Option<InlineMatch> {
    let caps = pattern.captures(text).ok().flatten()?;
    let whole = caps.get(0)?;
    let inner = caps.get(1)?;
    Some(InlineMatch::element(
        whole.end(),
        RenderNode::inline(name, inner.as_str()),
    ))
}
