//! # Inline Kinds
//!
//! One module per rule family. Each rule owns its delimiters and patterns;
//! the dispatch table below only decides which rules a marker tries and
//! in what order.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod html;
pub mod link;
pub mod special_character;
pub mod strikethrough;
pub mod wikilink;

pub use autolink::{EmailTag, Url, UrlTag};
pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use escape::EscapeSequence;
pub use html::InlineMarkup;
pub use link::{Image, Link};
pub use special_character::SpecialCharacter;
pub use strikethrough::Strikethrough;
pub use wikilink::WikiLink;

use super::types::{Excerpt, InlineContext, InlineMatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineType {
    WikiLink,
    SpecialCharacter,
    Image,
    Emphasis,
    Url,
    UrlTag,
    EmailTag,
    Markup,
    Link,
    Code,
    Strikethrough,
    EscapeSequence,
}

/// Rules tried for `marker`, in order.
pub fn candidates(marker: char) -> &'static [InlineType] {
    use InlineType::*;

    match marker {
        '%' => &[WikiLink],
        '"' | '&' | '>' => &[SpecialCharacter],
        '!' => &[Image],
        '*' | '_' => &[Emphasis],
        ':' => &[Url],
        '<' => &[UrlTag, EmailTag, Markup, SpecialCharacter],
        '[' => &[Link],
        '`' => &[Code],
        '~' => &[Strikethrough],
        '\\' => &[EscapeSequence],
        _ => &[],
    }
}

pub fn try_match(
    ty: InlineType,
    excerpt: &Excerpt<'_>,
    ctx: &InlineContext<'_>,
) -> Option<InlineMatch> {
    match ty {
        InlineType::WikiLink => WikiLink::parse(excerpt, &ctx.options.internal_link_base_url),
        InlineType::SpecialCharacter => SpecialCharacter::parse(excerpt),
        InlineType::Image => Image::parse(excerpt, ctx.references),
        InlineType::Emphasis => Emphasis::parse(excerpt),
        InlineType::Url if ctx.options.urls_linked => Url::parse(excerpt),
        InlineType::Url => None,
        InlineType::UrlTag => UrlTag::parse(excerpt),
        InlineType::EmailTag => EmailTag::parse(excerpt),
        InlineType::Markup if ctx.options.raw_html_allowed => InlineMarkup::parse(excerpt),
        InlineType::Markup => None,
        InlineType::Link => Link::parse(excerpt, ctx.references),
        InlineType::Code => CodeSpan::parse(excerpt),
        InlineType::Strikethrough => Strikethrough::parse(excerpt),
        InlineType::EscapeSequence => EscapeSequence::parse(excerpt),
    }
}
