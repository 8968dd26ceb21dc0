use crate::{
    parsing::inline::{
        cursor::Cursor,
        types::{Excerpt, InlineMatch},
    },
    render::RenderNode,
};

use super::autolink::escape_href;

/// `%Page Name%`: a link to another page of the wiki.
///
/// The label shows underscores as spaces; the slug in the href uses
/// underscores for spaces and is appended to the configured base url.
pub struct WikiLink;

impl WikiLink {
    pub const DELIMITER: u8 = b'%';

    pub fn parse(excerpt: &Excerpt<'_>, base_url: &str) -> Option<InlineMatch> {
        let mut cur = Cursor::new(excerpt.text);
        if cur.bump()? != Self::DELIMITER || !cur.skip_to(Self::DELIMITER) {
            return None;
        }

        let name = cur.since(1);
        if name.is_empty() || name.contains('\n') {
            return None;
        }

        let label = html_escape::encode_text(&name.replace('_', " ")).into_owned();
        let slug = escape_href(name).replace(' ', "_");

        let node =
            RenderNode::verbatim("a", label).with_attribute("href", format!("{base_url}{slug}"));
        Some(InlineMatch::element(name.len() + 2, node))
    }
}
