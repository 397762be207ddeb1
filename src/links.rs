use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("markdown link pattern"));

/// Rewrites every `[label](target)` into `<a href="target">label</a>`.
///
/// Anything that is not a bracketed label immediately followed by a
/// parenthesized target is left untouched. Repeated application is stable
/// as long as labels hold no brackets; nested links like `[[x](y)](z)` are
/// only partly rewritten and change again on a second pass.
pub fn markdown_links_to_html(text: &str) -> Cow<'_, str> {
    MARKDOWN_LINK.replace_all(text, r#"<a href="$2">$1</a>"#)
}
