//! Download button rewriting in static HTML pages.
//!
//! This is a targeted attribute rewrite, not a general HTML parser: the page
//! is expected to contain one element carrying the configured id, and only
//! the value of that element's `href` attribute is replaced. Everything else
//! in the document is preserved byte for byte.

/// Replace the `href` value of the element with the given id.
///
/// Returns the updated document, or `None` when the element (or its `href`
/// attribute) is absent, in which case the page should be left untouched.
pub fn rewrite_href(html: &str, element_id: &str, url: &str) -> Option<String> {
    let id_marker = format!("id=\"{}\"", element_id);
    let id_pos = html.find(&id_marker)?;

    // The opening tag the id attribute lives in
    let tag_start = html[..id_pos].rfind('<')?;
    let tag_end = tag_start + html[tag_start..].find('>')?;
    let tag = &html[tag_start..tag_end];

    let href_rel = tag.find("href=\"")?;
    let value_start = tag_start + href_rel + "href=\"".len();
    let value_end = value_start + html[value_start..].find('"')?;

    let mut updated = String::with_capacity(html.len() + url.len());
    updated.push_str(&html[..value_start]);
    updated.push_str(url);
    updated.push_str(&html[value_end..]);
    Some(updated)
}
