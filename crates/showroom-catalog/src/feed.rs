//! Product feed parsing.
//!
//! The feed is an RSS document whose `channel/item` entries carry their
//! fields in the Google Merchant namespace (`g:title`, `g:description`,
//! `g:link`, `g:image_link`, `g:availability`).

use crate::CatalogError;

/// Namespace of the per-item fields.
pub const MERCHANT_NS: &str = "http://base.google.com/ns/1.0";

/// One raw feed entry. `None` means the element was absent; an element
/// with no text reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_link: Option<String>,
    pub availability: Option<String>,
}

/// Parse every `channel/item` entry of the feed, in document order.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedItem>, CatalogError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let items = doc
        .root_element()
        .descendants()
        .filter(|n| is_plain_element(n, "channel"))
        .flat_map(|channel| channel.children().filter(|n| is_plain_element(n, "item")))
        .map(|item| FeedItem {
            title: merchant_field(&item, "title"),
            description: merchant_field(&item, "description"),
            link: merchant_field(&item, "link"),
            image_link: merchant_field(&item, "image_link"),
            availability: merchant_field(&item, "availability"),
        })
        .collect();

    Ok(items)
}

fn is_plain_element(node: &roxmltree::Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace().is_none()
}

/// Text of the first direct child `g:<name>`.
fn merchant_field(item: &roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    item.children()
        .find(|n| {
            n.is_element()
                && n.tag_name().name() == name
                && n.tag_name().namespace() == Some(MERCHANT_NS)
        })
        .map(|n| n.text().unwrap_or_default().to_string())
}
