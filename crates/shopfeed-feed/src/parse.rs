//! Namespace-aware parsing of RSS/Atom product feeds into [`SourceItem`]s.
//!
//! Every `<item>` (RSS) or `<entry>` (Atom) element becomes one item, in
//! document order. Its direct child elements become fields: children bound to
//! the Google Merchant namespace land in [`Vocabulary::Google`], children with
//! no namespace in [`Vocabulary::Unscoped`], and anything else is skipped.
//! Field text is kept exactly as written; trimming is the mapper's job.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use shopfeed_core::{SourceItem, Vocabulary, GOOGLE_NAMESPACE};

use crate::error::FeedError;

/// A field element currently being read.
struct OpenField {
    vocabulary: Option<Vocabulary>,
    name: String,
    text: String,
}

/// An item element currently being read.
struct OpenItem {
    /// Nesting level of the item element itself (root element is 1).
    level: usize,
    item: SourceItem,
    field: Option<OpenField>,
}

impl OpenItem {
    fn new(level: usize) -> Self {
        Self {
            level,
            item: SourceItem::new(),
            field: None,
        }
    }

    fn close_field(&mut self) {
        if let Some(field) = self.field.take() {
            if let Some(vocabulary) = field.vocabulary {
                let text = (!field.text.is_empty()).then_some(field.text);
                self.item.push(vocabulary, field.name, text);
            }
        }
    }
}

/// Parse a feed document into its items.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] on syntax errors, mismatched end tags, and bad
/// entity references (in text or attribute values), and duplicate attributes,
/// and [`FeedError::NotWellFormed`] for an empty document,
/// elements left open at end of input, content outside the root element, or
/// an undeclared namespace prefix.
pub fn parse_feed(xml: &str) -> Result<Vec<SourceItem>, FeedError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut items = Vec::new();
    let mut open_names: Vec<String> = Vec::new();
    let mut root_name: Option<String> = None;
    let mut root_closed = false;
    let mut current: Option<OpenItem> = None;

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(e) => {
                let vocabulary = vocabulary_of(&ns)?;
                check_attributes(&reader, &e)?;
                let local = e.local_name();
                let name = String::from_utf8_lossy(local.as_ref()).into_owned();
                check_root(&mut root_name, root_closed, open_names.is_empty(), &name)?;
                open_names.push(name.clone());
                let level = open_names.len();

                if let Some(open) = current.as_mut() {
                    if level == open.level + 1 {
                        open.field = Some(OpenField {
                            vocabulary,
                            name,
                            text: String::new(),
                        });
                    }
                } else if is_item_element(local.as_ref()) {
                    current = Some(OpenItem::new(level));
                }
            }
            Event::Empty(e) => {
                let vocabulary = vocabulary_of(&ns)?;
                check_attributes(&reader, &e)?;
                let local = e.local_name();
                let name = String::from_utf8_lossy(local.as_ref()).into_owned();
                check_root(&mut root_name, root_closed, open_names.is_empty(), &name)?;
                let level = open_names.len() + 1;

                if let Some(open) = current.as_mut() {
                    match vocabulary {
                        Some(vocabulary) if level == open.level + 1 => {
                            open.item.push(vocabulary, name, None);
                        }
                        _ => {}
                    }
                } else if is_item_element(local.as_ref()) {
                    items.push(SourceItem::new());
                }

                if level == 1 {
                    root_closed = true;
                }
            }
            Event::End(_) => {
                let level = open_names.len();
                let closes_item = current.as_ref().is_some_and(|open| open.level == level);
                if closes_item {
                    if let Some(done) = current.take() {
                        items.push(done.item);
                    }
                } else if let Some(open) = current.as_mut() {
                    if level == open.level + 1 {
                        open.close_field();
                    }
                }
                open_names.pop();
                if open_names.is_empty() {
                    root_closed = true;
                }
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                if open_names.is_empty() {
                    if !text.trim().is_empty() {
                        return Err(FeedError::NotWellFormed(
                            "text content outside the root element".to_string(),
                        ));
                    }
                } else if let Some(field) = current.as_mut().and_then(|o| o.field.as_mut()) {
                    field.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if open_names.is_empty() {
                    return Err(FeedError::NotWellFormed(
                        "CDATA section outside the root element".to_string(),
                    ));
                }
                if let Some(field) = current.as_mut().and_then(|o| o.field.as_mut()) {
                    field.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open_names.last() {
        return Err(FeedError::NotWellFormed(format!(
            "unexpected end of document: <{unclosed}> is not closed"
        )));
    }
    let Some(root_name) = root_name else {
        return Err(FeedError::NotWellFormed(
            "document has no root element".to_string(),
        ));
    };

    if items.is_empty() {
        tracing::warn!(root = %root_name, "feed contains no <item> or <entry> elements");
    } else {
        tracing::debug!(root = %root_name, items = items.len(), "feed parsed");
    }

    Ok(items)
}

fn is_item_element(local_name: &[u8]) -> bool {
    matches!(local_name, b"item" | b"entry")
}

/// Maps an element's resolved namespace to the vocabulary its fields belong to.
fn vocabulary_of(ns: &ResolveResult<'_>) -> Result<Option<Vocabulary>, FeedError> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) if *uri == GOOGLE_NAMESPACE.as_bytes() => {
            Ok(Some(Vocabulary::Google))
        }
        ResolveResult::Bound(_) => Ok(None),
        ResolveResult::Unbound => Ok(Some(Vocabulary::Unscoped)),
        ResolveResult::Unknown(prefix) => Err(undeclared_prefix(prefix)),
    }
}

/// Attributes carry no feed data, but they still have to be well-formed:
/// unique names, bound prefixes, and valid entity references.
fn check_attributes(reader: &NsReader<&[u8]>, element: &BytesStart<'_>) -> Result<(), FeedError> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if let (ResolveResult::Unknown(prefix), _) = reader.resolve_attribute(attr.key) {
            return Err(undeclared_prefix(&prefix));
        }
        attr.decode_and_unescape_value(reader.decoder())
            .map_err(quick_xml::Error::from)?;
    }
    Ok(())
}

fn undeclared_prefix(prefix: &[u8]) -> FeedError {
    FeedError::NotWellFormed(format!(
        "undeclared namespace prefix \"{}\"",
        String::from_utf8_lossy(prefix)
    ))
}

/// Records the root element name and rejects a second top-level element.
fn check_root(
    root_name: &mut Option<String>,
    root_closed: bool,
    at_top_level: bool,
    name: &str,
) -> Result<(), FeedError> {
    if !at_top_level {
        return Ok(());
    }
    if root_closed {
        return Err(FeedError::NotWellFormed(format!(
            "unexpected element <{name}> after the root element"
        )));
    }
    *root_name = Some(name.to_string());
    Ok(())
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
