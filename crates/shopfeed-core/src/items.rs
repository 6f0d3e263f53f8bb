//! Parsed feed items and the typed keys used to read their fields.

/// Namespace URI of the Google Merchant Center (`g:`) vocabulary.
pub const GOOGLE_NAMESPACE: &str = "http://base.google.com/ns/1.0";

/// Which naming scope a field element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// Elements bound to [`GOOGLE_NAMESPACE`], whatever prefix the feed uses.
    Google,
    /// Elements with no namespace, e.g. `custom_label_0`.
    Unscoped,
}

/// Standard Google Shopping attributes the mapper reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoogleField {
    Id,
    Title,
    Link,
    ImageLink,
    Description,
    GoogleProductCategory,
    ProductType,
    Price,
    Brand,
    Color,
}

impl GoogleField {
    /// Local element name as it appears after the `g:` prefix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GoogleField::Id => "id",
            GoogleField::Title => "title",
            GoogleField::Link => "link",
            GoogleField::ImageLink => "image_link",
            GoogleField::Description => "description",
            GoogleField::GoogleProductCategory => "google_product_category",
            GoogleField::ProductType => "product_type",
            GoogleField::Price => "price",
            GoogleField::Brand => "brand",
            GoogleField::Color => "color",
        }
    }
}

/// A lookup key into a [`SourceItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Google(GoogleField),
    /// `custom_label_{n}` in the unscoped vocabulary, `n` in `0..=4`.
    CustomLabel(u8),
}

impl Field {
    #[must_use]
    pub fn vocabulary(self) -> Vocabulary {
        match self {
            Field::Google(_) => Vocabulary::Google,
            Field::CustomLabel(_) => Vocabulary::Unscoped,
        }
    }

    /// Returns `true` if an element with this vocabulary and local name is
    /// the field this key refers to.
    #[must_use]
    pub fn matches(self, vocabulary: Vocabulary, name: &str) -> bool {
        if vocabulary != self.vocabulary() {
            return false;
        }
        match self {
            Field::Google(g) => name == g.as_str(),
            Field::CustomLabel(n) => name
                .strip_prefix("custom_label_")
                .is_some_and(|idx| is_canonical_index(idx, n)),
        }
    }
}

/// `idx` spells `n` in plain decimal: no sign, no leading zeros.
fn is_canonical_index(idx: &str, n: u8) -> bool {
    let digits_only = !idx.is_empty() && idx.bytes().all(|b| b.is_ascii_digit());
    let no_leading_zero = idx.len() == 1 || !idx.starts_with('0');
    digits_only && no_leading_zero && idx.parse::<u8>().is_ok_and(|i| i == n)
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Google(g) => write!(f, "g:{}", g.as_str()),
            Field::CustomLabel(n) => write!(f, "custom_label_{n}"),
        }
    }
}

/// One child element of a feed item, exactly as the parser saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceField {
    pub vocabulary: Vocabulary,
    /// Local element name without prefix.
    pub name: String,
    /// Untrimmed text content; `None` for self-closing or empty elements.
    pub text: Option<String>,
}

/// One `<item>` (or Atom `<entry>`) of a product feed.
///
/// Fields are kept in document order. Repeated fields are allowed; lookups
/// return the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceItem {
    fields: Vec<SourceField>,
}

impl SourceItem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vocabulary: Vocabulary, name: impl Into<String>, text: Option<String>) {
        self.fields.push(SourceField {
            vocabulary,
            name: name.into(),
            text,
        });
    }

    /// Builder-style [`push`](Self::push) for a known field.
    #[must_use]
    pub fn with(mut self, field: Field, text: &str) -> Self {
        let name = match field {
            Field::Google(g) => g.as_str().to_string(),
            Field::CustomLabel(n) => format!("custom_label_{n}"),
        };
        self.push(field.vocabulary(), name, Some(text.to_string()));
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[SourceField] {
        &self.fields
    }

    /// Raw, untrimmed text of the first occurrence of `field`.
    ///
    /// Returns `None` when the element is absent or has no text content.
    #[must_use]
    pub fn raw(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| field.matches(f.vocabulary, &f.name))
            .and_then(|f| f.text.as_deref())
    }

    /// Trimmed text of `field`, or `None` when it is absent, empty, or
    /// whitespace-only.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        self.raw(field).map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_trims_and_treats_blank_as_absent() {
        let item = SourceItem::new()
            .with(Field::Google(GoogleField::Title), "  Shoe  ")
            .with(Field::Google(GoogleField::Color), "   ");
        assert_eq!(item.value(Field::Google(GoogleField::Title)), Some("Shoe"));
        assert_eq!(item.raw(Field::Google(GoogleField::Color)), Some("   "));
        assert_eq!(item.value(Field::Google(GoogleField::Color)), None);
        assert_eq!(item.value(Field::Google(GoogleField::Brand)), None);
    }

    #[test]
    fn empty_element_has_no_value() {
        let mut item = SourceItem::new();
        item.push(Vocabulary::Google, "brand", None);
        assert_eq!(item.raw(Field::Google(GoogleField::Brand)), None);
        assert_eq!(item.value(Field::Google(GoogleField::Brand)), None);
    }

    #[test]
    fn lookup_respects_vocabulary() {
        let mut item = SourceItem::new();
        item.push(Vocabulary::Unscoped, "title", Some("plain".into()));
        item.push(Vocabulary::Google, "custom_label_0", Some("wrong".into()));
        assert_eq!(item.value(Field::Google(GoogleField::Title)), None);
        assert_eq!(item.value(Field::CustomLabel(0)), None);
    }

    #[test]
    fn custom_label_index_must_be_spelled_exactly() {
        let label = Field::CustomLabel(3);
        assert!(label.matches(Vocabulary::Unscoped, "custom_label_3"));
        assert!(!label.matches(Vocabulary::Unscoped, "custom_label_03"));
        assert!(!label.matches(Vocabulary::Unscoped, "custom_label_+3"));
        assert!(!label.matches(Vocabulary::Unscoped, "custom_label_"));
        assert!(!label.matches(Vocabulary::Unscoped, "custom_label_30"));
        assert!(!label.matches(Vocabulary::Google, "custom_label_3"));
        assert!(Field::CustomLabel(0).matches(Vocabulary::Unscoped, "custom_label_0"));
    }

    #[test]
    fn repeated_field_returns_first_occurrence() {
        let item = SourceItem::new()
            .with(Field::Google(GoogleField::Id), "first")
            .with(Field::Google(GoogleField::Id), "second");
        assert_eq!(item.value(Field::Google(GoogleField::Id)), Some("first"));
    }

    #[test]
    fn custom_label_matches_exact_index() {
        let item = SourceItem::new().with(Field::CustomLabel(3), "Lifestyle");
        assert_eq!(item.value(Field::CustomLabel(3)), Some("Lifestyle"));
        assert_eq!(item.value(Field::CustomLabel(0)), None);
    }

    #[test]
    fn field_display_uses_feed_names() {
        assert_eq!(
            Field::Google(GoogleField::ImageLink).to_string(),
            "g:image_link"
        );
        assert_eq!(Field::CustomLabel(4).to_string(), "custom_label_4");
    }
}
