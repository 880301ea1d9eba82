//! User-supplied lookup key for the weather fetch.

/// Free-text city identifier read from the input field.
///
/// A query is immutable once constructed and is consumed by exactly one
/// fetch. The text travels to the outbound request without any
/// transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    /// Build a query from raw field text.
    ///
    /// Returns `None` for empty text; the caller substitutes the prompt
    /// message instead of invoking the fetcher.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_owned()))
        }
    }

    /// Identifier text exactly as the user supplied it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for query construction.

    use super::*;

    #[test]
    fn empty_text_yields_no_query() {
        assert_eq!(CityQuery::parse(""), None);
    }

    #[test]
    fn text_is_preserved_untransformed() {
        let query = CityQuery::parse("  São Paulo ").expect("non-empty text is a query");
        assert_eq!(
            query.as_str(),
            "  São Paulo ",
            "whitespace and casing must survive construction"
        );
    }
}
