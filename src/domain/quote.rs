use rand::{seq::SliceRandom, Rng};
use serde_json::Value;

const MISSING_QUOTE: &str = "No quote available";
const MISSING_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    /// Shown when the quotes service answers with nothing usable.
    pub fn fallback() -> Self {
        Self {
            quote: "No quotes available".to_owned(),
            author: "System".to_owned(),
        }
    }

    /// Builds a quote from one element of the `quotes` array.
    ///
    /// Missing, empty or non-string fields are replaced with placeholders so that a
    /// single odd element never takes the page down.
    fn from_value(value: &Value) -> Self {
        let text = |field: &str, placeholder: &'static str| {
            value
                .get(field)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(placeholder)
                .to_owned()
        };

        Self {
            quote: text("quote", MISSING_QUOTE),
            author: text("author", MISSING_AUTHOR),
        }
    }
}

/// A non-empty list of quotes.
#[derive(Debug, Clone)]
pub struct QuoteCollection(Vec<Quote>);

impl QuoteCollection {
    /// Parses a quotes service body of the shape `{ "quotes": [{ "quote", "author" }, ...] }`.
    ///
    /// Returns `None` when the body is not JSON, has no `quotes` array, or the array is empty.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let quotes = value.get("quotes")?.as_array()?;

        Self::try_from(quotes.iter().map(Quote::from_value).collect::<Vec<_>>()).ok()
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Quote {
        // non-empty by construction
        self.0.choose(rng).unwrap_or_else(|| &self.0[0])
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.0
    }
}

impl TryFrom<Vec<Quote>> for QuoteCollection {
    type Error = String;

    fn try_from(value: Vec<Quote>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("quote collection is empty".into());
        }
        Ok(Self(value))
    }
}
