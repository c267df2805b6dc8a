pub const DEFAULT_QUOTE: &str =
    "The only way to do great work is to love what you do. - Steve Jobs";

const CURATED: [&str; 6] = [
    DEFAULT_QUOTE,
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "You don't have to control your thoughts. You just have to stop letting them control you. - Dan Millman",
    "Almost everything will work again if you unplug it for a few minutes, including you. - Anne Lamott",
    "What lies behind us and what lies before us are tiny matters compared to what lies within us. - Ralph Waldo Emerson",
    "Happiness is not something ready made. It comes from your own actions. - Dalai Lama",
];

pub trait QuoteSource: Send + Sync {
    fn next_quote(&self, current: &str) -> String;
}

/// Cycles through a fixed list, continuing after whatever is shown now.
#[derive(Debug, Clone)]
pub struct RotatingQuotes {
    quotes: Vec<String>,
}

impl RotatingQuotes {
    pub fn new(quotes: Vec<String>) -> Self {
        Self { quotes }
    }
}

impl Default for RotatingQuotes {
    fn default() -> Self {
        Self::new(CURATED.iter().map(|q| q.to_string()).collect())
    }
}

impl QuoteSource for RotatingQuotes {
    fn next_quote(&self, current: &str) -> String {
        let next = self
            .quotes
            .iter()
            .position(|quote| quote == current)
            .map_or(0, |index| (index + 1) % self.quotes.len());
        self.quotes
            .get(next)
            .cloned()
            .unwrap_or_else(|| current.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct QuotePanel {
    current: String,
}

impl Default for QuotePanel {
    fn default() -> Self {
        Self {
            current: DEFAULT_QUOTE.to_string(),
        }
    }
}

impl QuotePanel {
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn refresh(&mut self, source: &dyn QuoteSource) -> &str {
        self.current = source.next_quote(&self.current);
        &self.current
    }
}
