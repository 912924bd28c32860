use super::error::PatternError;
use regex::Regex;

/// An ordered, immutable set of compiled line patterns
///
/// Order only affects how soon a match short-circuits, never the outcome.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile every word into a pattern, failing on the first invalid one
    pub fn compile<I, S>(words: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = words
            .into_iter()
            .map(|word| {
                let word = word.as_ref();
                Regex::new(word).map_err(|source| PatternError::Compile {
                    pattern: word.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if any pattern is found somewhere in the line
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(line))
    }

    /// Source text of the compiled patterns, in order
    pub fn as_strs(&self) -> Vec<&str> {
        self.patterns.iter().map(Regex::as_str).collect()
    }
}

/// Split a comma separated word list as given on the command line
///
/// There is no escaping: every literal comma separates two words, and empty
/// words are kept (an empty pattern matches every line).
pub fn split_words(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}
