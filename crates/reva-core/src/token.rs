//! Text tokenization.

/// Splits text into lowercase word tokens.
///
/// Maximal runs of alphanumeric characters form tokens; punctuation and
/// whitespace are discarded. There is deliberately no stop-word removal,
/// stemming, or minimum token length — similarity scores depend on this
/// exact rule, so tokenization changes must go through an explicit option
/// rather than a silent "improvement".
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}
