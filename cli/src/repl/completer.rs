use kestrel::lexer::keywords::{BuiltinType, Keyword};
use rustyline::completion::Pair;

const LITERAL_WORDS: [&str; 4] = ["true", "false", "null", "undefined"];

pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = &line[..safe_pos];

    let start = word_start(prefix);
    let needle = &prefix[start..];
    if needle.is_empty() {
        return (start, Vec::new());
    }

    let mut words = Keyword::ALL
        .iter()
        .map(|keyword| keyword.as_str())
        .chain(BuiltinType::names())
        .chain(LITERAL_WORDS)
        .filter(|word| word.starts_with(needle))
        .collect::<Vec<_>>();
    words.sort_unstable();

    (start, pairs(&words))
}

fn pairs(values: &[&str]) -> Vec<Pair> {
    values
        .iter()
        .map(|v| Pair {
            display: (*v).to_string(),
            replacement: (*v).to_string(),
        })
        .collect()
}

fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| !is_word_char(*ch))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(line: &str) -> Vec<String> {
        complete_line(line, line.len())
            .1
            .into_iter()
            .map(|pair| pair.replacement)
            .collect()
    }

    #[test]
    fn completes_keywords_and_builtin_types() {
        assert_eq!(replacements("le"), vec!["let"]);
        assert_eq!(replacements("x: u1"), vec!["u128", "u16"]);
    }

    #[test]
    fn completion_starts_after_the_last_non_word_character() {
        let (start, _) = complete_line("let x = tr", 10);
        assert_eq!(start, 8);
        assert_eq!(replacements("let x = tr"), vec!["true"]);
    }

    #[test]
    fn empty_word_has_no_candidates() {
        assert!(replacements("let x = ").is_empty());
    }
}
