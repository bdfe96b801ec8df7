use std::borrow::Cow;

use kestrel::lexer::token::Token;
use kestrel::lex_with_diagnostics;
use owo_colors::OwoColorize;

/// Color the line by the classes the lexer assigns. Text the lexer skips
/// (separators, plain comments, the tail after a fatal error) is copied as is.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let (tokens, _) = lex_with_diagnostics(line);
    if tokens.is_empty() {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() * 2);
    let mut copied = 0;
    for located in &tokens {
        let range = located.span.byte_range();
        out.push_str(&line[copied..range.start]);
        let text = &line[range.clone()];
        match &located.token {
            Token::Keyword(_) => out.push_str(&text.blue().bold().to_string()),
            Token::BuiltinType(_) => out.push_str(&text.cyan().to_string()),
            Token::Number(_) => out.push_str(&text.yellow().to_string()),
            Token::String(_) | Token::Char(_) => out.push_str(&text.green().to_string()),
            Token::Bool(_) | Token::Null | Token::Undefined => {
                out.push_str(&text.magenta().to_string())
            }
            Token::DocComment { .. } => out.push_str(&text.bright_black().italic().to_string()),
            Token::Symbol(_) | Token::Identifier(_) => out.push_str(text),
        }
        copied = range.end;
    }
    out.push_str(&line[copied..]);
    Cow::Owned(out)
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
