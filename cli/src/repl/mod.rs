mod completer;
mod helper;
mod highlighter;
mod hinter;

use kestrel::errors::LexErrorKind;
use kestrel::lexer::token::Token;
use kestrel::{ScanOptions, Scanner, Source, lex_with_diagnostics};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;

struct Session {
    options: ScanOptions,
    json: bool,
    entries: usize,
}

pub fn run(options: ScanOptions) -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper));

    let mut session = Session {
        options,
        json: false,
        entries: 0,
    };

    println!(
        "{} {}",
        "kestrel".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                match handle_command(trimmed, &mut session) {
                    Command::Exit => break,
                    Command::Handled => continue,
                    Command::NotACommand => {}
                }

                session.entries += 1;
                let name = format!("<repl:{}>", session.entries);
                lex_snippet(&session, &Source::new(name, line));
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

enum Command {
    Exit,
    Handled,
    NotACommand,
}

fn handle_command(trimmed: &str, session: &mut Session) -> Command {
    match trimmed {
        ".exit" | "exit" => return Command::Exit,
        ".help" => {
            println!("{}", ".help                show commands".bright_blue());
            println!("{}", ".json                toggle JSON token output".bright_blue());
            println!("{}", ".load <file>         tokenize a file".bright_blue());
            println!("{}", ".exit                exit REPL".bright_blue());
            return Command::Handled;
        }
        ".json" => {
            session.json = !session.json;
            let state = if session.json { "on" } else { "off" };
            println!("{} {}", "json output".green(), state.bold());
            return Command::Handled;
        }
        _ => {}
    }

    if let Some(path) = trimmed.strip_prefix(".load ") {
        match Source::read(path.trim()) {
            Ok(source) => lex_snippet(session, &source),
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return Command::Handled;
    }
    Command::NotACommand
}

fn lex_snippet(session: &Session, source: &Source) {
    let mut scanner = Scanner::new(source.text()).with_options(session.options);
    let tokens = scanner.scan_all();

    if session.json {
        match serde_json::to_string(&tokens) {
            Ok(out) => println!("{out}"),
            Err(err) => eprintln!("{} {err}", "error:".red().bold()),
        }
    } else {
        crate::print_tokens(&tokens);
    }
    crate::report_diagnostics(source, scanner.diagnostics());
}

/// Whether the input so far ends inside a string, a block comment or an
/// open bracket, so the editor should keep reading lines.
pub fn needs_more_input(source: &str) -> bool {
    let (tokens, diagnostics) = lex_with_diagnostics(source);
    let unterminated = diagnostics.iter().any(|error| {
        matches!(
            error.kind,
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedBlockComment
        )
    });
    if unterminated {
        return true;
    }

    let depth = tokens.iter().fold(0i32, |depth, located| match located.token {
        Token::Symbol('(' | '{' | '[') => depth + 1,
        Token::Symbol(')' | '}' | ']') => depth - 1,
        _ => depth,
    });
    depth > 0
}

#[cfg(test)]
mod tests {
    use super::needs_more_input;
    use super::{highlighter, hinter};

    #[test]
    fn open_constructs_ask_for_more_input() {
        assert!(needs_more_input("fn f() {"));
        assert!(needs_more_input("let s = \"abc"));
        assert!(needs_more_input("/* still open"));
        assert!(!needs_more_input("fn f() { return 1; }"));
        assert!(!needs_more_input("let s = \"done\";"));
    }

    #[test]
    fn hints_the_missing_closing_quote() {
        assert_eq!(hinter::hint_for("let s = \"abc", 12), Some("\"".to_string()));
        assert_eq!(hinter::hint_for("let s = \"abc\";", 14), None);
        assert_eq!(hinter::hint_for("let s = \"abc", 3), None);
    }

    #[test]
    fn highlighting_keeps_the_visible_text() {
        let line = "let x: u8 = 0x1F; // done";
        let painted = highlighter::highlight_line(line);
        let visible = strip_ansi(&painted);
        assert_eq!(visible, line);
    }

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}
