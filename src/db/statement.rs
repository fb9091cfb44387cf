//! Single-statement guard for SQL text built by interpolation.
//!
//! sqlx runs every `;`-separated statement in a query string, so a payload
//! like `x'; DELETE FROM users--` would execute the DELETE. Text that carries
//! anything but whitespace, comments or `;` after the first statement is
//! refused before it reaches SQLite.

#[derive(Clone, Copy, PartialEq, Eq)]
enum Lex {
    Code,
    Quoted(char),
    LineComment,
    BlockComment,
}

/// True when `sql` holds more than one statement.
///
/// Quoting follows SQLite's tokenizer: `'..'`, `".."` and `` `..` `` with the
/// delimiter doubled as escape, `[..]` without escape, `--` and `/* */`
/// comments. An unterminated literal swallows the rest of the text, which
/// leaves SQLite to report it.
pub fn has_trailing_statement(sql: &str) -> bool {
    let mut state = Lex::Code;
    let mut ended = false;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            Lex::Code => match c {
                '\'' | '"' | '`' => state = Lex::Quoted(c),
                '[' => state = Lex::Quoted(']'),
                '-' if chars.peek() == Some(&'-') => {
                    chars.next();
                    state = Lex::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = Lex::BlockComment;
                }
                ';' => ended = true,
                _ => {}
            },
            Lex::Quoted(close) => {
                if c == close {
                    // Doubled delimiter is an escaped delimiter, except for `]`.
                    if close != ']' && chars.peek() == Some(&close) {
                        chars.next();
                    } else {
                        state = Lex::Code;
                    }
                }
                continue;
            }
            Lex::LineComment => {
                if c == '\n' {
                    state = Lex::Code;
                }
                continue;
            }
            Lex::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = Lex::Code;
                }
                continue;
            }
        }

        if ended {
            match state {
                Lex::Code if c != ';' && !c.is_whitespace() => return true,
                Lex::Quoted(_) => return true,
                _ => {}
            }
        }
    }
    false
}
