use crate::init_subscriber;
use crate::Grammar;
use crate::Parser;
use anyhow::Result;
use parking_lot::Mutex;
use std::cmp::max;
use std::panic::Location;
use std::sync::Arc;
use tracing::info;

/// Token type used by the tests.
///
/// Tokens are string slices: numbers have the type `integer` and every other
/// token is its own type.
pub type TestGrammar<R> = Grammar<&'static str, &'static str, R>;

pub struct Tester;

impl Tester {
    /// Initialize the subscriber for the tests.
    ///
    /// Cannot pass options, since the tests run concurrently.
    pub fn init_tracing() {
        let level = tracing::Level::DEBUG;
        match init_subscriber(level) {
            Ok(_) => (),
            Err(_e) => (),
        }
    }
    /// Split `src` into operators, parentheses, and integers, followed by an
    /// `EOF` token.
    ///
    /// Whitespace is skipped. Letters are returned as single-character
    /// tokens, which makes it easy to write tests with made up token types.
    pub fn tokens(src: &'static str) -> Vec<&'static str> {
        let mut tokens = vec![];
        let mut start = 0;
        let chars = src.char_indices().collect::<Vec<(usize, char)>>();
        while start < chars.len() {
            let (index, c) = chars[start];
            let mut end = start + 1;
            if c.is_ascii_digit() {
                while end < chars.len() && chars[end].1.is_ascii_digit() {
                    end += 1;
                }
            } else if c == '*' && end < chars.len() && chars[end].1 == '*' {
                end += 1;
            }
            if !c.is_whitespace() {
                let stop = chars.get(end).map(|(i, _)| *i).unwrap_or(src.len());
                tokens.push(&src[index..stop]);
            }
            start = end;
        }
        tokens.push("EOF");
        tokens
    }
    pub fn classify(token: &&'static str) -> &'static str {
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            "integer"
        } else {
            *token
        }
    }
    /// A grammar that knows about `EOF` and fails on unexpected tokens.
    pub fn grammar<R: 'static>() -> TestGrammar<R> {
        let mut grammar = Grammar::new(Tester::classify, |token: &&'static str| {
            Err(anyhow::anyhow!("unexpected token: {token}"))
        });
        grammar.declare("EOF");
        grammar
    }
    /// Register integers as literals.
    pub fn integers(grammar: &mut TestGrammar<i64>) {
        grammar
            .literal("integer", |token| Ok(token.parse::<i64>()?))
            .unwrap();
    }
    /// Parse `src` with the grammar and check that all tokens up to `EOF` were
    /// used.
    pub fn parse<R>(grammar: &TestGrammar<R>, src: &'static str) -> Result<R> {
        info!("Parsing:\n```\n{src}\n```");
        let mut parser = Parser::new(grammar, Tester::tokens(src));
        let result = parser.parse()?;
        assert_eq!(parser.token(), Some(&"EOF"), "not all tokens were used");
        Ok(result)
    }
    fn point_to_missing_line(expected: &str, index: usize) -> String {
        let mut result = String::new();
        result.push_str("A line is missing from the output:\n");
        result.push_str("```");
        for (i, line) in expected.lines().enumerate() {
            if i == index {
                let msg = format!("{line}   <== missing");
                result.push_str(&format!("\n{msg}"));
            } else {
                result.push_str(&format!("\n{line}"));
            }
        }
        result.push_str("\n```");
        result
    }
    /// Check that both texts have the same lines, ignoring surrounding
    /// whitespace.
    pub fn check_lines_exact(actual: &str, expected: &str, caller: &Location<'_>) {
        let actual = actual.trim();
        let expected = expected.trim();
        let l = max(actual.lines().count(), expected.lines().count());
        for i in 0..l {
            let expected_line = match expected.lines().nth(i) {
                Some(line) => line.trim(),
                None => panic!("Unexpected line {i} in output: called from {caller}"),
            };
            let actual_line = match actual.lines().nth(i) {
                Some(line) => line.trim(),
                None => {
                    let msg = Self::point_to_missing_line(expected, i);
                    panic!("{msg}\nwhen called from {caller}");
                }
            };
            assert_eq!(actual_line, expected_line, "called from {caller}");
        }
    }
}

/// Records calls from inside denotations.
///
/// Denotations have to be `Send + Sync`, so they cannot capture a mutable
/// vector directly. Clones share the same record.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn record(&self, call: &str) {
        self.calls.lock().push(call.to_string());
    }
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|c| *c == call).count()
    }
}

#[test]
fn test_tokens() {
    assert_eq!(Tester::tokens("1 + 23"), vec!["1", "+", "23", "EOF"]);
    assert_eq!(Tester::tokens("2 ** 3"), vec!["2", "**", "3", "EOF"]);
    assert_eq!(Tester::tokens("(1)*2"), vec!["(", "1", ")", "*", "2", "EOF"]);
    assert_eq!(Tester::tokens(""), vec!["EOF"]);
    assert_eq!(Tester::classify(&"42"), "integer");
    assert_eq!(Tester::classify(&"+"), "+");
}
