use crate::grammar::BindingPower;
use crate::grammar::Grammar;
use crate::PrattError;
use anyhow::Result;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Parses the tokens from a token source using a [Grammar].
///
/// The parser always holds one token of lookahead, which is the token after
/// the one that a denotation is called for. A parser is meant for a single
/// parse; create a new one for every token source.
pub struct Parser<'g, K, T, R> {
    grammar: &'g Grammar<K, T, R>,
    tokens: Box<dyn Iterator<Item = Result<T>> + 'g>,
    token: Option<T>,
}

impl<'g, K, T, R> Parser<'g, K, T, R>
where
    K: Eq + Hash + Debug,
    T: 'g,
{
    /// Create a parser and read the first token from `tokens`.
    ///
    /// The last token should be of a declared type with binding power 0 (such
    /// as an end of input marker) so that parsing stops in front of it.
    pub fn new<I>(grammar: &'g Grammar<K, T, R>, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'g,
    {
        let mut tokens = tokens.into_iter();
        let token = tokens.next();
        Parser {
            grammar,
            tokens: Box::new(tokens.map(Ok::<T, anyhow::Error>)),
            token,
        }
    }
    /// Create a parser for a token source that can fail.
    ///
    /// An error from the source aborts the parse that is running when the
    /// error is read. This can be used to cancel parsing.
    pub fn try_new<I>(grammar: &'g Grammar<K, T, R>, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<T>>,
        I::IntoIter: 'g,
    {
        let mut tokens: Box<dyn Iterator<Item = Result<T>> + 'g> = Box::new(tokens.into_iter());
        let token = tokens.next().transpose()?;
        Ok(Parser {
            grammar,
            tokens,
            token,
        })
    }
    pub fn grammar(&self) -> &'g Grammar<K, T, R> {
        self.grammar
    }
    /// The lookahead token, or `None` if the token source is exhausted.
    pub fn token(&self) -> Option<&T> {
        self.token.as_ref()
    }
    /// Take the lookahead token and read the next one.
    fn next(&mut self) -> Result<T> {
        let token = self.token.take().ok_or(PrattError::EndOfInput)?;
        self.token = self.tokens.next().transpose()?;
        Ok(token)
    }
    fn check(&self, kind: &K) -> bool {
        match &self.token {
            Some(token) => self.grammar.classify(token) == *kind,
            None => false,
        }
    }
    /// Advance past the lookahead token and return it if it has the given
    /// type.
    ///
    /// Otherwise, stay at the current token and return `None`. Errors only
    /// come from the token source.
    pub fn advance(&mut self, kind: &K) -> Result<Option<T>> {
        if self.check(kind) {
            Ok(Some(self.next()?))
        } else {
            Ok(None)
        }
    }
    /// Like [Parser::advance], but a token of another type is an error.
    pub fn expect(&mut self, kind: &K) -> Result<T> {
        match self.advance(kind)? {
            Some(token) => Ok(token),
            None => {
                let found = match &self.token {
                    Some(token) => format!("{:?}", self.grammar.classify(token)),
                    None => "end of token stream".to_string(),
                };
                Err(PrattError::MissingToken {
                    expected: format!("{kind:?}"),
                    found,
                }
                .into())
            }
        }
    }
    /// Parse an expression with a right binding power of 0.
    pub fn parse(&mut self) -> Result<R> {
        self.parse_with(0)
    }
    /// Parse an expression until a token is found with a left binding power
    /// that is less than or equal to `right_binding_power`.
    ///
    /// A token source that runs out without such a token also ends the
    /// expression.
    pub fn parse_with(&mut self, right_binding_power: BindingPower) -> Result<R> {
        let grammar = self.grammar;
        let first = self.next()?;
        let rule = grammar.lookup(&first)?;
        let mut left = match rule.null_denotation() {
            Some(null_denotation) => {
                debug!("Calling null denotation for {:?}", grammar.classify(&first));
                null_denotation(first, self)?
            }
            None => return Err(grammar.unexpected(&first)),
        };
        while let Some(token) = &self.token {
            let left_binding_power = grammar.left_binding_power(token)?;
            if left_binding_power <= right_binding_power {
                break;
            }
            let token = self.next()?;
            let rule = grammar.lookup(&token)?;
            left = match rule.left_denotation() {
                Some(left_denotation) => {
                    debug!(
                        "Calling left denotation for {:?} ({} > {})",
                        grammar.classify(&token),
                        left_binding_power,
                        right_binding_power
                    );
                    left_denotation(token, self, left)?
                }
                None => return Err(grammar.unexpected(&token)),
            };
        }
        Ok(left)
    }
}
