//! pratt is a small framework to build top-down operator precedence parsers.
//!
//! Such parsers are also known as Pratt parsers, after Vaughan Pratt who
//! described the technique in 1973.
//! The idea is that every kind of token knows how to parse itself.
//! A token that can start an expression (such as a number or a unary minus) has
//! a *null denotation*, and a token that can continue an expression (such as a
//! binary plus) has a *left denotation*.
//! On top of that, each kind of token has a *binding power* which decides how
//! tightly the token binds to the expression on its left.
//!
//! This crate provides two building blocks:
//!
//! - [Grammar], the table of rules. It maps each token type to its binding
//!   power and its denotations. Helpers such as [Grammar::infix] or
//!   [Grammar::enclosing] take care of the common cases.
//! - [Parser], the engine. It walks over a stream of tokens and calls the rules
//!   from the grammar. Rules receive the parser so that they can parse the
//!   operands they need.
//!
//! The crate does not know anything about tokens or results.
//! Tokens come from any iterator and the type of a token is determined by a
//! function that is passed to [Grammar::new].
//! Results can be anything, for example an AST node or a computed value.
//!
//! ```
//! use pratt::Grammar;
//! use pratt::Parser;
//!
//! fn classify(token: &&'static str) -> &'static str {
//!     match *token {
//!         "+" | "*" | "end" => token,
//!         _ => "number",
//!     }
//! }
//!
//! let mut grammar = Grammar::new(classify, pratt::unexpected_token);
//! grammar.declare("end");
//! grammar.literal("number", |token: &str| Ok(token.parse::<i64>()?)).unwrap();
//! grammar.infix("+", 10, |_, left, right| Ok(left + right)).unwrap();
//! grammar.infix("*", 20, |_, left, right| Ok(left * right)).unwrap();
//!
//! let tokens = vec!["1", "+", "2", "*", "3", "end"];
//! let mut parser = Parser::new(&grammar, tokens);
//! assert_eq!(parser.parse().unwrap(), 7);
//! ```
//!
//! Parsing is recursive, so the nesting depth of the input is limited by the
//! size of the call stack.

mod error;
mod grammar;
mod parser;
mod subscriber;
#[cfg(feature = "test-utils")]
pub mod tester;

pub use error::unexpected_token;
pub use error::PrattError;
pub use grammar::BindingPower;
pub use grammar::Grammar;
pub use grammar::LeftDenotation;
pub use grammar::NullDenotation;
pub use grammar::Rule;
pub use parser::Parser;
pub use subscriber::init_subscriber;
