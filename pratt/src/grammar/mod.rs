//! The rule table that tells the parser what to do with each token type.

mod grammar;
mod helpers;
mod rule;

pub use grammar::Grammar;
pub use rule::BindingPower;
pub use rule::LeftDenotation;
pub use rule::NullDenotation;
pub use rule::Rule;
