use crate::parser::Parser;
use anyhow::Result;

/// How tightly a token binds to the expression on its left.
///
/// Can be negative. Tokens that are only declared (such as an end marker) have
/// a binding power of 0, so parsing stops at them.
pub type BindingPower = i32;

/// Called when a token of some type starts an expression.
///
/// Receives the token and the parser, which can be used to parse operands.
pub type NullDenotation<K, T, R> = Box<dyn Fn(T, &mut Parser<'_, K, T, R>) -> Result<R> + Send + Sync>;

/// Called when a token of some type continues an expression.
///
/// Receives the token, the parser, and the result for the expression to the
/// left of the token.
pub type LeftDenotation<K, T, R> =
    Box<dyn Fn(T, &mut Parser<'_, K, T, R>, R) -> Result<R> + Send + Sync>;

/// Everything the grammar knows about one token type.
pub struct Rule<K, T, R> {
    binding_power: BindingPower,
    null_denotation: Option<NullDenotation<K, T, R>>,
    left_denotation: Option<LeftDenotation<K, T, R>>,
}

impl<K, T, R> Rule<K, T, R> {
    pub(crate) fn new(binding_power: BindingPower) -> Self {
        Rule {
            binding_power,
            null_denotation: None,
            left_denotation: None,
        }
    }
    pub fn binding_power(&self) -> BindingPower {
        self.binding_power
    }
    pub fn has_null_denotation(&self) -> bool {
        self.null_denotation.is_some()
    }
    pub fn has_left_denotation(&self) -> bool {
        self.left_denotation.is_some()
    }
    pub(crate) fn null_denotation(&self) -> Option<&NullDenotation<K, T, R>> {
        self.null_denotation.as_ref()
    }
    pub(crate) fn left_denotation(&self) -> Option<&LeftDenotation<K, T, R>> {
        self.left_denotation.as_ref()
    }
    /// Raise the binding power; a lower value never overrides a higher one.
    pub(crate) fn raise_binding_power(&mut self, binding_power: BindingPower) {
        self.binding_power = self.binding_power.max(binding_power);
    }
    pub(crate) fn set_null_denotation(&mut self, null_denotation: NullDenotation<K, T, R>) {
        self.null_denotation = Some(null_denotation);
    }
    pub(crate) fn set_left_denotation(&mut self, left_denotation: LeftDenotation<K, T, R>) {
        self.left_denotation = Some(left_denotation);
    }
}
