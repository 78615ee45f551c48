//! Shortcuts for the denotations that most languages need.
//!
//! Each helper registers a null or left denotation via [Grammar::set_prefix]
//! or [Grammar::set_infix]; the given function only has to combine the parsed
//! parts into a result.

use crate::grammar::rule::BindingPower;
use crate::grammar::Grammar;
use anyhow::Result;
use std::fmt::Debug;
use std::hash::Hash;

impl<K, T, R> Grammar<K, T, R>
where
    K: Eq + Hash + Debug + Clone + Send + Sync + 'static,
    T: 'static,
    R: 'static,
{
    /// Define a literal such as a number or a name.
    ///
    /// `function` is called with the token and turns it into a result.
    pub fn literal<F>(&mut self, kind: K, function: F) -> Result<()>
    where
        F: Fn(T) -> Result<R> + Send + Sync + 'static,
    {
        self.set_prefix(kind, 0, move |token, _parser| function(token))
    }
    /// Define a prefix operator such as `-1` or `not x`.
    ///
    /// `function` is called with the token and the operand.
    pub fn prefix<F>(&mut self, kind: K, binding_power: BindingPower, function: F) -> Result<()>
    where
        F: Fn(T, R) -> Result<R> + Send + Sync + 'static,
    {
        self.set_prefix(kind, binding_power, move |token, parser| {
            let operand = parser.parse_with(binding_power)?;
            function(token, operand)
        })
    }
    /// Define a left associative infix operator such as `a - b`.
    ///
    /// `function` is called with the token, the left, and the right operand.
    pub fn infix<F>(&mut self, kind: K, binding_power: BindingPower, function: F) -> Result<()>
    where
        F: Fn(T, R, R) -> Result<R> + Send + Sync + 'static,
    {
        self.set_infix(kind, binding_power, move |token, parser, left| {
            let right = parser.parse_with(binding_power)?;
            function(token, left, right)
        })
    }
    /// Define a right associative infix operator such as `a ^ b`.
    ///
    /// The right operand is parsed with a binding power that is one lower, so
    /// `2 ^ 3 ^ 2` becomes `2 ^ (3 ^ 2)`.
    pub fn infix_r<F>(&mut self, kind: K, binding_power: BindingPower, function: F) -> Result<()>
    where
        F: Fn(T, R, R) -> Result<R> + Send + Sync + 'static,
    {
        self.set_infix(kind, binding_power, move |token, parser, left| {
            let right = parser.parse_with(binding_power.saturating_sub(1))?;
            function(token, left, right)
        })
    }
    /// Define a postfix operator such as `n!`.
    ///
    /// `function` is called with the token and the operand.
    pub fn postfix<F>(&mut self, kind: K, binding_power: BindingPower, function: F) -> Result<()>
    where
        F: Fn(T, R) -> Result<R> + Send + Sync + 'static,
    {
        self.set_infix(kind, binding_power, move |token, _parser, left| {
            function(token, left)
        })
    }
    /// Define an expression that encloses another one, such as `(a + b)`.
    ///
    /// `function` is called with the opening token, the closing token, and the
    /// enclosed expression. A missing closing token is an error. The closing
    /// type is declared as well.
    ///
    /// ```
    /// # use pratt::Grammar;
    /// # let mut grammar: Grammar<char, char, i64> = Grammar::new(|c: &char| *c, pratt::unexpected_token);
    /// grammar.enclosing('(', ')', 100, |_left, _right, body| Ok(body)).unwrap();
    /// ```
    pub fn enclosing<F>(
        &mut self,
        begin: K,
        end: K,
        binding_power: BindingPower,
        function: F,
    ) -> Result<()>
    where
        F: Fn(T, T, R) -> Result<R> + Send + Sync + 'static,
    {
        let expected = end.clone();
        self.set_prefix(begin, binding_power, move |left_token, parser| {
            let body = parser.parse()?;
            let right_token = parser.expect(&expected)?;
            function(left_token, right_token, body)
        })?;
        self.declare(end);
        Ok(())
    }
    /// Define a ternary operator such as `a ? b : c` or `a if b else c`.
    ///
    /// The left denotation is set for the first separator. `function` is called
    /// with both separators and the three operands in source order. A missing
    /// second separator is an error. The second separator is declared as well.
    pub fn ternary<F>(
        &mut self,
        first_separator: K,
        second_separator: K,
        binding_power: BindingPower,
        function: F,
    ) -> Result<()>
    where
        F: Fn(T, T, R, R, R) -> Result<R> + Send + Sync + 'static,
    {
        let expected = second_separator.clone();
        self.set_infix(first_separator, binding_power, move |first_sep, parser, first| {
            let second = parser.parse()?;
            let second_sep = parser.expect(&expected)?;
            let third = parser.parse()?;
            function(first_sep, second_sep, first, second, third)
        })?;
        self.declare(second_separator);
        Ok(())
    }
}
