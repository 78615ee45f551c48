use crate::grammar::rule::BindingPower;
use crate::grammar::rule::LeftDenotation;
use crate::grammar::rule::NullDenotation;
use crate::grammar::rule::Rule;
use crate::parser::Parser;
use crate::PrattError;
use anyhow::Result;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

/// Defines the binding power and the denotations for the tokens of a
/// language.
///
/// A grammar is built once and then shared by every [Parser] that uses it. The
/// parser only takes a shared reference, so the grammar cannot change during a
/// parse. Since all functions inside the grammar are `Send + Sync`, a grammar
/// can also be shared between parsers on different threads.
///
/// The type parameters are the token type `K`, the token `T`, and the result
/// `R` which is returned by all denotations.
pub struct Grammar<K, T, R> {
    classify: Box<dyn Fn(&T) -> K + Send + Sync>,
    handle_unexpected_token: Box<dyn Fn(&T) -> Result<()> + Send + Sync>,
    rules: HashMap<K, Rule<K, T, R>>,
}

impl<K, T, R> Grammar<K, T, R>
where
    K: Eq + Hash + Debug,
{
    /// Create an empty grammar.
    ///
    /// `classify` returns the type of a token; rules are looked up by this
    /// type. `handle_unexpected_token` is called with tokens for which no rule
    /// exists, or no rule for the position in which they were found. It must
    /// return an error; use [crate::unexpected_token] for a default.
    pub fn new<C, H>(classify: C, handle_unexpected_token: H) -> Self
    where
        C: Fn(&T) -> K + Send + Sync + 'static,
        H: Fn(&T) -> Result<()> + Send + Sync + 'static,
    {
        Grammar {
            classify: Box::new(classify),
            handle_unexpected_token: Box::new(handle_unexpected_token),
            rules: HashMap::new(),
        }
    }
    /// Make the grammar aware of a token type without giving it denotations.
    ///
    /// Use this for tokens such as closing parentheses, commas, or an end of
    /// input marker. The parser has to know their binding power (0) in order
    /// to stop in front of them.
    pub fn declare(&mut self, kind: K) {
        self.rule_mut(kind, 0);
    }
    /// Return the rule for `kind`, creating it with `binding_power` if it does
    /// not exist yet, or raising its binding power to `binding_power`.
    fn rule_mut(&mut self, kind: K, binding_power: BindingPower) -> &mut Rule<K, T, R> {
        match self.rules.entry(kind) {
            Entry::Occupied(entry) => {
                let rule = entry.into_mut();
                rule.raise_binding_power(binding_power);
                rule
            }
            Entry::Vacant(entry) => entry.insert(Rule::new(binding_power)),
        }
    }
    fn check_free(&self, kind: &K, null: bool, left: bool) -> Result<()> {
        if let Some(rule) = self.rules.get(kind) {
            if null && rule.has_null_denotation() {
                return Err(PrattError::NullDenotationDefined(format!("{kind:?}")).into());
            }
            if left && rule.has_left_denotation() {
                return Err(PrattError::LeftDenotationDefined(format!("{kind:?}")).into());
            }
        }
        Ok(())
    }
    /// Set the null denotation for the given token type.
    ///
    /// The binding power of the type becomes the maximum of the current binding
    /// power and `binding_power`. Fails without changing anything if the type
    /// already has a null denotation.
    pub fn set_prefix<F>(&mut self, kind: K, binding_power: BindingPower, handler: F) -> Result<()>
    where
        F: Fn(T, &mut Parser<'_, K, T, R>) -> Result<R> + Send + Sync + 'static,
    {
        self.check_free(&kind, true, false)?;
        let handler: NullDenotation<K, T, R> = Box::new(handler);
        self.rule_mut(kind, binding_power)
            .set_null_denotation(handler);
        Ok(())
    }
    /// Set the left denotation for the given token type.
    ///
    /// Same rules as for [Grammar::set_prefix] apply.
    pub fn set_infix<F>(&mut self, kind: K, binding_power: BindingPower, handler: F) -> Result<()>
    where
        F: Fn(T, &mut Parser<'_, K, T, R>, R) -> Result<R> + Send + Sync + 'static,
    {
        self.check_free(&kind, false, true)?;
        let handler: LeftDenotation<K, T, R> = Box::new(handler);
        self.rule_mut(kind, binding_power)
            .set_left_denotation(handler);
        Ok(())
    }
    /// Return the rule for a token type, if the type is known.
    pub fn rule(&self, kind: &K) -> Option<&Rule<K, T, R>> {
        self.rules.get(kind)
    }
    pub fn classify(&self, token: &T) -> K {
        (self.classify)(token)
    }
    /// Let the unexpected token handler produce an error for `token`.
    ///
    /// If the handler does not return an error, [PrattError::HandlerDidNotAbort]
    /// is returned instead.
    pub fn unexpected(&self, token: &T) -> anyhow::Error {
        match (self.handle_unexpected_token)(token) {
            Err(err) => err,
            Ok(()) => PrattError::HandlerDidNotAbort.into(),
        }
    }
    /// Return the rule for the type of `token`.
    ///
    /// Unknown types are reported via the unexpected token handler.
    pub fn lookup(&self, token: &T) -> Result<&Rule<K, T, R>> {
        let kind = self.classify(token);
        trace!("Looking up rule for {:?}", kind);
        match self.rules.get(&kind) {
            Some(rule) => Ok(rule),
            None => Err(self.unexpected(token)),
        }
    }
    pub fn left_binding_power(&self, token: &T) -> Result<BindingPower> {
        Ok(self.lookup(token)?.binding_power())
    }
}
