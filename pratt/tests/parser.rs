extern crate pratt;

use anyhow::anyhow;
use pratt::tester::Recorder;
use pratt::tester::Tester;
use pratt::Grammar;
use pratt::Parser;
use pratt::PrattError;

#[test]
fn handle_unexpected_token_is_called() {
    Tester::init_tracing();
    let recorder = Recorder::new();
    let calls = recorder.clone();
    let mut grammar = Grammar::new(Tester::classify, move |token: &&'static str| {
        calls.record(&format!("unexpected {token}"));
        Err(anyhow!("syntax"))
    });
    let denotations = recorder.clone();
    grammar
        .literal("integer", move |token: &'static str| {
            denotations.record("literal");
            Ok(token.parse::<i64>()?)
        })
        .unwrap();
    let mut parser = Parser::new(&grammar, Tester::tokens("1 + 1"));

    let err = parser.parse().unwrap_err();
    assert_eq!(err.to_string(), "syntax");
    assert_eq!(recorder.calls(), vec!["literal", "unexpected +"]);
}

#[test]
fn handle_unexpected_token_not_aborting() {
    Tester::init_tracing();
    let grammar: Grammar<&str, &str, i64> = Grammar::new(Tester::classify, |_: &&'static str| Ok(()));
    let mut parser = Parser::new(&grammar, Tester::tokens("1 + 1"));

    let err = parser.parse().unwrap_err();
    let err = err.downcast_ref::<PrattError>().unwrap();
    assert_eq!(err, &PrattError::HandlerDidNotAbort);
}

#[test]
fn default_handler() {
    Tester::init_tracing();
    let mut grammar = Grammar::new(Tester::classify, pratt::unexpected_token);
    grammar.declare("EOF");
    Tester::integers(&mut grammar);
    let mut parser = Parser::new(&grammar, Tester::tokens("1 +"));
    let err = parser.parse().unwrap_err();
    let err = err.downcast_ref::<PrattError>().unwrap();
    assert_eq!(err, &PrattError::UnexpectedToken("\"+\"".to_string()));
}

#[test]
fn missing_null_denotation_is_unexpected() {
    Tester::init_tracing();
    let mut grammar = Tester::grammar();
    Tester::integers(&mut grammar);
    grammar.infix("+", 10, |_, left, right| Ok(left + right)).unwrap();
    let err = Tester::parse(&grammar, "+ 1").unwrap_err();
    assert_eq!(err.to_string(), "unexpected token: +");
    let err = Tester::parse(&grammar, "1 +").unwrap_err();
    assert_eq!(err.to_string(), "unexpected token: EOF");
}

#[test]
fn missing_left_denotation_is_unexpected() {
    Tester::init_tracing();
    let recorder = Recorder::new();
    let calls = recorder.clone();
    let mut grammar = Grammar::new(Tester::classify, move |token: &&'static str| {
        calls.record("unexpected");
        Err(anyhow!("unexpected token: {token}"))
    });
    grammar.declare("EOF");
    Tester::integers(&mut grammar);
    let calls = recorder.clone();
    grammar
        .prefix("-", 10, move |_, operand| {
            calls.record("prefix");
            Ok(-operand)
        })
        .unwrap();
    let err = Tester::parse(&grammar, "1 - 1").unwrap_err();
    assert_eq!(err.to_string(), "unexpected token: -");
    assert_eq!(recorder.count("unexpected"), 1);
    assert_eq!(recorder.count("prefix"), 0);
}

#[test]
fn literal() {
    let mut grammar = Tester::grammar();
    Tester::integers(&mut grammar);
    assert_eq!(Tester::parse(&grammar, "1").unwrap(), 1);
}

#[test]
fn null_denotation_is_called_at_expression_start() {
    let recorder = Recorder::new();
    let calls = recorder.clone();
    let mut grammar = Tester::grammar();
    grammar
        .set_prefix("a", 10, move |_, _| {
            calls.record("a");
            Ok("foo")
        })
        .unwrap();
    assert_eq!(Tester::parse(&grammar, "a").unwrap(), "foo");
    assert_eq!(recorder.calls(), vec!["a"]);
}

#[test]
fn left_denotation_is_called_after_expression_start() {
    let recorder = Recorder::new();
    let mut grammar = Tester::grammar();
    grammar.set_prefix("a", 10, |_, _| Ok("a")).unwrap();
    let calls = recorder.clone();
    grammar
        .set_infix("b", 10, move |_, _, left| {
            assert_eq!(left, "a");
            calls.record("b");
            Ok("b")
        })
        .unwrap();
    let calls = recorder.clone();
    grammar
        .set_infix("c", 10, move |_, _, left| {
            assert_eq!(left, "b");
            calls.record("c");
            Ok("c")
        })
        .unwrap();
    assert_eq!(Tester::parse(&grammar, "a b c").unwrap(), "c");
    assert_eq!(recorder.calls(), vec!["b", "c"]);
}

#[test]
fn parse_stops_when_lbp_equal_to_rbp() {
    let mut grammar = Tester::grammar();
    grammar.set_prefix("a", 10, |_, _| Ok("a")).unwrap();
    grammar.set_infix("b", 0, |_, _, _| Ok("b")).unwrap();
    let mut parser = Parser::new(&grammar, Tester::tokens("a b"));
    assert_eq!(parser.parse().unwrap(), "a");
    assert_eq!(parser.token(), Some(&"b"));
}

#[test]
fn parse_stops_when_lbp_less_than_rbp() {
    let mut grammar = Tester::grammar();
    grammar.set_prefix("a", 10, |_, _| Ok("a")).unwrap();
    grammar.set_infix("b", -1, |_, _, _| Ok("b")).unwrap();
    let mut parser = Parser::new(&grammar, Tester::tokens("a b"));
    assert_eq!(parser.parse().unwrap(), "a");
    assert_eq!(parser.token(), Some(&"b"));
}

#[test]
fn parse_with_right_binding_power() {
    let mut grammar = Tester::grammar();
    grammar.set_prefix("a", 0, |_, _| Ok("a")).unwrap();
    grammar.set_infix("b", 10, |_, _, _| Ok("b")).unwrap();
    let mut parser = Parser::new(&grammar, Tester::tokens("a b"));
    assert_eq!(parser.parse_with(10).unwrap(), "a");
    let mut parser = Parser::new(&grammar, Tester::tokens("a b"));
    assert_eq!(parser.parse_with(9).unwrap(), "b");
}

#[test]
fn parser_token_ahead_in_null_denotation() {
    let mut grammar = Tester::grammar();
    grammar.declare("b");
    grammar
        .set_prefix("a", 10, |token, parser| {
            assert_eq!(parser.token(), Some(&"b"));
            Ok(token)
        })
        .unwrap();
    let mut parser = Parser::new(&grammar, Tester::tokens("a b"));
    assert_eq!(parser.parse().unwrap(), "a");
}

#[test]
fn parser_token_ahead_in_left_denotation() {
    let mut grammar = Tester::grammar();
    grammar.declare("c");
    grammar.set_prefix("a", 10, |token, _| Ok(token)).unwrap();
    grammar
        .set_infix("b", 10, |token, parser, _| {
            assert_eq!(parser.token(), Some(&"c"));
            Ok(token)
        })
        .unwrap();
    let mut parser = Parser::new(&grammar, Tester::tokens("a b c"));
    assert_eq!(parser.parse().unwrap(), "b");
    assert_eq!(parser.token(), Some(&"c"));
}

#[test]
fn advance_successful() {
    let mut grammar = Tester::grammar();
    grammar
        .set_prefix("a", 10, |token, parser| {
            let following = parser.advance(&"b")?;
            assert_eq!(following, Some("b"));
            Ok(token)
        })
        .unwrap();
    assert_eq!(Tester::parse(&grammar, "a b").unwrap(), "a");
}

#[test]
fn advance_failure() {
    let mut grammar = Tester::grammar();
    grammar
        .set_prefix("a", 10, |token, parser| {
            let following = parser.advance(&"b")?;
            assert_eq!(following, None);
            assert_eq!(parser.token(), Some(&"EOF"));
            Ok(token)
        })
        .unwrap();
    assert_eq!(Tester::parse(&grammar, "a").unwrap(), "a");
}

#[test]
fn declared_tokens_terminate() {
    let mut grammar = Tester::grammar();
    Tester::integers(&mut grammar);
    grammar.declare(")");
    let mut parser = Parser::new(&grammar, Tester::tokens("1 ) 2"));
    assert_eq!(parser.parse().unwrap(), 1);
    assert_eq!(parser.token(), Some(&")"));

    // A declared token cannot start an expression.
    let mut parser = Parser::new(&grammar, Tester::tokens(")"));
    let err = parser.parse().unwrap_err();
    assert_eq!(err.to_string(), "unexpected token: )");
}
