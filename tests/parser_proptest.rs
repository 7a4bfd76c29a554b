//! Property-based tests for the parser
//!
//! Valid programs are generated from the grammar as token streams. Random token soups
//! check that the parser never panics and never accepts without reproducing its input.

use proptest::prelude::*;
use simplejava::simplejava::lexer::{detokenize, tokenize};
use simplejava::simplejava::parser::{parse, SyntaxError};
use simplejava::simplejava::testing::tokens::{id, kw, num, program, program_header, ty};
use simplejava::{Token, TokenKind};

type Tokens = Vec<Token>;

fn concat(parts: impl IntoIterator<Item = Tokens>) -> Tokens {
    parts.into_iter().flatten().collect()
}

/// Identifiers that can never collide with a keyword
fn ident() -> impl Strategy<Value = Token> {
    "v[0-9]{0,3}".prop_map(|name| id(&name))
}

fn number() -> impl Strategy<Value = Token> {
    "[0-9]{1,4}".prop_map(|digits| num(&digits))
}

fn select_kind(kinds: &[TokenKind]) -> impl Strategy<Value = Token> {
    prop::sample::select(kinds.to_vec()).prop_map(kw)
}

fn arith_expr() -> BoxedStrategy<Tokens> {
    let factor = prop_oneof![ident(), number()].prop_map(|token| vec![token]);
    factor
        .prop_recursive(3, 24, 3, |inner| {
            prop_oneof![
                (
                    inner.clone(),
                    select_kind(&[
                        TokenKind::Plus,
                        TokenKind::Minus,
                        TokenKind::Times,
                        TokenKind::Divide,
                        TokenKind::Mod
                    ]),
                    inner.clone()
                )
                    .prop_map(|(left, op, right)| concat([left, vec![op], right])),
                inner.prop_map(|expr| concat([
                    vec![kw(TokenKind::LeftParen)],
                    expr,
                    vec![kw(TokenKind::RightParen)]
                ])),
            ]
        })
        .boxed()
}

fn rel_expr() -> BoxedStrategy<Tokens> {
    prop_oneof![
        arith_expr(),
        (
            arith_expr(),
            select_kind(&[
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual
            ]),
            arith_expr()
        )
            .prop_map(|(left, op, right)| concat([left, vec![op], right])),
        select_kind(&[TokenKind::True, TokenKind::False]).prop_map(|token| vec![token]),
    ]
    .boxed()
}

/// `rel-expr bool-expr`
fn condition() -> BoxedStrategy<Tokens> {
    let bool_op = select_kind(&[
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::And,
        TokenKind::Or,
    ]);
    (
        rel_expr(),
        prop::collection::vec((bool_op, rel_expr()), 0..3),
    )
        .prop_map(|(first, rest)| {
            let mut tokens = first;
            for (op, operand) in rest {
                tokens.push(op);
                tokens.extend(operand);
            }
            tokens
        })
        .boxed()
}

fn expr() -> BoxedStrategy<Tokens> {
    prop_oneof![
        condition(),
        "[a-z]".prop_map(|c| vec![
            kw(TokenKind::SingleQuote),
            Token::with_value(TokenKind::CharLiteral, c),
            kw(TokenKind::SingleQuote),
        ]),
    ]
    .boxed()
}

fn type_token() -> impl Strategy<Value = Token> {
    prop::sample::select(vec!["int", "boolean", "char"]).prop_map(ty)
}

/// `type ID [= expr]` without the semicolon
fn decl() -> BoxedStrategy<Tokens> {
    (type_token(), ident(), prop::option::of(expr()))
        .prop_map(|(ty, name, value)| {
            let mut tokens = vec![ty, name];
            if let Some(value) = value {
                tokens.push(kw(TokenKind::Assign));
                tokens.extend(value);
            }
            tokens
        })
        .boxed()
}

/// `ID = expr` without the semicolon
fn assign() -> BoxedStrategy<Tokens> {
    (ident(), expr())
        .prop_map(|(name, value)| concat([vec![name, kw(TokenKind::Assign)], value]))
        .boxed()
}

fn print() -> BoxedStrategy<Tokens> {
    let argument = prop_oneof![
        condition(),
        "[a-z ]{0,8}".prop_map(|text| vec![
            kw(TokenKind::DoubleQuote),
            Token::with_value(TokenKind::StringLiteral, text),
            kw(TokenKind::DoubleQuote),
        ]),
    ];
    argument
        .prop_map(|arg| {
            concat([
                vec![kw(TokenKind::Print), kw(TokenKind::LeftParen)],
                arg,
                vec![kw(TokenKind::RightParen)],
            ])
        })
        .boxed()
}

fn simple_statement() -> BoxedStrategy<Tokens> {
    prop_oneof![
        decl().prop_map(|tokens| concat([tokens, vec![kw(TokenKind::Semicolon)]])),
        assign().prop_map(|tokens| concat([tokens, vec![kw(TokenKind::Semicolon)]])),
        print().prop_map(|tokens| concat([tokens, vec![kw(TokenKind::Semicolon)]])),
        Just(vec![kw(TokenKind::Semicolon)]),
    ]
    .boxed()
}

fn block(statements: Tokens) -> Tokens {
    concat([
        vec![kw(TokenKind::LeftBrace)],
        statements,
        vec![kw(TokenKind::RightBrace)],
    ])
}

fn parenthesized(tokens: Tokens) -> Tokens {
    concat([
        vec![kw(TokenKind::LeftParen)],
        tokens,
        vec![kw(TokenKind::RightParen)],
    ])
}

fn statement() -> BoxedStrategy<Tokens> {
    simple_statement()
        .prop_recursive(3, 32, 4, |inner| {
            let body = prop::collection::vec(inner, 0..3).prop_map(|stmts| concat(stmts));
            prop_oneof![
                (condition(), body.clone()).prop_map(|(cond, body)| concat([
                    vec![kw(TokenKind::While)],
                    parenthesized(cond),
                    block(body)
                ])),
                (
                    prop::option::of(prop_oneof![decl(), assign()]),
                    condition(),
                    prop::option::of(arith_expr()),
                    body.clone()
                )
                    .prop_map(|(start, cond, step, body)| {
                        let header = concat([
                            start.unwrap_or_default(),
                            vec![kw(TokenKind::Semicolon)],
                            cond,
                            vec![kw(TokenKind::Semicolon)],
                            step.unwrap_or_default(),
                        ]);
                        concat([vec![kw(TokenKind::For)], parenthesized(header), block(body)])
                    }),
                (
                    condition(),
                    body.clone(),
                    prop::collection::vec((condition(), body.clone()), 0..2),
                    prop::option::of(body)
                )
                    .prop_map(|(cond, then, else_ifs, otherwise)| {
                        let mut tokens =
                            concat([vec![kw(TokenKind::If)], parenthesized(cond), block(then)]);
                        for (cond, body) in else_ifs {
                            tokens.push(kw(TokenKind::Else));
                            tokens.push(kw(TokenKind::If));
                            tokens.extend(parenthesized(cond));
                            tokens.extend(block(body));
                        }
                        if let Some(body) = otherwise {
                            tokens.push(kw(TokenKind::Else));
                            tokens.extend(block(body));
                        }
                        tokens
                    }),
            ]
        })
        .boxed()
}

fn valid_program() -> impl Strategy<Value = Tokens> {
    prop::collection::vec(statement(), 0..4).prop_map(|stmts| program(concat(stmts)))
}

/// Any token, value tokens with plausible and implausible values
fn any_token() -> impl Strategy<Value = Token> {
    prop::sample::select(TokenKind::ALL.to_vec()).prop_flat_map(|kind| {
        let value: BoxedStrategy<Option<String>> = match kind {
            TokenKind::Type => prop::sample::select(vec!["int", "boolean", "char", "long"])
                .prop_map(|v| Some(v.to_string()))
                .boxed(),
            TokenKind::Id | TokenKind::Num | TokenKind::CharLiteral | TokenKind::StringLiteral => {
                prop::option::of("[a-z0-9]{1,3}").boxed()
            }
            _ => Just(None).boxed(),
        };
        value.prop_map(move |value| Token { kind, value })
    })
}

proptest! {
    #[test]
    fn test_valid_programs_parse_to_their_input(tokens in valid_program()) {
        let tree = parse(tokens.clone());
        prop_assert!(tree.is_ok(), "rejected: {}", detokenize(&tokens));
        let tree = tree.unwrap();
        prop_assert_eq!(tree.tokens(), tokens);
    }

    #[test]
    fn test_parsing_is_deterministic(tokens in valid_program()) {
        let first = parse(tokens.clone());
        let second = parse(tokens);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_proper_prefixes_are_truncated(tokens in valid_program(), cut in any::<prop::sample::Index>()) {
        let len = cut.index(tokens.len());
        let result = parse(tokens[..len].to_vec());
        let is_unconsumed = matches!(result, Err(SyntaxError::UnconsumedStack { position, .. }) if position == len);
        prop_assert!(is_unconsumed);
    }

    #[test]
    fn test_valid_programs_survive_detokenizing(tokens in valid_program()) {
        let text = detokenize(&tokens);
        prop_assert_eq!(tokenize(&text).unwrap(), tokens);
    }

    #[test]
    fn test_random_tokens_never_panic(tokens in prop::collection::vec(any_token(), 0..40)) {
        if let Ok(tree) = parse(tokens.clone()) {
            prop_assert_eq!(tree.tokens(), tokens);
        }
    }

    #[test]
    fn test_random_bodies_never_panic(body in prop::collection::vec(any_token(), 0..40)) {
        let mut tokens = program_header();
        tokens.extend(body);
        match parse(tokens.clone()) {
            Ok(tree) => prop_assert_eq!(tree.tokens(), tokens),
            Err(err) => prop_assert!(err.position() <= tokens.len()),
        }
    }
}
