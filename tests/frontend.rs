use arrowlang::{
    ast::{BinaryOperator, Instruction, Operand, Program},
    error::{LexError, SyntaxError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::parse_program,
        value::{core::Value, number::Number},
    },
};

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src).unwrap().into_iter().map(|(token, _)| token).collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn parse(src: &str) -> Result<Program, SyntaxError> {
    parse_program(&tokenize(src).unwrap())
}

#[test]
fn keywords_only_match_whole_words() {
    assert_eq!(tokens("print printer input inputs function functions when whenever"),
               vec![Token::Print,
                    ident("printer"),
                    Token::Input,
                    ident("inputs"),
                    Token::Function,
                    ident("functions"),
                    Token::When,
                    ident("whenever")]);
    assert_eq!(tokens("otherwise fallback"), vec![Token::Otherwise, Token::Fallback]);
}

#[test]
fn operators_take_the_longest_match() {
    assert_eq!(tokens(">= <= > < -> -"),
               vec![Token::GreaterEqual,
                    Token::LessEqual,
                    Token::Greater,
                    Token::Less,
                    Token::Arrow,
                    Token::Minus]);
    assert_eq!(tokens("x->1"), vec![ident("x"), Token::Arrow, Token::Number(Number::Integer(1))]);
    assert_eq!(tokens("x-1"), vec![ident("x"), Token::Minus, Token::Number(Number::Integer(1))]);
    assert_eq!(tokens("x- >1"),
               vec![ident("x"), Token::Minus, Token::Greater, Token::Number(Number::Integer(1))]);
}

#[test]
fn number_literals() {
    assert_eq!(tokens("42 3.14 3. 007"),
               vec![Token::Number(Number::Integer(42)),
                    Token::Number(Number::Real(3.14)),
                    Token::Number(Number::Real(3.0)),
                    Token::Number(Number::Integer(7))]);
    assert_eq!(tokens("12abc"), vec![Token::Number(Number::Integer(12)), ident("abc")]);
}

#[test]
fn oversized_integer_is_rejected() {
    assert_eq!(tokenize("x -> 1\ny -> 99999999999999999999"),
               Err(LexError::InvalidNumber { literal: "99999999999999999999".to_string(),
                                             line:    2, }));
}

#[test]
fn unknown_character_reports_its_line() {
    assert_eq!(tokenize("x -> 1\n\n  @"),
               Err(LexError::UnexpectedCharacter { character: '@', line: 3 }));
    assert!(matches!(tokenize("print(\"open"),
                     Err(LexError::UnexpectedCharacter { character: '"', line: 1 })));
}

#[test]
fn unterminated_string_reports_its_opening_line() {
    assert_eq!(tokenize("x -> \"abc\n\n\nprint(x)"),
               Err(LexError::UnexpectedCharacter { character: '"', line: 1 }));
    assert_eq!(tokenize("x -> \"abc\nprint(x)"),
               Err(LexError::UnexpectedCharacter { character: '"', line: 1 }));
    assert_eq!(tokenize("a -> 1\nb -> 2\nx -> \"abc\nprint(x)"),
               Err(LexError::UnexpectedCharacter { character: '"', line: 3 }));
}

#[test]
fn lines_after_a_multiline_string() {
    let result = tokenize("x -> \"a\n\nb\" @").unwrap_err();
    assert_eq!(result, LexError::UnexpectedCharacter { character: '@', line: 3 });
}

#[test]
fn string_backslashes_are_kept() {
    assert_eq!(tokens(r#""a\"b" "c\\d""#),
               vec![Token::Text(r#"a\"b"#.to_string()), Token::Text(r"c\\d".to_string())]);
}

#[test]
fn strings_can_span_lines() {
    let result = tokenize("x -> \"a\nb\"\nprint(x)").unwrap();

    assert_eq!(result[2], (Token::Text("a\nb".to_string()), 1));
    assert_eq!(result[3], (Token::Print, 3));
}

#[test]
fn punctuation_and_braces() {
    assert_eq!(tokens("f(a, b) { }"),
               vec![ident("f"),
                    Token::LParen,
                    ident("a"),
                    Token::Comma,
                    ident("b"),
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace]);
}

#[test]
fn accented_identifiers() {
    assert_eq!(tokens("wynik_ż Ñandú café"), vec![ident("wynik_ż"), ident("Ñandú"), ident("café")]);
}

#[test]
fn assignment_ends_at_next_statement() {
    let program = parse("a -> 1 + 2 b -> a print(b)").unwrap();
    assert_eq!(program.instructions.len(), 3);

    let Instruction::Assign { name, value, .. } = &program.instructions[0] else {
        panic!("expected an assignment");
    };
    assert_eq!(name, "a");
    assert_eq!(value.first,
               Operand::Literal { value: Value::from(1),
                                  line:  1, });
    assert_eq!(value.rest.len(), 1);
    assert_eq!(value.rest[0].0, BinaryOperator::Add);

    assert!(matches!(&program.instructions[1], Instruction::Assign { name, .. } if name == "b"));
    assert!(matches!(&program.instructions[2], Instruction::Output { .. }));
}

#[test]
fn assignment_continues_across_lines() {
    let program = parse("a -> 1\n+ 2\n* 3\nprint(a)").unwrap();

    let Instruction::Assign { value, line, .. } = &program.instructions[0] else {
        panic!("expected an assignment");
    };
    assert_eq!(*line, 1);
    assert_eq!(value.rest.iter().map(|(op, line, _)| (*op, *line)).collect::<Vec<_>>(),
               vec![(BinaryOperator::Add, 2), (BinaryOperator::Mul, 3)]);
}

#[test]
fn call_arguments_are_split_on_commas() {
    let program = parse("f(1 + 2, x, \"s\")\ng()").unwrap();

    let Instruction::Call { name, arguments, .. } = &program.instructions[0] else {
        panic!("expected a call");
    };
    assert_eq!(name, "f");
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[0].rest.len(), 1);
    assert_eq!(arguments[1].first,
               Operand::Variable { name: "x".to_string(),
                                   line: 1, });

    assert!(matches!(&program.instructions[1], Instruction::Call { arguments, line: 2, .. } if arguments.is_empty()));
}

#[test]
fn input_takes_a_prompt() {
    let program = parse("input(\"Name?\")").unwrap();
    assert_eq!(program.instructions,
               vec![Instruction::Input { prompt: "Name?".to_string(),
                                         line:   1, }]);
}

#[test]
fn function_definitions_go_to_the_table() {
    let program = parse("x -> 1\nfunction add(a, b) {\n  print(a + b)\n}\nadd(x, 2)").unwrap();

    assert_eq!(program.instructions.len(), 2);
    let add = &program.functions["add"];
    assert_eq!(add.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(add.line, 2);
    assert_eq!(add.body.len(), 1);
    assert_eq!(add.body[0].line(), 3);
}

#[test]
fn nested_definitions_are_hoisted() {
    let program =
        parse("function outer() { function inner() { print(1) } inner() print(2) }").unwrap();

    assert!(program.instructions.is_empty());
    assert_eq!(program.functions.len(), 2);
    assert_eq!(program.functions["outer"].body.len(), 2);
    assert_eq!(program.functions["inner"].body.len(), 1);
}

#[test]
fn empty_function_body() {
    let program = parse("function noop() { }\nnoop()").unwrap();
    assert!(program.functions["noop"].params.is_empty());
    assert!(program.functions["noop"].body.is_empty());
}

#[test]
fn later_definition_wins() {
    let program = parse("function f(a) { }\nfunction f(a, b) { }").unwrap();
    assert_eq!(program.functions["f"].params.len(), 2);
    assert_eq!(program.functions["f"].line, 2);
}

#[test]
fn syntax_error_variants() {
    assert_eq!(parse("f(1,,2)"),
               Err(SyntaxError::EmptyArgument { function: "f".to_string(),
                                                line:     1, }));
    assert_eq!(parse("\nprint()"), Err(SyntaxError::EmptyExpression { line: 2 }));
    assert_eq!(parse("print(1 > 2)"),
               Err(SyntaxError::Unsupported { token: "'>'".to_string(),
                                              line:  1, }));
    assert_eq!(parse("print(when)"),
               Err(SyntaxError::ReservedKeyword { keyword: "when".to_string(),
                                                  line:    1, }));
    assert_eq!(parse("print(1"),
               Err(SyntaxError::MissingDelimiter { delimiter: ')',
                                                   construct: "print",
                                                   line:      1, }));
    assert_eq!(parse("function f() {\nprint(1)"),
               Err(SyntaxError::MissingDelimiter { delimiter: '}',
                                                   construct: "function body",
                                                   line:      1, }));
    assert!(matches!(parse("function f(1) { }"), Err(SyntaxError::Expected { .. })));
    assert!(matches!(parse("x -> 1 2"), Err(SyntaxError::Expected { .. })));
    assert!(matches!(parse("42"), Err(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(parse("x"), Err(SyntaxError::UnexpectedEndOfInput { .. })));
}

#[test]
fn syntax_error_message() {
    let err = parse("x -> 1\nprint(2").unwrap_err();
    assert_eq!(err.line(), 2);
    assert!(err.to_string().starts_with("Error on line 2"), "{err}");
}
