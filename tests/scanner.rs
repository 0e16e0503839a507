#[cfg(test)]
mod scanner_tests {
    use rlox as lox;

    use lox::scanner::*;
    use lox::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source.as_bytes());
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(
            tokens.len(),
            expected.len(),
            "token count mismatch for {:?}: {:?}",
            source,
            tokens
        );

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert!(
                actual.token_type.same_kind(expected_type),
                "expected {:?}, got {:?}",
                expected_type,
                actual.token_type
            );
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "({*.,+*})",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::STAR, "*"),
                (TokenType::DOT, "."),
                (TokenType::COMMA, ","),
                (TokenType::PLUS, "+"),
                (TokenType::STAR, "*"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_operators() {
        assert_token_sequence(
            "! != = == < <= > >= - + ; /",
            &[
                (TokenType::BANG, "!"),
                (TokenType::BANG_EQUAL, "!="),
                (TokenType::EQUAL, "="),
                (TokenType::EQUAL_EQUAL, "=="),
                (TokenType::LESS, "<"),
                (TokenType::LESS_EQUAL, "<="),
                (TokenType::GREATER, ">"),
                (TokenType::GREATER_EQUAL, ">="),
                (TokenType::MINUS, "-"),
                (TokenType::PLUS, "+"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::SLASH, "/"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_03_keywords_and_identifiers() {
        assert_token_sequence(
            "var language = nil; while fun classy _under9",
            &[
                (TokenType::VAR, "var"),
                (TokenType::IDENTIFIER, "language"),
                (TokenType::EQUAL, "="),
                (TokenType::NIL, "nil"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::WHILE, "while"),
                (TokenType::FUN, "fun"),
                (TokenType::IDENTIFIER, "classy"),
                (TokenType::IDENTIFIER, "_under9"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_04_number_literals() {
        let tokens: Vec<Token> = Scanner::new(b"123 45.67 7.")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(tokens.len(), 5);

        match tokens[0].token_type {
            TokenType::NUMBER(n) => assert_eq!(n, 123.0),
            ref other => panic!("expected NUMBER, got {:?}", other),
        }

        match tokens[1].token_type {
            TokenType::NUMBER(n) => assert_eq!(n, 45.67),
            ref other => panic!("expected NUMBER, got {:?}", other),
        }

        // A trailing dot is not part of the number.
        match tokens[2].token_type {
            TokenType::NUMBER(n) => assert_eq!(n, 7.0),
            ref other => panic!("expected NUMBER, got {:?}", other),
        }
        assert!(tokens[3].token_type.same_kind(&TokenType::DOT));
        assert!(tokens[4].token_type.same_kind(&TokenType::EOF));
    }

    #[test]
    fn test_scanner_05_string_literal() {
        let tokens: Vec<Token> = Scanner::new(b"\"hello world\"")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "\"hello world\"");

        match &tokens[0].token_type {
            TokenType::STRING(s) => assert_eq!(s, "hello world"),
            other => panic!("expected STRING, got {:?}", other),
        }
    }

    #[test]
    fn test_scanner_06_multiline_string_tracks_lines() {
        let tokens: Vec<Token> = Scanner::new(b"\"one\ntwo\"\n+")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].line, 2);
        assert!(tokens[1].token_type.same_kind(&TokenType::PLUS));
        assert_eq!(tokens[1].line, 3);
        assert!(tokens[2].token_type.same_kind(&TokenType::EOF));
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn test_scanner_07_unterminated_string() {
        let results: Vec<_> = Scanner::new(b"\"open").collect();

        assert_eq!(results.len(), 2);
        assert!(results[0]
            .as_ref()
            .is_err_and(|e| e.to_string().contains("Unterminated string.")));
        assert!(results[1]
            .as_ref()
            .is_ok_and(|t| t.token_type.same_kind(&TokenType::EOF)));
    }

    #[test]
    fn test_scanner_08_line_comment() {
        assert_token_sequence(
            "1 // the rest is ignored ;;;\n2",
            &[
                (TokenType::NUMBER(1.0), "1"),
                (TokenType::NUMBER(2.0), "2"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_09_block_comment() {
        let tokens: Vec<Token> = Scanner::new(b"1 /* spans\ntwo lines */ 2")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].line, 1);
        // The comment's newline still counts.
        assert_eq!(tokens[1].line, 2);
        assert!(tokens[2].token_type.same_kind(&TokenType::EOF));
    }

    #[test]
    fn test_scanner_10_block_comment_does_not_nest() {
        assert_token_sequence(
            "/* outer /* inner */ +",
            &[(TokenType::PLUS, "+"), (TokenType::EOF, "")],
        );
    }

    #[test]
    fn test_scanner_11_unterminated_block_comment_reports_opening_line() {
        let results: Vec<_> = Scanner::new(b"1\n/* never\ncloses").collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());

        match &results[1] {
            Err(e) => {
                let rendered = e.to_string();
                assert!(rendered.contains("Unterminated block comment."));
                assert!(rendered.contains("[line 2]"));
            }
            Ok(t) => panic!("expected error, got {:?}", t),
        }

        assert!(results[2]
            .as_ref()
            .is_ok_and(|t| t.token_type.same_kind(&TokenType::EOF)));
    }

    #[test]
    fn test_scanner_12_unexpected_chars_interleave_with_tokens() {
        let source = ",.$(#";
        let results: Vec<_> = Scanner::new(source.as_bytes()).collect();

        // 0: COMMA  1: DOT  2: error '$'  3: LEFT_PAREN  4: error '#'  5: EOF
        assert_eq!(results.len(), 6, "Expected 6 items in result");

        assert_token_matches(&results[0], TokenType::COMMA, ",");
        assert_token_matches(&results[1], TokenType::DOT, ".");
        assert_token_matches(&results[3], TokenType::LEFT_PAREN, "(");
        assert_token_matches(&results[5], TokenType::EOF, "");

        let error_count = results.iter().filter(|r| r.is_err()).count();
        assert_eq!(error_count, 2, "Expected 2 error messages");

        for err in results.iter().filter_map(|r| r.as_ref().err()) {
            assert!(
                err.to_string().contains("Unexpected character"),
                "Error message should contain 'Unexpected character', got: {}",
                err
            );
        }

        fn assert_token_matches(
            result: &Result<Token, lox::error::LoxError>,
            expected_type: TokenType,
            expected_lexeme: &str,
        ) {
            match result {
                Ok(token) => {
                    assert!(
                        token.token_type.same_kind(&expected_type),
                        "expected {:?}, got {:?}",
                        expected_type,
                        token.token_type
                    );
                    assert_eq!(token.lexeme, expected_lexeme);
                }
                Err(e) => panic!("Expected token but got error: {}", e),
            }
        }
    }

    #[test]
    fn test_scanner_13_eof_on_final_line() {
        let tokens: Vec<Token> = Scanner::new(b"a\nb\n").filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), 3);
        assert!(tokens[2].token_type.same_kind(&TokenType::EOF));
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn test_scanner_14_same_kind_ignores_literal_payloads() {
        // Kind-only on purpose: the parser probes with dummy payloads.
        assert!(TokenType::NUMBER(1.0).same_kind(&TokenType::NUMBER(999.0)));
        assert!(TokenType::STRING("a".into()).same_kind(&TokenType::STRING("b".into())));

        assert!(!TokenType::NUMBER(1.0).same_kind(&TokenType::STRING("1".into())));
        assert!(!TokenType::IDENTIFIER.same_kind(&TokenType::EOF));
    }
}
