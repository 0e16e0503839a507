#[cfg(test)]
mod parser_tests {
    use rlox as lox;

    use lox::ast_printer::AstPrinter;
    use lox::error::LoxError;
    use lox::expr::{Expr, LiteralValue};
    use lox::parser::Parser;
    use lox::scanner::Scanner;
    use lox::stmt::Stmt;
    use lox::token::Token;

    fn parse_program(source: &str) -> (Vec<Stmt>, Vec<LoxError>) {
        let tokens: Vec<Token> = Scanner::new(source.as_bytes())
            .filter_map(Result::ok)
            .collect();

        Parser::new(tokens).parse()
    }

    /// Parse a single expression statement and render it in prefix form.
    fn expr_form(source: &str) -> String {
        let (statements, errors) = parse_program(source);

        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);

        match statements.as_slice() {
            [Stmt::Expression(expr)] => AstPrinter::print(expr),
            other => panic!("expected a single expression statement, got {:?}", other),
        }
    }

    #[test]
    fn factor_binds_tighter_than_term() {
        assert_eq!(expr_form("1 + 2 * 3;"), "(+ 1.0 (* 2.0 3.0))");
    }

    #[test]
    fn term_is_left_associative() {
        assert_eq!(expr_form("1 - 2 - 3;"), "(- (- 1.0 2.0) 3.0)");
    }

    #[test]
    fn unary_nests() {
        assert_eq!(expr_form("!!true;"), "(! (! true))");
        assert_eq!(expr_form("--1;"), "(- (- 1.0))");
    }

    #[test]
    fn grouping_overrides_precedence() {
        assert_eq!(expr_form("(1 + 2) * 3;"), "(* (group (+ 1.0 2.0)) 3.0)");
    }

    #[test]
    fn comparison_binds_tighter_than_equality() {
        assert_eq!(expr_form("1 < 2 == true;"), "(== (< 1.0 2.0) true)");
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(expr_form("a or b and c;"), "(or a (and b c))");
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(expr_form("a = b = c;"), "(= a (= b c))");
    }

    #[test]
    fn call_and_property_chains_are_left_to_right() {
        assert_eq!(expr_form("a.b(1).c;"), "(. (call (. a b) 1.0) c)");
    }

    #[test]
    fn property_assignment_becomes_set() {
        assert_eq!(expr_form("a.b = 2;"), "(.= a b 2.0)");
    }

    #[test]
    fn super_access_parses() {
        assert_eq!(expr_form("super.m();"), "(call (super m))");
    }

    #[test]
    fn dangling_else_binds_to_nearest_if() {
        let (statements, errors) = parse_program("if (a) if (b) c(); else d();");

        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        assert_eq!(statements.len(), 1);

        match &statements[0] {
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                assert!(else_branch.is_none(), "else bound to the outer if");

                match then_branch.as_ref() {
                    Stmt::If { else_branch, .. } => {
                        assert!(else_branch.is_some(), "inner if lost its else");
                    }
                    other => panic!("expected nested if, got {:?}", other),
                }
            }
            other => panic!("expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn for_desugars_to_init_block_and_while() {
        let (statements, errors) =
            parse_program("for (var i = 0; i < 3; i = i + 1) print i;");

        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        assert_eq!(statements.len(), 1);

        let Stmt::Block(outer) = &statements[0] else {
            panic!("expected outer block, got {:?}", statements[0]);
        };

        assert_eq!(outer.len(), 2);
        assert!(matches!(outer[0], Stmt::Var { .. }));

        let Stmt::While { body, .. } = &outer[1] else {
            panic!("expected while, got {:?}", outer[1]);
        };

        let Stmt::Block(inner) = body.as_ref() else {
            panic!("expected body block, got {:?}", body);
        };

        assert_eq!(inner.len(), 2);
        assert!(matches!(inner[0], Stmt::Print(_)));
        assert!(matches!(inner[1], Stmt::Expression(Expr::Assign { .. })));
    }

    #[test]
    fn for_without_clauses_loops_on_true() {
        let (statements, errors) = parse_program("for (;;) print 1;");

        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        assert_eq!(statements.len(), 1);

        match &statements[0] {
            Stmt::While { condition, body } => {
                assert!(matches!(condition, Expr::Literal(LiteralValue::True)));
                assert!(matches!(body.as_ref(), Stmt::Print(_)));
            }
            other => panic!("expected bare while, got {:?}", other),
        }
    }

    #[test]
    fn invalid_assignment_target_is_reported_not_fatal() {
        let (statements, errors) = parse_program("1 = 2;");

        assert_eq!(statements.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("Invalid assignment target."));
    }

    #[test]
    fn synchronize_collects_multiple_errors() {
        let (statements, errors) = parse_program("var; print 1; +; print 2;");

        assert_eq!(errors.len(), 2, "errors: {:?}", errors);
        assert_eq!(statements.len(), 2);
        assert!(matches!(statements[0], Stmt::Print(_)));
        assert!(matches!(statements[1], Stmt::Print(_)));
    }

    #[test]
    fn error_at_eof_points_at_end() {
        let (_, errors) = parse_program("(1 + 2");

        assert_eq!(errors.len(), 1);

        let rendered = errors[0].to_string();
        assert!(rendered.contains(" at end"), "got: {}", rendered);
        assert!(rendered.contains("Expect ')' after expression."));
    }

    #[test]
    fn more_than_255_arguments_is_reported() {
        let args = vec!["0"; 256].join(", ");
        let source = format!("f({});", args);

        let (statements, errors) = parse_program(&source);

        assert_eq!(statements.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0]
            .to_string()
            .contains("Can't have more than 255 arguments."));
    }

    #[test]
    fn more_than_255_parameters_is_reported() {
        let params: Vec<String> = (0..256).map(|i| format!("p{}", i)).collect();
        let source = format!("fun f({}) {{}}", params.join(", "));

        let (statements, errors) = parse_program(&source);

        assert_eq!(statements.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0]
            .to_string()
            .contains("Can't have more than 255 parameters."));
    }

    #[test]
    fn class_declaration_parses_methods_and_superclass() {
        let (statements, errors) =
            parse_program("class B < A { init(x) { this.x = x; } m() { return 1; } }");

        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        assert_eq!(statements.len(), 1);

        match &statements[0] {
            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                assert_eq!(name.lexeme, "B");
                assert!(matches!(superclass, Some(Expr::Variable { .. })));
                assert_eq!(methods.len(), 2);
            }
            other => panic!("expected class declaration, got {:?}", other),
        }
    }
}
