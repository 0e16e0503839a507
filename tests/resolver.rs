#[cfg(test)]
mod resolver_tests {
    use rlox as lox;

    use lox::interpreter::Interpreter;
    use lox::parser::Parser;
    use lox::resolver::Resolver;
    use lox::scanner::Scanner;
    use lox::token::Token;

    /// Parse and resolve, returning the rendered resolve diagnostics.
    fn resolve_source(source: &str) -> Vec<String> {
        let tokens: Vec<Token> = Scanner::new(source.as_bytes())
            .filter_map(Result::ok)
            .collect();

        let (statements, errors) = Parser::new(tokens).parse();
        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);

        let mut sink: Vec<u8> = Vec::new();
        let mut interpreter = Interpreter::new(&mut sink);

        Resolver::new(&mut interpreter)
            .resolve(&statements)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn clean_program_has_no_errors() {
        let errors = resolve_source(
            r#"
            var a = 1;
            fun f(x) {
                var b = x + a;
                return b;
            }
            class C {
                init() { this.n = 0; }
                bump() { this.n = this.n + 1; }
            }
            print f(2);
            "#,
        );

        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn local_redeclaration_is_an_error() {
        let errors = resolve_source("{ var a = 1; var a = 2; }");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Already a variable with this name in this scope."));
    }

    #[test]
    fn global_redeclaration_is_permitted() {
        let errors = resolve_source("var a = 1; var a = 2;");

        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn reading_local_in_its_own_initializer() {
        let errors = resolve_source("var a = 1; { var a = a; }");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't read local variable in its own initializer."));
    }

    #[test]
    fn top_level_return_is_rejected() {
        let errors = resolve_source("return 1;");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't return from top-level code."));
    }

    #[test]
    fn returning_a_value_from_init_is_rejected() {
        let errors = resolve_source("class A { init() { return 1; } }");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't return a value from an initializer."));
    }

    #[test]
    fn bare_return_in_init_is_allowed() {
        let errors = resolve_source("class A { init() { return; } }");

        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn this_outside_a_class_is_rejected() {
        let errors = resolve_source("print this;");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't use 'this' outside of a class."));
    }

    #[test]
    fn this_inside_a_function_outside_a_class_is_rejected() {
        let errors = resolve_source("fun f() { return this; }");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't use 'this' outside of a class."));
    }

    #[test]
    fn super_outside_a_class_is_rejected() {
        let errors = resolve_source("print super.m;");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't use 'super' outside of a class."));
    }

    #[test]
    fn super_without_a_superclass_is_rejected() {
        let errors = resolve_source("class A { m() { super.m(); } }");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Can't use 'super' in a class with no superclass."));
    }

    #[test]
    fn super_with_a_superclass_is_allowed() {
        let errors = resolve_source("class A {} class B < A { m() { super.m(); } }");

        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn class_cannot_inherit_from_itself() {
        let errors = resolve_source("class A < A {}");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("A class can't inherit from itself."));
    }

    #[test]
    fn resolution_continues_past_errors() {
        let errors = resolve_source("return 1; print this;");

        assert_eq!(errors.len(), 2, "errors: {:?}", errors);
    }

    #[test]
    fn duplicate_parameters_are_rejected() {
        let errors = resolve_source("fun f(a, a) {}");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Already a variable with this name in this scope."));
    }
}
