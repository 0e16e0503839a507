use crate::expr::{Expr, LiteralValue};
use crate::token::Token;

/// Renders an expression tree as a parenthesized prefix string.  The
/// parser tests use this as their shape oracle: operator nesting in the
/// output mirrors the nesting of the tree, so precedence and
/// associativity mistakes show up as textual differences.
///
/// Rendering appends into one output buffer rather than allocating a
/// string per node.
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    pub fn print(expr: &Expr) -> String {
        let mut printer = AstPrinter { out: String::new() };

        printer.render(expr);

        printer.out
    }

    fn render(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(literal) => self.literal(literal),

            Expr::Grouping(inner) => self.node("group", &[inner.as_ref()]),

            Expr::Unary { operator, right } => self.node(&operator.lexeme, &[right.as_ref()]),

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => self.node(&operator.lexeme, &[left.as_ref(), right.as_ref()]),

            Expr::Variable { name, .. } => self.out.push_str(&name.lexeme),

            Expr::Assign { name, value, .. } => {
                self.open("=");
                self.named_child(name, value);
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                self.open("call");

                self.out.push(' ');
                self.render(callee);

                for arg in arguments {
                    self.out.push(' ');
                    self.render(arg);
                }

                self.out.push(')');
            }

            Expr::Get { object, name } => {
                self.open(".");

                self.out.push(' ');
                self.render(object);

                self.out.push(' ');
                self.out.push_str(&name.lexeme);
                self.out.push(')');
            }

            Expr::Set {
                object,
                name,
                value,
            } => {
                self.open(".=");

                self.out.push(' ');
                self.render(object);

                self.named_child(name, value);
            }

            Expr::This { .. } => self.out.push_str("this"),

            Expr::Super { method, .. } => {
                self.open("super");
                self.out.push(' ');
                self.out.push_str(&method.lexeme);
                self.out.push(')');
            }
        }
    }

    fn literal(&mut self, literal: &LiteralValue) {
        match literal {
            LiteralValue::True => self.out.push_str("true"),

            LiteralValue::False => self.out.push_str("false"),

            LiteralValue::Nil => self.out.push_str("nil"),

            LiteralValue::Str(text) => self.out.push_str(text),

            // Numbers keep an explicit fraction so 3 and 3.0 read as the
            // same literal they were scanned from.
            LiteralValue::Number(n) => {
                if n.fract() == 0.0 {
                    self.out.push_str(&format!("{:.1}", n));
                } else {
                    self.out.push_str(&n.to_string());
                }
            }
        }
    }

    fn open(&mut self, head: &str) {
        self.out.push('(');
        self.out.push_str(head);
    }

    /// Finish a node of the form `… name child)`.
    fn named_child(&mut self, name: &Token, child: &Expr) {
        self.out.push(' ');
        self.out.push_str(&name.lexeme);

        self.out.push(' ');
        self.render(child);

        self.out.push(')');
    }

    /// Emit `(head child…)` for fixed-arity operator nodes.
    fn node(&mut self, head: &str, children: &[&Expr]) {
        self.open(head);

        for child in children {
            self.out.push(' ');
            self.render(child);
        }

        self.out.push(')');
    }
}
