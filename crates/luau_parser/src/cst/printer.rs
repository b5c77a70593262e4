use super::nodes::Cst;
use super::visitor::{Visit, VisitWith};
use luau_syntax::Token;

/// A non-semantic printer that writes every token's trivia followed by its
/// text, in source order. Because trivia is attached to the token that
/// follows it and EOF owns the trailing trivia, the output is byte-identical
/// to the original source. The output buffer lives on the visitor value; no
/// shared state is involved.
struct Printer {
    out: String,
}

impl Visit for Printer {
    fn visit_token(&mut self, token: &Token) {
        for trivia in token.trivia() {
            self.out.push_str(trivia.text());
        }
        self.out.push_str(token.text());
    }
}

/// Render a parsed tree back to its exact source text.
pub fn print(cst: &Cst) -> String {
    let mut printer = Printer {
        out: String::with_capacity(cst.eof.span().end as usize),
    };
    cst.visit_with(&mut printer);
    printer.out
}
