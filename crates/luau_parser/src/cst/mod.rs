mod nodes;
mod printer;
mod span;
mod visitor;

pub use nodes::*;
pub use printer::print;
pub use span::Spanned;
pub use visitor::{Visit, VisitWith};
