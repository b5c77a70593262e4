use luau_parser::{parse, print, Cst, ParseError};

#[allow(unused)]
pub fn parse_ok(source: &str) -> Cst {
    parse(source).unwrap_or_else(|err| {
        panic!(
            "failed to parse {source:?}: {} at {}",
            err.message, err.span
        )
    })
}

#[allow(unused)]
pub fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(_) => panic!("expected {source:?} to fail to parse"),
        Err(err) => err,
    }
}

/// Assert the round-trip invariant: re-emitting a parsed tree reproduces the
/// source byte-for-byte.
#[allow(unused)]
pub fn assert_round_trip(source: &str) {
    let cst = parse_ok(source);
    assert_eq!(print(&cst), source, "round trip failed for {source:?}");
}
