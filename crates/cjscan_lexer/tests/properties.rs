//! Property tests over generated sources.

use cjscan_lexer::{parse, CjsLexer};
use proptest::prelude::*;

/// Fragments of CommonJS-looking code. None of them contains an `x`, so no
/// combination can spell `exports` or `__export`.
const FRAGMENTS: &[&str] = &[
    "module",
    ".",
    "=",
    "==",
    " ",
    "\n",
    "(",
    ")",
    "{",
    "}",
    "[",
    "]",
    ";",
    ",",
    "'a'",
    "\"./b\"",
    "'",
    "`",
    "${",
    "/",
    "/* c */",
    "// c\n",
    "require('./c')",
    "require",
    "var _d = ",
    "Object.keys(_d).forEach(function (k) {",
    "if (k === 'default' || k === '__esModule') return;",
    "Object.defineProperty(",
    "{ value: 1 }",
    "get: function () { return a.b; }",
    "_interopRequireWildcard(",
    "import",
    "class A ",
    "return",
    "...",
    "a",
    "1",
];

fn fragment_source() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn scanning_is_deterministic(source in fragment_source()) {
        let first = parse(&source);
        let second = parse(&source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reused_lexer_matches_fresh_lexer(a in fragment_source(), b in fragment_source()) {
        let mut lexer = CjsLexer::new();
        let _ = lexer.parse(&a, "a.js");
        prop_assert_eq!(lexer.parse(&b, "b.js"), cjscan_lexer::parse_with_name(&b, "b.js"));
    }

    #[test]
    fn no_exports_without_exports_object(source in fragment_source()) {
        if let Ok(result) = parse(&source) {
            prop_assert!(result.is_empty(), "{:?} gave {:?}", source, result);
        }
    }

    #[test]
    fn arbitrary_text_without_x_has_no_exports(source in "[^xX]{0,200}") {
        if let Ok(result) = parse(&source) {
            prop_assert!(result.is_empty(), "{:?} gave {:?}", source, result);
        }
    }
}
