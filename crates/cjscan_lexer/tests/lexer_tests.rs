//! Lexer integration tests.
//!
//! Verifies export detection for each recognized idiom, the lexical
//! structure the scanner must see through, and every fatal error.

use cjscan_lexer::{parse, parse_with_name, ErrorKind, LexError, ModuleExports, ESM_SYNTAX_ERROR_CODE};

/// Helper: scan a source that is expected to succeed.
fn scan(source: &str) -> ModuleExports {
    match parse(source) {
        Ok(result) => result,
        Err(err) => panic!("unexpected error for {:?}: {}", source, err),
    }
}

/// Helper: check both result lists.
fn assert_detects(source: &str, exports: &[&str], reexports: &[&str]) {
    let result = scan(source);
    assert_eq!(result.exports, exports, "exports of {:?}", source);
    assert_eq!(result.reexports, reexports, "reexports of {:?}", source);
}

/// Helper: scan a source that is expected to fail.
fn scan_err(source: &str) -> LexError {
    match parse(source) {
        Ok(result) => panic!("expected an error for {:?}, got {:?}", source, result),
        Err(err) => err,
    }
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_empty_source() {
    assert!(scan("").is_empty());
    assert!(scan("   \n\t  ").is_empty());
}

#[test]
fn test_shebang_only() {
    assert!(scan("#!/usr/bin/env node").is_empty());
    assert!(scan("#!/usr/bin/env node\n").is_empty());
    assert_detects("#!/usr/bin/env node\nexports.a = 1;", &["a"], &[]);
}

#[test]
fn test_no_exports_referenced() {
    assert!(scan("var a = 1; function f(b) { return a + b; }").is_empty());
    assert!(scan("console.log(require('fs'));").is_empty());
}

// ============================================================================
// exports.NAME / exports['NAME']
// ============================================================================

#[test]
fn test_simple_named_exports() {
    assert_detects("exports.foo = 1; exports.bar = function(){};", &["foo", "bar"], &[]);
}

#[test]
fn test_duplicate_assignment_is_reported_once() {
    assert_detects("exports.a = 1; exports.a = 2;", &["a"], &[]);
}

#[test]
fn test_module_exports_dot_name() {
    assert_detects("module.exports.a = 1;\nmodule . exports . b = 2;", &["a", "b"], &[]);
}

#[test]
fn test_bracket_string_exports() {
    assert_detects("exports['a'] = 1; exports[\"b\"] = 2;", &["a", "b"], &[]);
    assert_detects("exports['not an identifier'] = 1;", &["not an identifier"], &[]);
}

#[test]
fn test_escaped_string_names_are_decoded() {
    assert_detects(r"exports['\x61'] = 1; exports['\u{62}'] = 2;", &["a", "b"], &[]);
    assert_detects(r"exports['\uD800'] = 1;", &[], &[]);
}

#[test]
fn test_comments_between_tokens() {
    assert_detects("exports /* c */ . /* c */ a /* c */ = 1;", &["a"], &[]);
    assert_detects("exports // c\n.b\n= 1;", &["b"], &[]);
}

#[test]
fn test_comparison_is_not_an_export() {
    assert_detects("if (exports.a == 1) {}", &[], &[]);
    assert_detects("if (exports.a === 1) {}", &[], &[]);
    assert_detects("if (exports['b'] == 1) {}", &[], &[]);
}

#[test]
fn test_unicode_identifier_names() {
    assert_detects("exports.caf\u{e9} = 1; exports.\u{1D400} = 2;", &["caf\u{e9}", "\u{1D400}"], &[]);
}

#[test]
fn test_escaped_identifier_names_are_skipped() {
    assert_detects(r"exports.\u0061 = 1;", &[], &[]);
}

#[test]
fn test_member_exports_is_not_module_exports() {
    assert_detects("foo.exports.a = 1; myexports.b = 2;", &[], &[]);
}

#[test]
fn test_exports_inside_nested_scopes() {
    assert_detects("(function (exports) { exports.a = 1; })(exports);", &["a"], &[]);
    assert_detects(
        "(function (root, factory) { factory(root.lib = {}); })(this, function (lib) { if (typeof exports === 'object') { exports.b = 2; } });",
        &["b"],
        &[],
    );
}

// ============================================================================
// module.exports = ...
// ============================================================================

#[test]
fn test_wholesale_reexport() {
    assert_detects("module.exports = require('./impl');", &[], &["./impl"]);
    assert_detects("module.exports = require(\"./impl\" /* c */ );", &[], &["./impl"]);
}

#[test]
fn test_reassignment_supersedes_prior_exports() {
    assert_detects("exports.a = 1; module.exports = { b: 2 };", &["b"], &[]);
    assert_detects("module.exports = require('./a'); module.exports = { b };", &["b"], &[]);
}

#[test]
fn test_comparison_is_not_a_reassignment() {
    assert_detects("exports.a = 1; if (module.exports == null) {}", &["a"], &[]);
}

#[test]
fn test_object_literal_exports() {
    assert_detects(
        "module.exports = { a, b: c, 'd': e, ...require('f'), ...g };",
        &["a", "b", "d"],
        &["f"],
    );
}

#[test]
fn test_object_literal_stops_at_complex_values() {
    assert_detects("module.exports = { a, b: c.d, e };", &["a", "b"], &[]);
    assert_detects("module.exports = { a: function () {}, b };", &["a"], &[]);
    assert_detects("module.exports = {};", &[], &[]);
}

#[test]
fn test_object_literal_accessors_and_methods_export_nothing() {
    assert_detects("module.exports = { get a() { return 1; } };", &[], &[]);
    assert_detects("module.exports = { set v(x) {} };", &[], &[]);
    assert_detects("module.exports = { async f() {} };", &[], &[]);
    assert_detects("module.exports = { run() {} };", &[], &[]);
    assert_detects("module.exports = { a, get b() { return 2; } };", &["a"], &[]);
}

#[test]
fn test_empty_reexport_is_dropped() {
    assert_detects("module.exports = require('');", &[], &[]);
}

#[test]
fn test_nested_reassignment() {
    assert_detects("if (process.env.X) module.exports = require('./a');", &[], &["./a"]);
}

// ============================================================================
// Object.defineProperty
// ============================================================================

#[test]
fn test_define_property_value() {
    assert_detects(
        "Object.defineProperty(exports, 'a', { value: 1 });\nObject.defineProperty(module.exports, 'b', { enumerable: true, value: 2 });",
        &["a", "b"],
        &[],
    );
    assert_detects(
        "Object.defineProperty(exports, '__esModule', { value: true });",
        &["__esModule"],
        &[],
    );
}

#[test]
fn test_define_property_safe_getters() {
    assert_detects(
        "Object.defineProperty(exports, 'a', { enumerable: true, get: function () { return m.a; } });",
        &["a"],
        &[],
    );
    assert_detects(
        "Object.defineProperty(exports, 'b', { enumerable: true, get() { return m['b']; } });",
        &["b"],
        &[],
    );
    assert_detects(
        "Object.defineProperty(exports, 'c', { enumerable: true, get: function get() { return _c.default; } });",
        &["c"],
        &[],
    );
    assert_detects(
        "Object.defineProperty(exports, 'd', { get: function () { return d }, });",
        &["d"],
        &[],
    );
}

#[test]
fn test_unsafe_getter_excluded() {
    assert_detects(
        "Object.defineProperty(exports, 'x', { get: function(){ return compute(); } });",
        &[],
        &[],
    );
    assert_detects(
        "Object.defineProperty(exports, 'y', { get: () => y });",
        &[],
        &[],
    );
}

#[test]
fn test_unsafe_getter_overrides_plain_export() {
    assert_detects(
        "exports.a = 1; exports.b = 2; Object.defineProperty(exports, 'a', { get: function () { return compute(); } });",
        &["b"],
        &[],
    );
}

#[test]
fn test_non_enumerable_property_is_excluded() {
    assert_detects(
        "Object.defineProperty(exports, 'hidden', { enumerable: false, value: 1 });",
        &[],
        &[],
    );
}

#[test]
fn test_define_property_on_other_objects() {
    assert_detects("Object.defineProperty(other, 'a', { value: 1 });", &[], &[]);
}

// ============================================================================
// Re-export boilerplate
// ============================================================================

#[test]
fn test_guarded_star_reexport() {
    assert_detects(
        "var _impl = require('./impl'); Object.keys(_impl).forEach(function(k){ if (k === 'default' || k === '__esModule') return; exports[k] = _impl[k]; });",
        &[],
        &["./impl"],
    );
}

#[test]
fn test_babel_interop_star_reexport() {
    let source = r#"
var _x = _interopRequireWildcard(require('./x'));
Object.keys(_x).forEach(function (key) {
  if (key === "default" || key === "__esModule") return;
  if (key in exports && exports[key] === _x[key]) return;
  Object.defineProperty(exports, key, {
    enumerable: true,
    get: function () {
      return _x[key];
    }
  });
});
"#;
    assert_detects(source, &[], &["./x"]);
}

#[test]
fn test_has_own_property_guards() {
    assert_detects(
        "var x = require('./x'); Object.keys(x).forEach(function (k) { if (k !== 'default' && !Object.prototype.hasOwnProperty.call(exports, k)) exports[k] = x[k]; });",
        &[],
        &["./x"],
    );
    assert_detects(
        "let y = require('./y'); Object.keys(y).forEach(function (k) { if (k !== 'default' && !exports.hasOwnProperty(k)) exports[k] = y[k]; });",
        &[],
        &["./y"],
    );
    assert_detects(
        "const z = require('./z'); Object.keys(z).forEach(function (k) { if (k !== 'default') exports[k] = z[k]; });",
        &[],
        &["./z"],
    );
}

#[test]
fn test_star_reexport_requires_declared_binding() {
    assert_detects(
        "x = require('./x'); Object.keys(x).forEach(function (k) { if (k !== 'default') exports[k] = x[k]; });",
        &[],
        &[],
    );
    assert_detects(
        "Object.keys(y).forEach(function (k) { if (k === 'default' || k === '__esModule') return; exports[k] = y[k]; });",
        &[],
        &[],
    );
}

#[test]
fn test_star_reexport_only_at_top_level() {
    assert_detects(
        "(function () { var _z = require('./z'); Object.keys(_z).forEach(function (k) { if (k !== 'default') exports[k] = _z[k]; }); })();",
        &[],
        &[],
    );
}

#[test]
fn test_typescript_export_helpers() {
    assert_detects(
        "__export(require('./a'));\n__exportStar(require('./b'), exports);\ntslib.__exportStar(require('./c'), exports);",
        &[],
        &["./a", "./b", "./c"],
    );
}

#[test]
fn test_helper_without_require_argument() {
    assert_detects("_interopRequireWildcard(x); __exportStar(m, exports);", &[], &[]);
}

// ============================================================================
// Lexical structure
// ============================================================================

#[test]
fn test_exports_in_comments_and_strings_are_ignored() {
    assert_detects("/* exports.a = 1 */ // exports.b = 2\nexports.c = 3;", &["c"], &[]);
    assert_detects("'exports.a = 1'; \"module.exports = require('x')\";", &[], &[]);
}

#[test]
fn test_template_literals() {
    assert_detects(
        "var t = `${exports.a = 1}`; exports.b = `x${`nested ${1}`}`;",
        &["a", "b"],
        &[],
    );
    assert_detects("var t = `exports.c = ${'}'}`;", &[], &[]);
}

#[test]
fn test_division_and_regex() {
    assert_detects("var a = b / c / d; exports.x = 1;", &["x"], &[]);
    assert_detects("var re = /'/; exports.y = 1;", &["y"], &[]);
    assert_detects("if (x) /'/.test(s); exports.z = 1;", &["z"], &[]);
    assert_detects("function f() { return /'/.source; } exports.w = 1;", &["w"], &[]);
    assert_detects("class A { } /'/.test(''); exports.v = 1;", &["v"], &[]);
    assert_detects("var r = /[/'\\]]/g; exports.u = 1;", &["u"], &[]);
}

#[test]
fn test_dynamic_import_is_allowed() {
    assert_detects("import('x').then(function (m) { exports.a = m; });", &["a"], &[]);
    assert_detects("const importer = 1; exports.b = importer;", &["b"], &[]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_disallowed_esm_syntax() {
    for source in [
        "import x from 'y';",
        "import {a} from 'b';",
        "import'x';",
        "import * as ns from 'm';",
    ] {
        let err = scan_err(source);
        assert_eq!(err.kind, ErrorKind::DisallowedImportSyntax, "{}", source);
        assert_eq!(err.code(), Some(ESM_SYNTAX_ERROR_CODE));
    }

    let err = scan_err("import.meta.url");
    assert_eq!(err.kind, ErrorKind::DisallowedImportSyntax);
    assert_eq!(err.message, "Unexpected import.meta in CJS module.");

    for source in ["export default 1;", "export{a}", "export const a = 1;"] {
        let err = scan_err(source);
        assert_eq!(err.kind, ErrorKind::DisallowedExportSyntax, "{}", source);
        assert!(err.is_esm_syntax());
    }
}

#[test]
fn test_esm_keywords_as_identifiers() {
    assert_detects("var exporter = 1; x.export = 2; y.import = 3;", &[], &[]);
    assert_detects("// import x from 'y'\n'export default';", &[], &[]);
}

#[test]
fn test_import_error_offset() {
    let err = scan_err("import x from 'y';");
    assert_eq!(err.offset, 7);
    assert_eq!((err.line, err.column), (1, 8));
}

#[test]
fn test_unterminated_literals() {
    let err = scan_err("var s = 'abc");
    assert_eq!(err.kind, ErrorKind::UnterminatedString);
    assert_eq!(err.message, "Unterminated string.");

    assert_eq!(scan_err("var s = 'a\nb';").kind, ErrorKind::UnterminatedString);
    assert_eq!(scan_err("`abc").kind, ErrorKind::UnterminatedTemplate);
    assert_eq!(scan_err("`${a").kind, ErrorKind::UnterminatedTemplate);
    assert_eq!(scan_err("x = /abc").kind, ErrorKind::UnterminatedRegex);
    assert_eq!(scan_err("x = /[abc/").kind, ErrorKind::UnterminatedRegexClass);
}

#[test]
fn test_trailing_backslash_reports_end_of_input() {
    for source in ["'abc\\", "`ab\\", "x = /ab\\", "x = /[a\\"] {
        let err = scan_err(source);
        assert_eq!(err.offset, source.len(), "{source:?}");
    }
    assert_eq!(scan_err("'abc\\").kind, ErrorKind::UnterminatedString);
    assert_eq!(scan_err("x = /[a\\").kind, ErrorKind::UnterminatedRegexClass);
}

#[test]
fn test_unbalanced_brackets() {
    let err = scan_err(")");
    assert_eq!(err.kind, ErrorKind::UnbalancedBrackets);
    assert_eq!(err.message, "Unexpected closing bracket.");
    assert_eq!(err.offset, 0);

    assert_eq!(scan_err("}").message, "Unexpected closing brace.");
    assert_eq!(scan_err("{").message, "Unterminated braces.");
    assert_eq!(scan_err("f(a, b").kind, ErrorKind::UnbalancedBrackets);
}

#[test]
fn test_error_location_and_name() {
    let err = parse_with_name("exports.a = 1;\n'unterminated", "lib/index.js").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnterminatedString);
    assert_eq!(err.offset, 28);
    assert_eq!((err.line, err.column), (2, 14));
    assert_eq!(err.to_string(), "Unterminated string.\n  at lib/index.js:2:14");
    assert_eq!(err.code(), None);
}

#[test]
fn test_errors_discard_partial_results() {
    let err = scan_err("exports.a = 1; export default 2;");
    assert_eq!(err.kind, ErrorKind::DisallowedExportSyntax);
}

#[test]
fn test_result_serializes_to_json() {
    let result = scan("exports.a = 1; module.exports.b = require('./b');");
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"exports":["a","b"],"reexports":[]}"#);
}
