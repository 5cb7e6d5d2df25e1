use cjscan_lexer::CjsLexer;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Transpiler output of a small library module with a mix of export idioms
const TRANSPILED_SOURCE: &str = r#"
"use strict";
var __createBinding = (this && this.__createBinding) || (Object.create ? (function(o, m, k, k2) {
    if (k2 === undefined) k2 = k;
    Object.defineProperty(o, k2, { enumerable: true, get: function() { return m[k]; } });
}) : (function(o, m, k, k2) {
    if (k2 === undefined) k2 = k;
    o[k2] = m[k];
}));
var __exportStar = (this && this.__exportStar) || function(m, exports) {
    for (var p in m) if (p !== "default" && !Object.prototype.hasOwnProperty.call(exports, p)) __createBinding(exports, m, p);
};
Object.defineProperty(exports, "__esModule", { value: true });
exports.formatDate = exports.parseDate = exports.VERSION = void 0;
__exportStar(require("./types"), exports);
var _utils = require("./utils");
Object.keys(_utils).forEach(function (key) {
  if (key === "default" || key === "__esModule") return;
  if (key in exports && exports[key] === _utils[key]) return;
  Object.defineProperty(exports, key, {
    enumerable: true,
    get: function () {
      return _utils[key];
    }
  });
});
var _time = require("./time");
exports.VERSION = '1.4.2';
const DATE_RE = /^(\d{4})-(\d{2})-(\d{2})(?:T[\d:.]+Z?)?$/;

function parseDate(input) {
    const match = DATE_RE.exec(input);
    if (!match) {
        throw new Error(`Invalid date: ${input}`);
    }
    const [, year, month, day] = match.map(Number);
    return new Date(Date.UTC(year, month - 1, day));
}
exports.parseDate = parseDate;

function formatDate(date, options = {}) {
    const pad = (n) => String(n).padStart(2, '0');
    const sep = options.separator || '-';
    // Months are zero-based.
    return `${date.getUTCFullYear()}${sep}${pad(date.getUTCMonth() + 1)}${sep}${pad(date.getUTCDate())}`;
}
exports.formatDate = formatDate;
Object.defineProperty(exports, "elapsed", { enumerable: true, get: function () { return _time.elapsed; } });
"#;

fn bench_scan_transpiled(c: &mut Criterion) {
    c.bench_function("scan_transpiled_module", |b| {
        let mut lexer = CjsLexer::new();
        b.iter(|| {
            let result = lexer.parse(black_box(TRANSPILED_SOURCE), "bench.js");
            let _ = black_box(result);
        });
    });
}

fn bench_scan_large(c: &mut Criterion) {
    let source = TRANSPILED_SOURCE.repeat(200);
    c.bench_function("scan_large_module", |b| {
        b.iter(|| {
            let result = cjscan_lexer::parse(black_box(&source));
            let _ = black_box(result);
        });
    });
}

criterion_group!(benches, bench_scan_transpiled, bench_scan_large);
criterion_main!(benches);
