//! Whole-module scans through the public API.

use pretty_assertions::assert_eq;
use varcheck_lexer::{tokenize, Expected, Found, LexError, Lexer, Location, TokenTag};

const FIB: &str = "define i32 @fib(i32 %0) #0 {
  %2 = alloca i32, align 4
  store i32 %0, i32* %2, align 4
  %3 = load i32, i32* %2, align 4
  %4 = icmp slt i32 %3, 2
  br i1 %4, label %5, label %6
}

attributes #0 = { noinline nounwind }
";

const FIB_TABS: &str = "define i32 @fib(i32 %0) #0 {
\t%2 = alloca i32,\talign 4
\t \tstore i32 %0, i32* %2, align 4
\tret i32 %0
}
";

/// Rebuild the source from tokens. Each gap before a token is refilled
/// with the separator characters found there, which must be spaces or tabs.
fn reassemble(source: &str) -> String {
    let lines: Vec<Vec<char>> = source.split('\n').map(|l| l.chars().collect()).collect();
    let mut out = String::new();
    let mut column = 0;
    for tok in tokenize(source).unwrap() {
        let line = &lines[tok.location.line - 1];
        while column < tok.location.column {
            let sep = line[column];
            assert!(sep == ' ' || sep == '\t', "{sep:?} skipped before {tok}");
            out.push(sep);
            column += 1;
        }
        if tok.is_end() {
            break;
        }
        out.push_str(&tok.text);
        if tok.tag == TokenTag::NewLine {
            column = 0;
        } else {
            column += tok.text.chars().count();
        }
    }
    out
}

#[test]
fn test_fib_round_trips() {
    assert_eq!(reassemble(FIB), FIB);
}

#[test]
fn test_tab_separated_module_round_trips() {
    assert_eq!(reassemble(FIB_TABS), FIB_TABS);
}

#[test]
fn test_trailing_separators_round_trip() {
    let source = "ret void \t\n\t ";
    assert_eq!(reassemble(source), source);
}

#[test]
fn test_fib_ends_with_single_sentinel() {
    let toks = tokenize(FIB).unwrap();
    let ends = toks.iter().filter(|t| t.is_end()).count();
    assert_eq!(ends, 1);
    assert!(toks.last().unwrap().is_end());
    assert_eq!(toks.last().unwrap().location, Location::new(10, 0));
}

#[test]
fn test_fib_locations_point_at_first_character() {
    let lines: Vec<&str> = FIB.split('\n').collect();
    for tok in tokenize(FIB).unwrap() {
        if tok.is_end() {
            continue;
        }
        let line = lines[tok.location.line - 1];
        let rest: String = line.chars().skip(tok.location.column).collect();
        if tok.tag == TokenTag::NewLine {
            assert_eq!(rest, "", "newline at {}", tok.location);
        } else {
            assert!(
                rest.starts_with(&tok.text),
                "{tok} does not start at its location"
            );
        }
    }
}

#[test]
fn test_fib_operands() {
    let operands: Vec<String> = tokenize(FIB)
        .unwrap()
        .into_iter()
        .filter(|t| t.tag == TokenTag::LocalId)
        .map(|t| t.text_without_sigil().to_string())
        .collect();
    assert_eq!(
        operands,
        vec!["0", "2", "0", "2", "3", "2", "4", "3", "4", "5", "6"]
    );
}

#[test]
fn test_pull_loop_until_sentinel() {
    let mut lexer = Lexer::new("ret void\n");
    let mut seen = Vec::new();
    loop {
        let tok = lexer.next_token().unwrap();
        if tok.is_end() {
            break;
        }
        seen.push(tok.tag);
    }
    assert_eq!(
        seen,
        vec![TokenTag::Reserved, TokenTag::Reserved, TokenTag::NewLine]
    );
}

#[test]
fn test_error_aborts_module_scan() {
    let source = "define void @f() {\n  %x = add i32 1, -1\n}\n";
    assert_eq!(
        tokenize(source).unwrap_err(),
        LexError {
            location: Location::new(2, 18),
            expected: Expected::TokenStart,
            found: Found::Char('-'),
        }
    );
}
