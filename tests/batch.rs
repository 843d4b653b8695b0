use std::{fs, io::Write, path::Path};

use tempfile::NamedTempFile;
use walkdir::WalkDir;
use wffcheck::{
    Verdict,
    batch::{evaluate_batch, load_batch, parse_batch},
    error::InputError,
    validate_file,
};

/// Renders a batch the way the command line does.
fn render(path: &Path) -> String {
    match validate_file(path) {
        Ok(verdicts) => verdicts.iter().map(|v| format!("{v}\n")).collect(),
        Err(e) => format!("Erro ao ler arquivo: {e}\n"),
    }
}

fn batch_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes()).expect("failed to write temp file");
    file
}

#[test]
fn fixtures_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        assert_eq!(render(path), expected, "Fixture {path:?} produced unexpected output");
    }

    assert!(count > 0, "No fixtures found in tests/fixtures");
}

#[test]
fn header_counts_formulas() {
    assert_eq!(parse_batch("3\n(\\neg 0)\n(\\wedge 0 1a)\n0 1\n").unwrap(),
               vec![r"(\neg 0)", r"(\wedge 0 1a)", "0 1"]);
    assert_eq!(parse_batch("0\n").unwrap(), Vec::<&str>::new());
    assert_eq!(parse_batch(" +1 \r\ntrue\r\n").unwrap(), vec!["true"]);
}

#[test]
fn empty_file_is_an_error() {
    assert!(matches!(parse_batch(""), Err(InputError::EmptyFile)));
}

#[test]
fn header_must_be_an_integer() {
    for contents in ["\n", "abc\ntrue\n", "1.0\ntrue\n", "true\n"] {
        assert!(matches!(parse_batch(contents), Err(InputError::InvalidHeader { .. })),
                "{contents:?} was accepted");
    }
}

#[test]
fn header_must_match_line_count() {
    assert!(matches!(parse_batch("2\ntrue\n"),
                     Err(InputError::CountMismatch { declared: 2, found: 1 })));
    assert!(matches!(parse_batch("1\ntrue\nfalse"),
                     Err(InputError::CountMismatch { declared: 1, found: 2 })));
    assert!(matches!(parse_batch("-1\n"),
                     Err(InputError::CountMismatch { declared: -1, found: 0 })));
}

#[test]
fn blank_formula_lines_are_counted() {
    assert_eq!(parse_batch("2\n\n0\n").unwrap(), vec!["", "0"]);
}

#[test]
fn mismatch_message_names_both_counts() {
    let err = parse_batch("2\ntrue\n").unwrap_err();
    assert_eq!(err.to_string(),
               "Número de expressões (1) não corresponde ao indicado (2).");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let result = load_batch(dir.path().join("missing.txt"));

    assert!(matches!(result, Err(InputError::Io(_))));
}

#[test]
fn file_errors_produce_no_verdicts() {
    let file = batch_file("2\ntrue\n");

    assert!(validate_file(file.path()).is_err());
}

#[test]
fn verdicts_follow_input_order() {
    let file = batch_file("4\n0\n(\\neg p)\n(\\vee 0 1)\n0 1\n");
    let verdicts = validate_file(file.path()).unwrap();

    assert_eq!(verdicts,
               vec![Verdict::Valid, Verdict::Invalid, Verdict::Valid, Verdict::Invalid]);
}

#[test]
fn evaluate_batch_handles_owned_and_borrowed_lines() {
    let owned = vec!["true".to_string(), "()".to_string()];
    let borrowed = ["true", "()"];

    assert_eq!(evaluate_batch(&owned), evaluate_batch(&borrowed));
    assert_eq!(evaluate_batch(&borrowed), vec![Verdict::Valid, Verdict::Invalid]);
}
