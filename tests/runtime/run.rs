//! Integration tests for running the lesson

use primer_runtime::{RunConfig, Script, run};

fn output(config: &RunConfig) -> String {
    let mut out: Vec<u8> = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn lesson_prints_expected_lines() {
    let text = output(&RunConfig::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Hello world!", "4", "e", "hey", "h", "3"]);
}

#[test]
fn lesson_script_runs_standalone() {
    let mut out: Vec<u8> = Vec::new();
    Script::lesson().run(&mut out).unwrap();
    assert_eq!(out, b"Hello world!\n4\ne\nhey\nh\n3\n");
}

#[test]
fn cli_args_drive_extras() {
    let config = RunConfig::from_args(["--bindings", "--range", "2", "4"]).unwrap();
    let text = output(&config);

    assert!(text.starts_with("Hello world!\n"));
    assert!(text.contains("greeting: string = \"Hello world!\""));
    assert!(text.contains("evenSquares: vec<int> = [4, 16]"));
    assert!(text.ends_with("2\n3\n4\n"));
}

#[test]
fn empty_range_adds_nothing() {
    let config = RunConfig::from_args(["--range", "5", "1"]).unwrap();
    assert_eq!(output(&config), "Hello world!\n4\ne\nhey\nh\n3\n");
}
