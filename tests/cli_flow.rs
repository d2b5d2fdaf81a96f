mod common;

use common::{SAMPLE_INI, TestContext};
use predicates::prelude::*;

#[test]
fn inspect_prints_declarations_as_json() {
    let ctx = TestContext::new();
    ctx.write_config("app.ini", SAMPLE_INI);

    ctx.cli()
        .args(["inspect", "app.ini"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""section": "ARGPARSE""#))
        .stdout(predicate::str::contains(r#""kind": "positional""#))
        .stdout(predicate::str::contains(r#""name": "input""#))
        .stdout(predicate::str::contains(r#""action": "store_true""#));
}

#[test]
fn inspect_supports_yaml_output() {
    let ctx = TestContext::new();
    ctx.write_config("app.ini", SAMPLE_INI);

    ctx.cli()
        .args(["inspect", "app.ini", "--output", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("section: ARGPARSE"))
        .stdout(predicate::str::contains("key: verbose"));
}

#[test]
fn parse_prints_typed_values() {
    let ctx = TestContext::new();
    ctx.write_config("app.ini", SAMPLE_INI);

    ctx.cli()
        .args(["parse", "app.ini", "--", "data.csv", "--verbose", "--sizes", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""input": "data.csv""#))
        .stdout(predicate::str::contains(r#""verbose": true"#))
        .stdout(predicate::str::contains(r#""ratio": 0.5"#));
}

#[test]
fn parse_reports_clap_errors() {
    let ctx = TestContext::new();
    ctx.write_config("app.ini", SAMPLE_INI);

    ctx.cli()
        .args(["parse", "app.ini", "--", "data.csv", "--sizes", "many"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid integer"));
}

#[test]
fn parse_help_request_exits_cleanly() {
    let ctx = TestContext::new();
    ctx.write_config("app.ini", SAMPLE_INI);

    ctx.cli()
        .args(["parse", "app.ini", "--prog", "app", "--", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: app"));
}

#[test]
fn usage_renders_declared_help() {
    let ctx = TestContext::new();
    ctx.write_config("app.ini", SAMPLE_INI);

    ctx.cli()
        .args(["usage", "app.ini", "--prog", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: app"))
        .stdout(predicate::str::contains("input file"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn missing_section_warns_on_stderr() {
    let ctx = TestContext::new();
    ctx.write_config("plain.ini", "[general]\nname = demo\n");

    ctx.cli()
        .args(["inspect", "plain.ini"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found in config"))
        .stdout(predicate::str::contains(r#""arguments": []"#));
}

#[test]
fn quiet_hides_warnings() {
    let ctx = TestContext::new();
    ctx.write_config("plain.ini", "[general]\nname = demo\n");

    ctx.cli()
        .args(["-q", "inspect", "plain.ini"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn custom_section_and_separator_flags() {
    let ctx = TestContext::new();
    ctx.write_config("custom.ini", "[CLI]\n@name=help=who|metavar=NAME\n");

    ctx.cli()
        .args(["inspect", "custom.ini", "--section", "CLI", "--marker", "@", "--separator", "|"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""metavar": "NAME""#));
}

#[test]
fn toml_files_are_detected() {
    let ctx = TestContext::new();
    ctx.write_config("app.toml", "[ARGPARSE]\ncount = 'type=int\\default=3'\n");

    ctx.cli()
        .args(["parse", "app.toml", "--"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""count": 3"#));
}

#[test]
fn malformed_declaration_fails() {
    let ctx = TestContext::new();
    ctx.write_config("bad.ini", "[ARGPARSE]\nname=help=ok\\oops\n");

    ctx.cli()
        .args(["inspect", "bad.ini"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no '=' found in 'oops'"));
}

#[test]
fn unknown_type_fails() {
    let ctx = TestContext::new();
    ctx.write_config("types.ini", "[ARGPARSE]\nwhen=type=datetime\n");

    ctx.cli()
        .args(["inspect", "types.ini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("type=datetime is not implemented"));
}

#[test]
fn usage_with_variadic_positionals_fails_cleanly() {
    let ctx = TestContext::new();
    ctx.write_config("files.ini", "[ARGPARSE]\n__a=nargs=+\n__b=nargs=+\n");

    ctx.cli()
        .args(["usage", "files.ini"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("positional 'a' already takes several values"));
}
