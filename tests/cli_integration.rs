// CLI integration tests for the parse/check/mutate flows.
use std::io::Write;
use std::path::Path;
use std::process::Command;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_jsontree");
    Command::new(exe)
}

fn write_doc(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create doc");
    file.write_all(body.as_bytes()).expect("write doc");
    path.to_str().expect("utf8 path").to_string()
}

fn stdout_line(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .expect("stdout line")
        .to_string()
}

#[test]
fn emit_round_trips_a_document() {
    let temp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(
        temp.path(),
        "person.json",
        "{ \"person\" : { \"age\" : 30 , \"name\" : \"ada\" } }",
    );

    let emit = cmd().args(["emit", &doc]).output().expect("emit");
    assert!(emit.status.success());
    assert_eq!(stdout_line(&emit), "{\"person\":{\"age\":30,\"name\":\"ada\"}}");
}

#[test]
fn check_reports_ok_and_failures() {
    let temp = tempfile::tempdir().expect("tempdir");
    let good = write_doc(temp.path(), "good.json", "[1,2,3]");
    let bad = write_doc(temp.path(), "bad.json", "[1,2");

    let check = cmd().args(["check", &good]).output().expect("check good");
    assert!(check.status.success());
    assert_eq!(stdout_line(&check), "ok");

    let check = cmd().args(["check", &bad]).output().expect("check bad");
    assert!(!check.status.success());
    assert_eq!(check.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&check.stderr);
    assert!(stderr.contains("UnterminatedArray"), "stderr: {stderr}");
}

#[test]
fn set_replaces_a_nested_value() {
    let temp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(temp.path(), "doc.json", "{\"person\":{\"age\":30}}");

    let set = cmd()
        .args(["set", &doc, "person.age", "99"])
        .output()
        .expect("set");
    assert!(set.status.success());
    assert_eq!(stdout_line(&set), "{\"person\":{\"age\":99}}");
}

#[test]
fn push_appends_to_a_nested_array() {
    let temp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(
        temp.path(),
        "doc.json",
        "{\"person\":{\"contacts\":[{\"type\":\"home\"}]}}",
    );

    let push = cmd()
        .args([
            "push",
            &doc,
            "person.contacts",
            "{\"number\":\"555-5348\",\"type\":\"home2\"}",
        ])
        .output()
        .expect("push");
    assert!(push.status.success());
    assert_eq!(
        stdout_line(&push),
        "{\"person\":{\"contacts\":[{\"type\":\"home\"},{\"number\":\"555-5348\",\"type\":\"home2\"}]}}"
    );
}

#[test]
fn navigation_failures_set_the_model_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let doc = write_doc(temp.path(), "doc.json", "{\"a\":[1]}");

    let set = cmd()
        .args(["set", &doc, "a.5", "0"])
        .output()
        .expect("set out of range");
    assert!(!set.status.success());
    assert_eq!(set.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&set.stderr).contains("IndexOutOfRange"));

    let push = cmd()
        .args(["push", &doc, "a.0", "0"])
        .output()
        .expect("push onto scalar");
    assert!(!push.status.success());
    assert_eq!(push.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&push.stderr).contains("TypeMismatch"));
}

#[test]
fn missing_file_sets_the_io_exit_code() {
    let missing = cmd()
        .args(["emit", "/nonexistent/doc.json"])
        .output()
        .expect("emit missing");
    assert!(!missing.status.success());
    assert_eq!(missing.status.code(), Some(8));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("Io"));
}
