use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_foobar"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("foobar binary should start")
}

#[test]
fn prints_the_label_line() {
    let output = run(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{}\n", foobar::generate_and_classify()));
}

#[test]
fn extra_arguments_are_ignored() {
    let cases: [&[&str]; 3] = [&["extra"], &["--help"], &["--version", "1", "2"]];

    for args in cases {
        let output = run(args);

        assert!(output.status.success(), "exit status for {args:?}: {:?}", output.status);
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("Bar Foo 98 "), "stdout for {args:?}: {stdout}");
    }
}
