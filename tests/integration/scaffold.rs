use crate::helpers::prelude::*;

#[test]
fn react_ts_clones_reinitializes_and_installs() {
    let tools = toolchain().build();
    let home = tempdir();
    let dir = tempdir();

    let mut cmd = binary(home.path());
    tools.install(&mut cmd);
    cmd.arg("--destination")
        .arg(dir.path())
        .write_stdin("myapp\n1\ny\n1\n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    let base = dir_name(dir.path());
    assert_eq!(
        tools.calls(),
        vec![
            format!("{base}: git clone {REACT_TS_REPOSITORY} myapp"),
            "myapp: git init".to_string(),
            "myapp: npm install".to_string(),
        ]
    );
    assert!(dir.path().join("myapp/package.json").exists());
    assert!(!dir.path().join("myapp/.git").exists());
}

#[test]
fn vite_creates_then_installs_inside_the_project() {
    let tools = toolchain().build();
    let home = tempdir();
    let dir = tempdir();

    let mut cmd = binary(home.path());
    tools.install(&mut cmd);
    cmd.arg("--destination")
        .arg(dir.path())
        .write_stdin("myapp\n2\ny\n3\ny\n")
        .assert()
        .success();

    let base = dir_name(dir.path());
    assert_eq!(
        tools.calls(),
        vec![
            format!("{base}: pnpm create vite@latest myapp --template react-ts"),
            "myapp: pnpm install".to_string(),
        ]
    );
}

#[test]
fn next_without_install_only_runs_the_generator() {
    let tools = toolchain().build();
    let home = tempdir();
    let dir = tempdir();

    let mut cmd = binary(home.path());
    tools.install(&mut cmd);
    cmd.arg("--destination")
        .arg(dir.path())
        .write_stdin("web\n3\nn\n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("npm install").from_utf8());

    let calls = tools.calls();
    assert_eq!(calls.len(), 1, "{calls:?}");
    assert!(calls[0].contains(": npx create-next-app@latest web --ts"));
    assert!(calls[0].ends_with("--use-npm"));
}

#[test]
fn failed_clone_stops_and_exits_with_one() {
    let tools = toolchain().failing("git").build();
    let home = tempdir();
    let dir = tempdir();

    let mut cmd = binary(home.path());
    tools.install(&mut cmd);
    cmd.arg("--destination")
        .arg(dir.path())
        .write_stdin("myapp\n1\ny\n1\n\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("error cloning repository").from_utf8());

    assert_eq!(tools.calls().len(), 1);
}

#[test]
fn failed_install_is_reported() {
    let tools = toolchain().failing("yarn").build();
    let home = tempdir();
    let dir = tempdir();

    let mut cmd = binary(home.path());
    tools.install(&mut cmd);
    cmd.arg("--destination")
        .arg(dir.path())
        .write_stdin("myapp\n1\ny\n2\n\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("error installing dependencies").from_utf8());

    assert_eq!(tools.calls().len(), 3);
}

#[test]
fn declined_run_invokes_nothing() {
    let tools = toolchain().build();
    let home = tempdir();
    let dir = tempdir();

    let mut cmd = binary(home.path());
    tools.install(&mut cmd);
    cmd.arg("--destination")
        .arg(dir.path())
        .write_stdin("myapp\n3\nn\nn\n")
        .assert()
        .success();

    assert!(tools.calls().is_empty());
}
