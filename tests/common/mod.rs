use assert_cmd::Command;

pub fn assistant_cmd() -> Command {
    let mut cmd = Command::cargo_bin("assistant").unwrap();
    cmd.env_remove("TODO_DATA_FILE");
    cmd.env_remove("JOURNAL_DATA_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}
