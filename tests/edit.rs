use assert_cmd::Command;
use predicates::str::contains;
use std::path::Path;

fn app(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("STORAGE_CHOICE", "json")
        .env("JSON_STORAGE_PATH", dir.join("contacts.json"))
        .env("LOG_PATH", dir.join("sharing-contacts.log"));
    cmd
}

#[test]
fn edit_moves_contact_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    for (name, phone) in [("Bob", "555-2222"), ("Carol", "555-4444")] {
        app(dir.path())
            .args(["add", "--name", name, "--phone", phone])
            .assert()
            .success()
            .stdout(contains("Contact added successfully"));
    }

    app(dir.path())
        .args([
            "edit",
            "--name",
            "Bob",
            "--phone",
            "555-2222",
            "--new-phone",
            "555-3333",
            "--new-email",
            "bob@example.com",
        ])
        .assert()
        .success()
        .stdout(contains("Contact updated successfully"));

    let output = app(dir.path()).arg("list").assert().success().get_output().stdout.clone();
    let listing = String::from_utf8_lossy(&output);
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Carol"));
    assert!(lines[1].contains("Bob"));
    assert!(lines[1].contains("555-3333"));
    assert!(lines[1].contains("bob@example.com"));
    assert!(!listing.contains("555-2222"));

    // Old number no longer matches anything
    app(dir.path())
        .args(["edit", "--name", "Bob", "--phone", "555-2222", "--new-name", "Rob"])
        .assert()
        .success()
        .stderr(contains("Contact Not found"));

    Ok(())
}

#[test]
fn edit_rejects_invalid_update() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    app(dir.path())
        .args(["add", "--name", "Bob", "--phone", "555-2222"])
        .assert()
        .success();

    app(dir.path())
        .args(["edit", "--name", "Bob", "--phone", "555-2222", "--new-email", "bob@"])
        .assert()
        .failure()
        .stderr(contains("Email is optional"));

    app(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("555-2222"));

    Ok(())
}
