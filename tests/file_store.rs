use notez::api::{NotezApi, NotezPaths};
use notez::config::NotezConfig;
use notez::model::EditSession;
use notez::store::fs::FileStore;
use notez::store::DataStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn open(dir: &Path) -> NotezApi<FileStore> {
    NotezApi::initialize(
        FileStore::new(dir.to_path_buf()),
        NotezConfig::default(),
        NotezPaths::new(dir.to_path_buf()),
    )
}

#[test]
fn notes_survive_reopen() {
    let temp = TempDir::new().unwrap();

    {
        let mut api = open(temp.path());
        api.add("Buy milk").unwrap();
        api.add("Call Bob").unwrap();
        api.edit_note("2", "Buy oat milk").unwrap();
    }

    let api = open(temp.path());
    let texts: Vec<_> = api.notes().iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["Call Bob", "Buy oat milk"]);
    assert!(api.notes()[0].id > api.notes()[1].id);
    assert!(api.startup_messages().is_empty());
}

#[test]
fn session_and_input_are_not_persisted() {
    let temp = TempDir::new().unwrap();

    {
        let mut api = open(temp.path());
        api.add("note").unwrap();
        api.set_input("half typed");
        let id = api.notes()[0].id;
        api.start_edit(id).unwrap();
        api.set_draft("draft");
    }

    let api = open(temp.path());
    assert_eq!(api.session(), &EditSession::Idle);
    assert_eq!(api.input(), "");
    assert_eq!(api.notes()[0].text, "note");
}

#[test]
fn clear_persists_empty_list() {
    let temp = TempDir::new().unwrap();

    {
        let mut api = open(temp.path());
        api.add("a").unwrap();
        api.clear_all(true).unwrap();
    }

    assert_eq!(fs::read_to_string(temp.path().join("notes.json")).unwrap(), "[]");
    assert_eq!(open(temp.path()).count(), 0);
}

#[test]
fn malformed_file_is_kept_aside_and_replaced() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.json"), "{\"oops\":").unwrap();

    let mut api = open(temp.path());
    assert_eq!(api.count(), 0);
    assert_eq!(api.startup_messages().len(), 1);
    assert_eq!(
        fs::read_to_string(api.store().corrupt_path()).unwrap(),
        "{\"oops\":"
    );

    api.add("fresh start").unwrap();
    let reopened = open(temp.path());
    assert_eq!(reopened.notes()[0].text, "fresh start");
    assert!(reopened.store().location().ends_with("notes.json"));
}

#[test]
fn non_utf8_file_is_kept_aside_before_first_write() {
    let temp = TempDir::new().unwrap();
    let original: &[u8] = b"[{\"id\":1,\"text\":\"caf\xe9\",\"date\":\"d\"}]";
    fs::write(temp.path().join("notes.json"), original).unwrap();

    let mut api = open(temp.path());
    assert_eq!(api.count(), 0);
    assert_eq!(api.startup_messages().len(), 1);

    api.add("new").unwrap();

    assert_eq!(fs::read(api.store().corrupt_path()).unwrap(), original);
    let reopened = open(temp.path());
    assert_eq!(reopened.notes()[0].text, "new");
}
