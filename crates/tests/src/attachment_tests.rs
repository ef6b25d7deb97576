use app::attachments::{AttachmentSet, NewFile, REMOTE_ATTACHMENT_CAP};

fn image(name: &str) -> NewFile {
    NewFile {
        name: name.to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0],
    }
}

#[test]
fn adding_two_files_against_a_cap_of_one_keeps_the_first() {
    let mut set = AttachmentSet::with_cap(REMOTE_ATTACHMENT_CAP);
    let outcome = set.add_files(vec![image("fileA.jpg"), image("fileB.jpg")]);

    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.rejected, 1);
    assert_eq!(set.names(), vec!["fileA.jpg".to_string()]);
}

#[test]
fn a_second_add_at_the_cap_is_fully_rejected() {
    let mut set = AttachmentSet::with_cap(1);
    set.add_files(vec![image("fileA.jpg")]);
    let outcome = set.add_files(vec![image("fileA.jpg")]);

    assert_eq!(outcome.added, 0);
    assert_eq!(outcome.rejected, 1);
    assert_eq!(set.len(), 1);
}

#[test]
fn removal_releases_the_preview_and_is_idempotent() {
    let mut set = AttachmentSet::with_cap(1);
    set.add_files(vec![image("fileA.jpg")]);
    let id = set.iter().next().unwrap().id;
    assert!(set.iter().next().unwrap().preview_url().is_some());

    assert!(set.remove(id));
    assert!(!set.remove(id));
    assert!(set.is_empty());
}

#[test]
fn documents_get_no_preview_handle() {
    let mut set = AttachmentSet::with_cap(2);
    set.add_files(vec![NewFile {
        name: "laudo.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.4".to_vec(),
    }]);
    assert!(set.iter().next().unwrap().preview_url().is_none());
}
