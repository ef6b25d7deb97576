//! Attachments picked during a form session.
//!
//! Image previews are browser object-URLs, which the browser only frees on
//! an explicit revoke. Every acquisition pairs with exactly one release:
//! all removal paths go through [`PreviewUrl::release`], and `Drop`
//! delegates to it, so unmounting the form cannot leak a handle.

use api_client::FileUpload;
use uuid::Uuid;

/// Policy cap: a protocol submission carries exactly one attachment.
pub const REMOTE_ATTACHMENT_CAP: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Document,
}

/// A file as it arrives from the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Scoped preview handle. On the web build this is an object-URL that must
/// be revoked; natively it is a data-URL and release just drops it.
/// Release is idempotent.
#[derive(Debug)]
pub struct PreviewUrl {
    url: Option<String>,
}

impl PreviewUrl {
    pub fn for_image(bytes: &[u8], content_type: &str) -> Self {
        Self {
            url: create_object_url(bytes, content_type),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn release(&mut self) {
        if let Some(url) = self.url.take() {
            revoke_object_url(&url);
        }
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Debug)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub kind: AttachmentKind,
    preview: Option<PreviewUrl>,
}

impl Attachment {
    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().and_then(PreviewUrl::url)
    }

    pub fn to_upload(&self) -> FileUpload {
        FileUpload {
            name: self.name.clone(),
            content_type: self.content_type.clone(),
            bytes: self.bytes.clone(),
        }
    }

    fn release_preview(&mut self) {
        if let Some(preview) = self.preview.as_mut() {
            preview.release();
        }
    }
}

/// Result of an add: how many files made it in, how many the cap dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    pub added: usize,
    pub rejected: usize,
}

/// The attachment list of one form session.
pub struct AttachmentSet {
    items: Vec<Attachment>,
    cap: usize,
}

impl AttachmentSet {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            items: Vec::new(),
            cap,
        }
    }

    /// Classify and append the picked files, keeping only what fits under
    /// the cap. The caller turns a non-zero `rejected` into a notice.
    pub fn add_files(&mut self, files: Vec<NewFile>) -> AddOutcome {
        let available = self.cap.saturating_sub(self.items.len());
        let mut added = 0;
        let mut rejected = 0;
        for file in files {
            if added >= available {
                rejected += 1;
                continue;
            }
            let kind = if file.content_type.starts_with("image/") {
                AttachmentKind::Image
            } else {
                AttachmentKind::Document
            };
            let preview = match kind {
                AttachmentKind::Image => {
                    Some(PreviewUrl::for_image(&file.bytes, &file.content_type))
                }
                AttachmentKind::Document => None,
            };
            self.items.push(Attachment {
                id: Uuid::new_v4(),
                name: file.name,
                content_type: file.content_type,
                bytes: file.bytes,
                kind,
                preview,
            });
            added += 1;
        }
        AddOutcome { added, rejected }
    }

    /// Release the preview and drop the attachment. Unknown ids are a no-op.
    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.items.iter().position(|a| a.id == id) {
            Some(index) => {
                let mut removed = self.items.remove(index);
                removed.release_preview();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for attachment in &mut self.items {
            attachment.release_preview();
        }
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The sole attachment, when exactly one is present.
    pub fn single(&self) -> Option<&Attachment> {
        match self.items.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|a| a.name.clone()).collect()
    }
}

#[cfg(target_arch = "wasm32")]
fn create_object_url(bytes: &[u8], content_type: &str) -> Option<String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn create_object_url(bytes: &[u8], content_type: &str) -> Option<String> {
    use base64::Engine as _;

    Some(format!(
        "data:{};base64,{}",
        content_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}

#[cfg(target_arch = "wasm32")]
fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

#[cfg(not(target_arch = "wasm32"))]
fn revoke_object_url(_url: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> NewFile {
        NewFile {
            name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    fn pdf(name: &str) -> NewFile {
        NewFile {
            name: name.to_string(),
            content_type: "application/pdf".to_string(),
            bytes: b"%PDF-1.4".to_vec(),
        }
    }

    #[test]
    fn classifies_by_content_type() {
        let mut set = AttachmentSet::with_cap(2);
        set.add_files(vec![image("foto.jpg"), pdf("laudo.pdf")]);

        let kinds: Vec<AttachmentKind> = set.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AttachmentKind::Image, AttachmentKind::Document]);
        assert!(set.iter().next().unwrap().preview_url().is_some());
        assert!(set.iter().nth(1).unwrap().preview_url().is_none());
    }

    #[test]
    fn cap_keeps_the_first_files_and_rejects_the_rest() {
        let mut set = AttachmentSet::with_cap(REMOTE_ATTACHMENT_CAP);
        let outcome = set.add_files(vec![image("a.jpg"), image("b.jpg")]);
        assert_eq!(outcome, AddOutcome { added: 1, rejected: 1 });
        assert_eq!(set.names(), vec!["a.jpg".to_string()]);
    }

    #[test]
    fn cap_rejects_everything_once_full() {
        let mut set = AttachmentSet::with_cap(1);
        set.add_files(vec![image("a.jpg")]);
        let outcome = set.add_files(vec![image("b.jpg")]);
        assert_eq!(outcome, AddOutcome { added: 0, rejected: 1 });
        assert_eq!(set.len(), 1);
        assert_eq!(set.names(), vec!["a.jpg".to_string()]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut set = AttachmentSet::with_cap(1);
        set.add_files(vec![image("a.jpg")]);
        let id = set.iter().next().unwrap().id;

        assert!(set.remove(id));
        assert!(!set.remove(id));
        assert!(set.is_empty());
    }

    #[test]
    fn preview_release_is_idempotent() {
        let mut preview = PreviewUrl::for_image(&[1, 2, 3], "image/png");
        assert!(preview.url().is_some());
        preview.release();
        assert!(preview.url().is_none());
        // A second release finds nothing to revoke.
        preview.release();
        assert!(preview.url().is_none());
    }

    #[test]
    fn native_preview_is_a_data_url() {
        let set = {
            let mut set = AttachmentSet::with_cap(1);
            set.add_files(vec![image("a.jpg")]);
            set
        };
        let url = set.iter().next().unwrap().preview_url().unwrap().to_string();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn single_requires_exactly_one() {
        let mut set = AttachmentSet::with_cap(3);
        assert!(set.single().is_none());
        set.add_files(vec![image("a.jpg")]);
        assert_eq!(set.single().unwrap().name, "a.jpg");
        set.add_files(vec![image("b.jpg")]);
        assert!(set.single().is_none());
    }

    #[test]
    fn clear_releases_and_empties() {
        let mut set = AttachmentSet::with_cap(2);
        set.add_files(vec![image("a.jpg"), pdf("b.pdf")]);
        set.clear();
        assert!(set.is_empty());
        assert!(set.names().is_empty());
    }
}
