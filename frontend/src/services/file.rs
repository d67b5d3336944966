//! Browser files as [`ImageHandle`]s.

use web_sys::{File, FileList, Url};

use crate::state::ImageHandle;

impl ImageHandle for File {
    fn mime_type(&self) -> String {
        self.type_()
    }

    fn file_name(&self) -> String {
        self.name()
    }

    fn create_preview(&self) -> Option<String> {
        match Url::create_object_url_with_blob(self) {
            Ok(url) => Some(url),
            Err(e) => {
                log::error!("Failed to create preview URL: {:?}", e);
                None
            }
        }
    }

    fn revoke_preview(url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke preview URL {}: {:?}", url, e);
        }
    }
}

/// Collect the files of an `<input type="file">` or a drop.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
