//! Selection and content-loading state.
//!
//! [`BrowserState`] is a synchronous state machine. Every fetch is split in
//! two steps: a `begin_*` call that decides whether a request is needed and
//! hands out a request carrying a generation token, and a `finish_*` call that
//! applies the result. A result whose token is no longer the latest is
//! dropped, so a slow response can never overwrite a newer selection.
//!
//! Selection is committed only when a fetch succeeds. A failed fetch changes
//! the view of the affected region and nothing else.

use std::collections::HashMap;

use crate::config::messages;
use crate::core::error::FetchError;
use crate::models::{ContentResponse, ContentView, FileEntry, FileListView, Folder, Loadable};
use crate::utils::{log, markdown_to_html};

/// Direction for keyboard navigation through the file list.
///
/// Lists are ordered newest first, so `Newer` moves towards index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Newer,
    Older,
}

/// Pending file-list fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderRequest {
    pub folder: String,
    token: u64,
}

/// Pending content fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRequest {
    pub folder: String,
    pub file: String,
    token: u64,
}

/// State owned by the browser controller.
#[derive(Clone, Debug, Default)]
pub struct BrowserState {
    folders: Loadable<Vec<Folder>>,
    folder_counts: HashMap<String, usize>,
    /// Last fetched list per folder.
    cache: HashMap<String, Vec<FileEntry>>,

    current_folder: Option<String>,
    current_file: Option<String>,
    pending_folder: Option<String>,
    pending_file: Option<(String, String)>,

    folder_generation: u64,
    content_generation: u64,

    file_list: FileListView,
    content: ContentView,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn folders(&self) -> &Loadable<Vec<Folder>> {
        &self.folders
    }

    /// Names of all known folders, in listing order.
    pub fn folder_names(&self) -> Vec<String> {
        match &self.folders {
            Loadable::Ready(folders) => folders.iter().map(|f| f.name.clone()).collect(),
            _ => Vec::new(),
        }
    }

    /// Display label for a folder, falling back to its name.
    pub fn folder_label(&self, folder: &str) -> String {
        match &self.folders {
            Loadable::Ready(folders) => folders
                .iter()
                .find(|f| f.name == folder)
                .map(|f| f.display_name.clone())
                .unwrap_or_else(|| folder.to_string()),
            _ => folder.to_string(),
        }
    }

    pub fn folder_count(&self, folder: &str) -> Option<usize> {
        self.folder_counts.get(folder).copied()
    }

    pub fn cached_files(&self, folder: &str) -> Option<&[FileEntry]> {
        self.cache.get(folder).map(Vec::as_slice)
    }

    pub fn current_folder(&self) -> Option<&str> {
        self.current_folder.as_deref()
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    /// Cached entry of the file shown (or loading) in the viewer.
    pub fn displayed_entry(&self) -> Option<&FileEntry> {
        let (folder, file) = self.content.target()?;
        self.cache.get(folder)?.iter().find(|f| f.name == file)
    }

    pub fn file_list(&self) -> &FileListView {
        &self.file_list
    }

    pub fn content(&self) -> &ContentView {
        &self.content
    }

    /// Folder whose list is on screen (loading, shown, or failed).
    pub fn displayed_folder(&self) -> Option<&str> {
        self.file_list.folder()
    }

    /// File to mark active in the list: the one loading, else the committed one.
    pub fn highlighted_file(&self) -> Option<&str> {
        match &self.pending_file {
            Some((folder, file)) if self.current_folder.as_deref() == Some(folder) => Some(file),
            _ => self.current_file.as_deref(),
        }
    }

    /// Counter text for the displayed list.
    pub fn file_count_label(&self) -> Option<String> {
        match &self.file_list {
            FileListView::Ready { files, .. } => Some(format!("{} files", files.len())),
            FileListView::Empty { .. } => Some("0 files".to_string()),
            _ => None,
        }
    }

    /// Whether `folder` is committed and its list is what the user sees.
    pub fn is_folder_selected(&self, folder: &str) -> bool {
        self.current_folder.as_deref() == Some(folder) && self.displayed_folder() == Some(folder)
    }

    /// Whether `(folder, file)` is committed and on screen.
    pub fn is_file_selected(&self, folder: &str, file: &str) -> bool {
        self.current_folder.as_deref() == Some(folder)
            && self.current_file.as_deref() == Some(file)
            && self.content.target() == Some((folder, file))
    }

    // =========================================================================
    // Folder listing
    // =========================================================================

    pub fn begin_load_folders(&mut self) {
        self.folders = Loadable::Loading;
    }

    pub fn finish_load_folders(&mut self, result: Result<Vec<Folder>, FetchError>) {
        self.folders = match result {
            Ok(folders) => {
                log::info(&format!("Loaded {} folders", folders.len()));
                Loadable::Ready(folders)
            }
            Err(e) => {
                log::error(&format!("Failed to load folders: {}", e));
                Loadable::Failed
            }
        };
    }

    /// Record a file count from the background count pass.
    ///
    /// A folder with a cached list keeps the cached length.
    pub fn record_count(&mut self, folder: &str, count: usize) {
        if self.cache.contains_key(folder) {
            return;
        }
        self.folder_counts.insert(folder.to_string(), count);
    }

    // =========================================================================
    // Folder selection
    // =========================================================================

    /// Start selecting `folder`.
    ///
    /// Returns `None` when the folder is already selected or already loading.
    pub fn begin_select_folder(&mut self, folder: &str) -> Option<FolderRequest> {
        if self.is_folder_selected(folder) || self.pending_folder.as_deref() == Some(folder) {
            return None;
        }

        self.folder_generation += 1;
        self.pending_folder = Some(folder.to_string());
        self.file_list = FileListView::Loading {
            folder: folder.to_string(),
        };

        Some(FolderRequest {
            folder: folder.to_string(),
            token: self.folder_generation,
        })
    }

    /// Apply the result of a folder request. Returns `false` if it was stale.
    pub fn finish_select_folder(
        &mut self,
        request: FolderRequest,
        result: Result<Vec<FileEntry>, FetchError>,
    ) -> bool {
        if request.token != self.folder_generation {
            return false;
        }
        self.pending_folder = None;

        let folder = request.folder;
        match result {
            Ok(files) => {
                self.folder_counts.insert(folder.clone(), files.len());
                self.file_list = if files.is_empty() {
                    FileListView::Empty {
                        folder: folder.clone(),
                    }
                } else {
                    FileListView::Ready {
                        folder: folder.clone(),
                        files: files.clone(),
                    }
                };
                self.cache.insert(folder.clone(), files);

                self.current_folder = Some(folder);
                self.current_file = None;

                // Any content still loading belongs to the previous folder
                self.content_generation += 1;
                self.pending_file = None;
                self.content = ContentView::Placeholder;
            }
            Err(e) => {
                log::error(&format!("Failed to load files of {}: {}", folder, e));
                self.file_list = FileListView::Failed { folder };
            }
        }
        true
    }

    // =========================================================================
    // File selection
    // =========================================================================

    /// Start selecting `file` in `folder`.
    ///
    /// Returns `None` when the pair is already selected or loading, or when
    /// the file is not part of the current folder's cached list.
    pub fn begin_select_file(&mut self, folder: &str, file: &str) -> Option<ContentRequest> {
        if self.current_folder.as_deref() != Some(folder) {
            log::warn(&format!("Ignoring {}/{}: folder is not selected", folder, file));
            return None;
        }
        let known = self
            .cache
            .get(folder)
            .is_some_and(|files| files.iter().any(|f| f.name == file));
        if !known {
            log::warn(&format!("Ignoring {}/{}: not in file list", folder, file));
            return None;
        }

        let pending = self
            .pending_file
            .as_ref()
            .is_some_and(|(f, n)| f == folder && n == file);
        if pending || self.is_file_selected(folder, file) {
            return None;
        }

        Some(self.issue_content_request(folder, file))
    }

    /// Re-request the committed file, bypassing the no-op check.
    pub fn begin_refresh(&mut self) -> Option<ContentRequest> {
        let folder = self.current_folder.clone()?;
        let file = self.current_file.clone()?;
        Some(self.issue_content_request(&folder, &file))
    }

    /// Start moving one entry in `direction`, clamped at both ends.
    ///
    /// Only moves within the list on screen: nothing happens while another
    /// folder is loading or failed in the file pane.
    pub fn begin_navigate(&mut self, direction: Direction) -> Option<ContentRequest> {
        let folder = self.current_folder.clone()?;
        if self.displayed_folder() != Some(folder.as_str()) {
            return None;
        }
        let files = self.cache.get(&folder)?;

        let index = self
            .highlighted_file()
            .and_then(|name| files.iter().position(|f| f.name == name));

        let target = match (index, direction) {
            (Some(i), Direction::Newer) => i.checked_sub(1)?,
            (Some(i), Direction::Older) if i + 1 < files.len() => i + 1,
            (Some(_), Direction::Older) => return None,
            (None, Direction::Older) if !files.is_empty() => 0,
            (None, _) => return None,
        };

        let name = files[target].name.clone();
        self.begin_select_file(&folder, &name)
    }

    fn issue_content_request(&mut self, folder: &str, file: &str) -> ContentRequest {
        self.content_generation += 1;
        self.pending_file = Some((folder.to_string(), file.to_string()));
        self.content = ContentView::Loading {
            folder: folder.to_string(),
            file: file.to_string(),
        };

        ContentRequest {
            folder: folder.to_string(),
            file: file.to_string(),
            token: self.content_generation,
        }
    }

    /// Apply the result of a content request. Returns `false` if it was stale.
    pub fn finish_select_file(
        &mut self,
        request: ContentRequest,
        result: Result<ContentResponse, FetchError>,
    ) -> bool {
        if request.token != self.content_generation {
            return false;
        }
        self.pending_file = None;

        let ContentRequest { folder, file, .. } = request;
        self.content = match result {
            Ok(ContentResponse::Content { content }) => {
                self.current_file = Some(file.clone());
                ContentView::Rendered {
                    folder,
                    file,
                    html: markdown_to_html(&content),
                }
            }
            Ok(ContentResponse::Error { error }) => {
                log::warn(&format!("Server refused {}/{}: {}", folder, file, error));
                ContentView::Failed {
                    folder,
                    file,
                    message: error,
                }
            }
            Err(e) => {
                log::error(&format!("Failed to load {}/{}: {}", folder, file, e));
                ContentView::Failed {
                    folder,
                    file,
                    message: messages::LOAD_FAILED.to_string(),
                }
            }
        };
        true
    }
}
