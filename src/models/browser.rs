//! Wire and view types for the folder/file browser.

use serde::{Deserialize, Serialize};

/// A folder as returned by `GET /api/folders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder identifier, used in API paths.
    pub name: String,
    /// Human-readable label.
    pub display_name: String,
}

/// A file entry as returned by `GET /api/files/{folder}`.
///
/// `name` is unique within its folder. Dates and sizes arrive pre-formatted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub display_date: String,
    pub size: String,
    /// Raw date key the server sorts by (usually the file stem).
    #[serde(default)]
    pub date: String,
    /// Last modification time, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub modified: String,
}

impl FileEntry {
    /// Title shown above the viewer for this file.
    pub fn title(&self) -> String {
        format!("{} - {}", self.display_date, self.name)
    }
}

/// Body of `GET /api/content/{folder}/{file}`.
///
/// The server answers with either a `content` or an `error` key. When both
/// are present the error wins.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContentResponse {
    Error { error: String },
    Content { content: String },
}

/// Generic async load state used for the folder sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed,
}

/// What the file list region is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FileListView {
    /// No folder chosen yet.
    #[default]
    Idle,
    Loading { folder: String },
    Ready { folder: String, files: Vec<FileEntry> },
    /// The folder exists but holds no files.
    Empty { folder: String },
    Failed { folder: String },
}

impl FileListView {
    /// Folder this view belongs to, if any.
    pub fn folder(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { folder }
            | Self::Ready { folder, .. }
            | Self::Empty { folder }
            | Self::Failed { folder } => Some(folder),
        }
    }

    /// Files currently rendered as list items.
    pub fn files(&self) -> &[FileEntry] {
        match self {
            Self::Ready { files, .. } => files,
            _ => &[],
        }
    }
}

/// What the content viewer is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentView {
    /// Nothing selected.
    #[default]
    Placeholder,
    Loading {
        folder: String,
        file: String,
    },
    /// Sanitized HTML ready for `inner_html`.
    Rendered {
        folder: String,
        file: String,
        html: String,
    },
    Failed {
        folder: String,
        file: String,
        message: String,
    },
}

impl ContentView {
    /// The `(folder, file)` pair this view belongs to, if any.
    pub fn target(&self) -> Option<(&str, &str)> {
        match self {
            Self::Placeholder => None,
            Self::Loading { folder, file }
            | Self::Rendered { folder, file, .. }
            | Self::Failed { folder, file, .. } => Some((folder, file)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_response_content() {
        let json = r##"{"content": "# Hi", "folder": "news", "file": "2024-01-01.md"}"##;
        let resp: ContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp,
            ContentResponse::Content {
                content: "# Hi".to_string()
            }
        );
    }

    #[test]
    fn test_content_response_error_wins() {
        let resp: ContentResponse =
            serde_json::from_str(r#"{"error": "missing", "content": "x"}"#).unwrap();
        assert_eq!(
            resp,
            ContentResponse::Error {
                error: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_content_response_rejects_unknown_shape() {
        assert!(serde_json::from_str::<ContentResponse>(r#"{"folder": "news"}"#).is_err());
    }

    #[test]
    fn test_file_entry_optional_fields() {
        let json = r#"{"name": "2024-01-01.md", "display_date": "2024-01-01", "size": "1.2 KB"}"#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, "");
        assert_eq!(entry.modified, "");
        assert_eq!(entry.title(), "2024-01-01 - 2024-01-01.md");
    }

    #[test]
    fn test_file_list_view_accessors() {
        assert_eq!(FileListView::Idle.folder(), None);
        let view = FileListView::Empty {
            folder: "news".to_string(),
        };
        assert_eq!(view.folder(), Some("news"));
        assert!(view.files().is_empty());
    }
}
