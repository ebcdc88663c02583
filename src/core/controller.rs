//! Async driver for [`BrowserState`].
//!
//! The controller pairs a [`FileApi`] with a [`StateStore`] and runs each
//! operation as begin / fetch / finish. State is never borrowed across an
//! await point.

use crate::core::api::FileApi;
use crate::core::browser::{BrowserState, ContentRequest, Direction};
use crate::utils::log;

/// Owner of the [`BrowserState`] the controller mutates.
pub trait StateStore {
    /// Run `f` against the state. `None` if the state is gone (e.g. the
    /// owning view was disposed).
    fn with_state<R>(&self, f: impl FnOnce(&mut BrowserState) -> R) -> Option<R>;
}

/// Selection/content controller.
#[derive(Clone, Copy, Debug)]
pub struct Controller<A, S> {
    api: A,
    store: S,
}

impl<A: FileApi, S: StateStore> Controller<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Load folders, count their files, then open the first one.
    pub async fn initialize(&self) {
        self.load_folders().await;
        self.list_folder_counts().await;

        let first = self
            .store
            .with_state(|s| s.folder_names().into_iter().next())
            .flatten();
        if let Some(folder) = first {
            self.select_folder(&folder).await;
        }
    }

    pub async fn load_folders(&self) {
        if self.store.with_state(|s| s.begin_load_folders()).is_none() {
            return;
        }
        let result = self.api.list_folders().await;
        self.store.with_state(|s| s.finish_load_folders(result));
    }

    /// Fetch every folder's list once to fill in its count.
    ///
    /// Failures are logged and skipped.
    pub async fn list_folder_counts(&self) {
        let folders = self.store.with_state(|s| s.folder_names()).unwrap_or_default();

        for folder in folders {
            match self.api.list_files(&folder).await {
                Ok(files) => {
                    self.store.with_state(|s| s.record_count(&folder, files.len()));
                }
                Err(e) => log::error(&format!("Failed to count files of {}: {}", folder, e)),
            }
        }
    }

    pub async fn select_folder(&self, folder: &str) {
        let Some(request) = self.store.with_state(|s| s.begin_select_folder(folder)).flatten()
        else {
            return;
        };
        let result = self.api.list_files(&request.folder).await;
        self.store
            .with_state(|s| s.finish_select_folder(request, result));
    }

    pub async fn select_file(&self, folder: &str, file: &str) {
        let request = self
            .store
            .with_state(|s| s.begin_select_file(folder, file))
            .flatten();
        self.load_content(request).await;
    }

    pub async fn refresh_current_file(&self) {
        let request = self.store.with_state(|s| s.begin_refresh()).flatten();
        self.load_content(request).await;
    }

    pub async fn navigate(&self, direction: Direction) {
        let request = self
            .store
            .with_state(|s| s.begin_navigate(direction))
            .flatten();
        self.load_content(request).await;
    }

    async fn load_content(&self, request: Option<ContentRequest>) {
        let Some(request) = request else {
            return;
        };
        let result = self
            .api
            .fetch_content(&request.folder, &request.file)
            .await;
        self.store
            .with_state(|s| s.finish_select_file(request, result));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::config::messages;
    use crate::core::error::FetchError;
    use crate::models::{ContentResponse, ContentView, FileEntry, FileListView, Folder, Loadable};

    #[derive(Default)]
    struct MockApi {
        folders: Option<Vec<Folder>>,
        files: HashMap<String, Vec<FileEntry>>,
        contents: HashMap<(String, String), ContentResponse>,
        list_calls: Cell<usize>,
        content_calls: Cell<usize>,
    }

    impl MockApi {
        fn with_folder(mut self, name: &str, files: &[&str]) -> Self {
            self.folders.get_or_insert_with(Vec::new).push(Folder {
                name: name.to_string(),
                display_name: name.to_uppercase(),
            });
            self.files.insert(
                name.to_string(),
                files
                    .iter()
                    .map(|f| FileEntry {
                        name: f.to_string(),
                        display_date: f.trim_end_matches(".md").to_string(),
                        size: "2.0 KB".to_string(),
                        date: String::new(),
                        modified: String::new(),
                    })
                    .collect(),
            );
            self
        }

        fn with_broken_folder(mut self, name: &str) -> Self {
            self.folders.get_or_insert_with(Vec::new).push(Folder {
                name: name.to_string(),
                display_name: name.to_string(),
            });
            self
        }

        fn with_content(mut self, folder: &str, file: &str, body: &str) -> Self {
            self.contents.insert(
                (folder.to_string(), file.to_string()),
                ContentResponse::Content {
                    content: body.to_string(),
                },
            );
            self
        }

        fn with_content_error(mut self, folder: &str, file: &str, error: &str) -> Self {
            self.contents.insert(
                (folder.to_string(), file.to_string()),
                ContentResponse::Error {
                    error: error.to_string(),
                },
            );
            self
        }
    }

    impl FileApi for MockApi {
        async fn list_folders(&self) -> Result<Vec<Folder>, FetchError> {
            self.folders.clone().ok_or(FetchError::HttpError(503))
        }

        async fn list_files(&self, folder: &str) -> Result<Vec<FileEntry>, FetchError> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.files
                .get(folder)
                .cloned()
                .ok_or(FetchError::HttpError(404))
        }

        async fn fetch_content(
            &self,
            folder: &str,
            file: &str,
        ) -> Result<ContentResponse, FetchError> {
            self.content_calls.set(self.content_calls.get() + 1);
            self.contents
                .get(&(folder.to_string(), file.to_string()))
                .cloned()
                .ok_or_else(|| FetchError::NetworkError("connection reset".to_string()))
        }
    }

    impl StateStore for Rc<RefCell<BrowserState>> {
        fn with_state<R>(&self, f: impl FnOnce(&mut BrowserState) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    type TestController = Controller<MockApi, Rc<RefCell<BrowserState>>>;

    fn controller(api: MockApi) -> (TestController, Rc<RefCell<BrowserState>>) {
        let store = Rc::new(RefCell::new(BrowserState::new()));
        (Controller::new(api, store.clone()), store)
    }

    fn news_api() -> MockApi {
        MockApi::default()
            .with_folder("news", &["2024-01-03.md", "2024-01-02.md", "2024-01-01.md"])
            .with_folder("final", &[])
            .with_content("news", "2024-01-03.md", "# Third")
            .with_content("news", "2024-01-02.md", "# Second")
            .with_content("news", "2024-01-01.md", "# First")
    }

    #[tokio::test]
    async fn test_initialize_selects_first_folder() {
        let (ctl, store) = controller(news_api());
        ctl.initialize().await;

        let state = store.borrow();
        assert!(matches!(state.folders(), Loadable::Ready(f) if f.len() == 2));
        assert_eq!(state.current_folder(), Some("news"));
        assert_eq!(state.folder_count("news"), Some(3));
        assert_eq!(state.folder_count("final"), Some(0));
        assert_eq!(state.folder_label("news"), "NEWS");
    }

    #[tokio::test]
    async fn test_initialize_without_folders() {
        let (ctl, store) = controller(MockApi::default());
        ctl.initialize().await;

        let state = store.borrow();
        assert_eq!(state.folders(), &Loadable::Failed);
        assert_eq!(state.current_folder(), None);
        assert_eq!(state.file_list(), &FileListView::Idle);
    }

    #[tokio::test]
    async fn test_folder_counts_are_best_effort() {
        let api = MockApi::default()
            .with_broken_folder("broken")
            .with_folder("news", &["a.md", "b.md"]);
        let (ctl, store) = controller(api);
        ctl.load_folders().await;
        ctl.list_folder_counts().await;

        let state = store.borrow();
        assert_eq!(state.folder_count("broken"), None);
        assert_eq!(state.folder_count("news"), Some(2));
    }

    #[tokio::test]
    async fn test_cached_length_matches_rendered_count() {
        let (ctl, store) = controller(news_api());
        ctl.load_folders().await;
        ctl.select_folder("news").await;

        let state = store.borrow();
        let cached = state.cached_files("news").map(|f| f.len());
        assert_eq!(cached, Some(state.file_list().files().len()));
        assert_eq!(cached, state.folder_count("news"));
        assert_eq!(state.file_count_label(), Some(format!("{} files", 3)));
    }

    #[tokio::test]
    async fn test_reselecting_folder_does_not_refetch() {
        let (ctl, _store) = controller(news_api());
        ctl.select_folder("news").await;
        ctl.select_folder("news").await;
        assert_eq!(ctl.api.list_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_empty_folder() {
        let (ctl, store) = controller(news_api());
        ctl.select_folder("final").await;

        let state = store.borrow();
        assert!(matches!(state.file_list(), FileListView::Empty { folder } if folder == "final"));
        assert!(state.file_list().files().is_empty());
    }

    #[tokio::test]
    async fn test_select_file_and_noop() {
        let (ctl, store) = controller(news_api());
        ctl.select_folder("news").await;
        ctl.select_file("news", "2024-01-02.md").await;
        ctl.select_file("news", "2024-01-02.md").await;

        assert_eq!(ctl.api.content_calls.get(), 1);
        let state = store.borrow();
        assert_eq!(state.current_file(), Some("2024-01-02.md"));
        assert!(
            matches!(state.content(), ContentView::Rendered { html, .. } if html.contains("<h1>Second</h1>"))
        );
    }

    #[tokio::test]
    async fn test_content_error_keeps_previous_selection() {
        let api = news_api().with_content_error("news", "2024-01-01.md", "file not found");
        let (ctl, store) = controller(api);
        ctl.select_folder("news").await;
        ctl.select_file("news", "2024-01-03.md").await;
        ctl.select_file("news", "2024-01-01.md").await;

        let state = store.borrow();
        assert_eq!(state.current_folder(), Some("news"));
        assert_eq!(state.current_file(), Some("2024-01-03.md"));
        assert!(
            matches!(state.content(), ContentView::Failed { message, .. } if message == "file not found")
        );
    }

    #[tokio::test]
    async fn test_network_failure_shows_fixed_message() {
        let api = news_api().with_folder("reports", &["q1.md"]);
        let (ctl, store) = controller(api);
        ctl.select_folder("reports").await;
        ctl.select_file("reports", "q1.md").await;

        let state = store.borrow();
        assert_eq!(state.current_file(), None);
        assert!(
            matches!(state.content(), ContentView::Failed { message, .. } if message == messages::LOAD_FAILED)
        );
    }

    #[tokio::test]
    async fn test_refresh_refetches_current_file() {
        let (ctl, _store) = controller(news_api());
        ctl.refresh_current_file().await;
        assert_eq!(ctl.api.content_calls.get(), 0);

        ctl.select_folder("news").await;
        ctl.select_file("news", "2024-01-03.md").await;
        ctl.refresh_current_file().await;
        assert_eq!(ctl.api.content_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_navigate_stays_in_bounds() {
        let (ctl, store) = controller(news_api());
        ctl.select_folder("news").await;

        for _ in 0..5 {
            ctl.navigate(Direction::Older).await;
        }
        assert_eq!(store.borrow().current_file(), Some("2024-01-01.md"));

        for _ in 0..5 {
            ctl.navigate(Direction::Newer).await;
        }
        assert_eq!(store.borrow().current_file(), Some("2024-01-03.md"));
        assert_eq!(ctl.api.content_calls.get(), 5);
    }
}
