pub mod file_list_renderer;

pub use file_list_renderer::{render_file_list, FileListView, EMPTY_LIST_PLACEHOLDER};
