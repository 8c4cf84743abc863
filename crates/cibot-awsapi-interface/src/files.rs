//! Files API module.

use crate::{ApiError, RepositoryService, Result};

/// File API.
pub struct FileApi;

impl FileApi {
    /// Get a file from a repository, decoded as UTF-8 text.
    pub async fn get_text_file(
        adapter: &dyn RepositoryService,
        repository_name: &str,
        commit_specifier: &str,
        file_path: &str,
    ) -> Result<String> {
        let content = adapter
            .files_get_content(repository_name, commit_specifier, file_path)
            .await?;

        String::from_utf8(content).map_err(|e| ApiError::InvalidFileEncoding {
            repository_name: repository_name.into(),
            commit_specifier: commit_specifier.into(),
            file_path: file_path.into(),
            source: e,
        })
    }
}
