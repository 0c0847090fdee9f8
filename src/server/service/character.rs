//! Listing of the character artwork available to players.

use std::path::Path;

use url::Url;

use crate::server::error::AppError;

/// File extensions accepted as character images, compared case-insensitively.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// URL path under which the character image directory is served.
const IMAGE_ROUTE: [&str; 2] = ["images", "characters"];

pub struct CharacterImageService<'a> {
    dir: &'a Path,
}

impl<'a> CharacterImageService<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    /// Lists absolute URLs for every image in the character directory.
    ///
    /// Only regular files with an allowed extension are listed. URLs are sorted by file
    /// name.
    ///
    /// # Arguments
    /// - `base` - Scheme and host the client reached the server on
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - One URL per image file
    /// - `Err(AppError::IoErr)` - Directory missing or unreadable
    pub async fn list_urls(&self, base: &Url) -> Result<Vec<String>, AppError> {
        let mut entries = tokio::fs::read_dir(self.dir).await?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.metadata().await?.is_file() {
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!("Skipping non UTF-8 file name in {}", self.dir.display());
                continue;
            };

            if is_image(&name) {
                names.push(name);
            }
        }
        names.sort();

        names
            .into_iter()
            .map(|name| image_url(base, &name))
            .collect()
    }
}

fn is_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

fn image_url(base: &Url, name: &str) -> Result<String, AppError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::InternalError(format!("Cannot build image URL from {}", base)))?
        .clear()
        .extend(IMAGE_ROUTE)
        .push(name);

    Ok(url.into())
}
