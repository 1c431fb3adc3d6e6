mod create;
mod delete;
mod list;
mod show;
mod update;

pub use create::create;
pub use delete::remove;
pub use list::list;
pub use show::show;
pub use update::update;

use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::utils;

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkBody {
    pub link: String,
    pub title: String,
    pub description: Option<String>,
}

impl CreateBookmarkBody {
    pub fn validate(&self) -> Result<(), ApiError> {
        utils::validate_non_empty("link", &self.link)?;
        utils::validate_non_empty("title", &self.title)
    }
}

/// Partial update body; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkBody {
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateBookmarkBody {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(link) = &self.link {
            utils::validate_non_empty("link", link)?;
        }
        if let Some(title) = &self.title {
            utils::validate_non_empty("title", title)?;
        }
        Ok(())
    }
}
