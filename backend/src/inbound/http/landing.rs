//! Landing page and static assets.

use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::{get, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Directory holding `index.html` and the assets served under `/public`.
#[derive(Debug, Clone)]
pub struct PublicDir(PathBuf);

impl PublicDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Static file service mounted at `/public`.
    #[must_use]
    pub fn assets(&self) -> Files {
        Files::new("/public", &self.0)
    }
}

/// Serve `index.html` from the public directory.
#[get("/")]
pub async fn index(public: web::Data<PublicDir>) -> ApiResult<NamedFile> {
    let page = public.path().join("index.html");
    NamedFile::open_async(&page).await.map_err(|err| {
        tracing::error!(path = %page.display(), error = %err, "landing page unavailable");
        Error::internal(format!("landing page unavailable: {err}"))
    })
}
