//! View loaders for deferred tool routes.
//!
//! `BuiltinLoader` renders the page from the catalog entry. `DirLoader` reads
//! a pre-rendered fragment from `<dir>/<Component>.html`, which lets a
//! deployment ship its own page bodies without rebuilding the server.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use super::catalog::{Category, ToolSpec};
use super::{View, pages};
use crate::router::{LoadError, ViewLoader};

/// Which loader deferred routes use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderKind {
    Builtin,
    Dir(PathBuf),
}

impl LoaderKind {
    #[must_use]
    pub fn loader_for(&self, tool: &'static ToolSpec) -> Arc<dyn ViewLoader> {
        match self {
            Self::Builtin => Arc::new(BuiltinLoader { tool }),
            Self::Dir(dir) => Arc::new(DirLoader { dir: dir.clone(), tool }),
        }
    }
}

pub struct BuiltinLoader {
    tool: &'static ToolSpec,
}

#[async_trait::async_trait]
impl ViewLoader for BuiltinLoader {
    async fn load(&self) -> Result<View, LoadError> {
        Ok(match self.tool.category {
            Category::Info => pages::about(self.tool),
            _ => pages::tool(self.tool),
        })
    }
}

pub struct DirLoader {
    dir: PathBuf,
    tool: &'static ToolSpec,
}

impl DirLoader {
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.dir.join(format!("{}.html", self.tool.component))
    }
}

#[async_trait::async_trait]
impl ViewLoader for DirLoader {
    async fn load(&self) -> Result<View, LoadError> {
        let path = self.source_path();
        let source = path.display().to_string();

        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::Missing(source.clone()),
            _ => LoadError::Io { path: source.clone(), message: e.to_string() },
        })?;
        let body = String::from_utf8(bytes).map_err(|_| LoadError::Encoding(source.clone()))?;

        tracing::info!(view = self.tool.name, path = %source, "loaded view from disk");
        Ok(View::new(self.tool.name, self.tool.title, body))
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
