//! View selection and rendering.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tbm_live_core::TileProvider;
use tbm_live_core::transit::{DatasetSource, Datasets, FileDatasetSource};

use crate::config::ShellConfig;
use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("render task failed: {0}")]
    Render(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ShellError>;

/// The three mutually exclusive pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    BikeShare,
    Network,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 3] = [View::Home, View::BikeShare, View::Network];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::BikeShare => "VCub",
            Self::Network => "Bus • Tram • BatCub",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::BikeShare => "/vcub",
            Self::Network => "/reseau",
        }
    }
}

/// Selector values submitted by the bike-share view
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViewQuery {
    pub date: Option<String>,
    pub time: Option<String>,
}

/// A rendered view, still to be wrapped in the page layout
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub view: View,
    pub body: String,
    /// The page embeds a map with the drawing toolbar
    pub with_draw: bool,
}

impl Page {
    pub fn into_html(self) -> String {
        views::layout::document(&self)
    }
}

/// State shared by every request
pub struct Shell<S = FileDatasetSource> {
    datasets: Datasets<S>,
    tiles: TileProvider,
    facts_file: PathBuf,
}

impl Shell<FileDatasetSource> {
    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(
            config.dataset_source(),
            TileProvider::new(config.maptiler_api_key.clone()),
            config.facts_file.clone(),
        )
    }
}

impl<S: DatasetSource> Shell<S> {
    pub fn new(source: S, tiles: TileProvider, facts_file: impl Into<PathBuf>) -> Self {
        Self {
            datasets: Datasets::new(source),
            tiles,
            facts_file: facts_file.into(),
        }
    }

    pub fn datasets(&self) -> &Datasets<S> {
        &self.datasets
    }

    pub fn tiles(&self) -> &TileProvider {
        &self.tiles
    }

    pub fn facts_file(&self) -> &Path {
        &self.facts_file
    }
}

/// Render one view from the query and the memoized datasets.
///
/// Blocking: the first call per dataset reads and parses the file.
pub fn render_view<S: DatasetSource>(view: View, query: &ViewQuery, shell: &Shell<S>) -> Page {
    tracing::debug!("rendering {view:?} with {query:?}");
    match view {
        View::Home => views::home::render(),
        View::BikeShare => views::bike_share::render(query, shell),
        View::Network => views::network::render(shell, &mut rand::rng()),
    }
}
