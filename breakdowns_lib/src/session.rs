//! The interactive session: one repository, one filter state, one reader.
//!
//! The visible list is recomputed from scratch on every call to
//! [`Session::visible`]. Nothing is cached between filter changes.

use std::sync::Arc;

use breakdowns_api::types::Post;
use breakdowns_api::{filter_posts, FilterState, MethodChoice, SectorChoice};

use crate::error::BreakdownsError;
use crate::repository::PostRepository;
use crate::selection::Reader;

/// Cosmetic colour scheme. Has no effect on the data model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// A user action emitted by the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SetQuery(String),
    SetSector(String),
    SetMethod(String),
    OpenPost(String),
    ClosePost,
    ToggleTheme,
}

#[derive(Debug, Default)]
pub struct Session {
    repository: PostRepository,
    filter: FilterState,
    reader: Reader,
    theme: Theme,
}

impl Session {
    pub fn new(repository: PostRepository) -> Self {
        Self {
            repository,
            ..Self::default()
        }
    }

    pub fn repository(&self) -> &PostRepository {
        &self.repository
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn reader(&self) -> &Reader {
        &self.reader
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Posts passing the current filter, in repository order.
    pub fn visible(&self) -> Vec<&Arc<Post>> {
        filter_posts(self.repository.posts(), &self.filter)
    }

    pub fn sector_options(&self) -> Vec<String> {
        self.repository.distinct_sectors()
    }

    pub fn method_options(&self) -> &'static [&'static str] {
        PostRepository::method_options()
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
    }

    pub fn set_sector(&mut self, sector: &str) {
        self.filter.sector = SectorChoice::from(sector);
    }

    /// Fails on anything outside the fixed method options; the filter is
    /// left unchanged in that case.
    pub fn set_method(&mut self, method: &str) -> Result<(), BreakdownsError> {
        let choice: MethodChoice = method.parse().map_err(|_| {
            BreakdownsError::InvalidInput(format!("unknown valuation method '{}'", method))
        })?;
        self.filter.method = choice;
        Ok(())
    }

    /// Opens the post with `id`, replacing any open post. Returns `false`
    /// and leaves the reader untouched when no such post is loaded.
    pub fn open_post(&mut self, id: &str) -> bool {
        match self.repository.find(id) {
            Some(post) => {
                self.reader.open(Arc::clone(post));
                true
            }
            None => {
                tracing::debug!("open requested for unknown post {}", id);
                false
            }
        }
    }

    pub fn close_post(&mut self) {
        self.reader.close();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn apply(&mut self, intent: Intent) -> Result<(), BreakdownsError> {
        match intent {
            Intent::SetQuery(query) => self.set_query(&query),
            Intent::SetSector(sector) => self.set_sector(&sector),
            Intent::SetMethod(method) => self.set_method(&method)?,
            Intent::OpenPost(id) => {
                self.open_post(&id);
            }
            Intent::ClosePost => self.close_post(),
            Intent::ToggleTheme => self.toggle_theme(),
        }
        Ok(())
    }

    /// Swaps in a freshly loaded repository. The filter state is kept. An
    /// open post is re-pointed at its replacement, or the reader closes if
    /// the post is gone.
    pub fn replace_repository(&mut self, repository: PostRepository) {
        let open_id = self.reader.current().map(|p| p.id.clone());
        self.repository = repository;
        self.reader.close();
        if let Some(id) = open_id {
            self.open_post(&id);
        }
    }
}
