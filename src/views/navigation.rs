use std::fmt;

/// The three top-level views linked from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Collection,
    Wealth,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Collection, Route::Wealth];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Collection => "/collection",
            Route::Wealth => "/wealth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Add Card",
            Route::Collection => "Collection",
            Route::Wealth => "Wealth",
        }
    }

    /// Match a path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
