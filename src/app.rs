//! Navigation shell tying the views to the backend.
//!
//! [`App`] holds exactly one mounted view. Navigating drops that view's
//! state (including any pending notice) and mounts the next one, running
//! its initial fetches. Messages go to the active view; any command it
//! returns is executed synchronously and its outcome fed straight back in.

use tracing::{debug, info};

use crate::views::gallery::{self, CollectionGallery};
use crate::views::navigation::Route;
use crate::views::portfolio::{self, PortfolioOverview};
use crate::views::workflow::{self, UploadWorkflow};
use crate::PokewealthClient;

/// Generic messages used when the backend gives no `detail`.
pub const ANALYZE_FAILED: &str = "Failed to analyze card";
pub const SAVE_FAILED: &str = "Failed to save card";
pub const FETCH_CARDS_FAILED: &str = "Failed to fetch cards";
pub const FETCH_PORTFOLIO_FAILED: &str = "Failed to fetch portfolio data";
pub const FETCH_HISTORY_FAILED: &str = "Failed to fetch card price history";

pub enum ActiveView {
    Home(UploadWorkflow),
    Collection(CollectionGallery),
    Wealth(PortfolioOverview),
}

impl ActiveView {
    pub fn route(&self) -> Route {
        match self {
            ActiveView::Home(_) => Route::Home,
            ActiveView::Collection(_) => Route::Collection,
            ActiveView::Wealth(_) => Route::Wealth,
        }
    }
}

pub struct App {
    client: PokewealthClient,
    view: ActiveView,
}

impl App {
    /// Start on the home view.
    pub fn new(client: PokewealthClient) -> Self {
        Self {
            client,
            view: ActiveView::Home(UploadWorkflow::new()),
        }
    }

    pub fn client(&self) -> &PokewealthClient {
        &self.client
    }

    pub fn route(&self) -> Route {
        self.view.route()
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn workflow(&self) -> Option<&UploadWorkflow> {
        match &self.view {
            ActiveView::Home(wf) => Some(wf),
            _ => None,
        }
    }

    pub fn gallery(&self) -> Option<&CollectionGallery> {
        match &self.view {
            ActiveView::Collection(g) => Some(g),
            _ => None,
        }
    }

    pub fn overview(&self) -> Option<&PortfolioOverview> {
        match &self.view {
            ActiveView::Wealth(o) => Some(o),
            _ => None,
        }
    }

    /// Replace the current view with a freshly mounted one.
    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route(), to = %route, "navigate");
        match route {
            Route::Home => self.view = ActiveView::Home(UploadWorkflow::new()),
            Route::Collection => {
                let (gallery, command) = CollectionGallery::mount();
                self.view = ActiveView::Collection(gallery);
                self.run_gallery(Some(command));
            }
            Route::Wealth => {
                let (overview, commands) = PortfolioOverview::mount();
                self.view = ActiveView::Wealth(overview);
                for command in commands {
                    self.run_portfolio(Some(command));
                }
            }
        }
    }

    /// Dispatch to the upload workflow. Picking a file starts analysis at once.
    pub fn home(&mut self, msg: workflow::Msg) {
        let ActiveView::Home(wf) = &mut self.view else {
            debug!("home message while another view is mounted; ignored");
            return;
        };
        let auto_analyze = matches!(msg, workflow::Msg::FileSelected(_));
        let mut command = wf.update(msg);
        if auto_analyze {
            command = wf.update(workflow::Msg::AnalyzeRequested);
        }
        while let Some(cmd) = command {
            let reply = match cmd {
                workflow::Command::Analyze { ticket, image } => workflow::Msg::AnalysisFinished {
                    ticket,
                    outcome: self
                        .client
                        .analysis()
                        .analyze_card(&image)
                        .map_err(|e| e.user_message(ANALYZE_FAILED)),
                },
                workflow::Command::Save { ticket, request } => workflow::Msg::SaveFinished {
                    ticket,
                    outcome: self
                        .client
                        .cards()
                        .save(&request)
                        .map_err(|e| e.user_message(SAVE_FAILED)),
                },
            };
            command = wf.update(reply);
        }
    }

    /// Dispatch to the collection gallery.
    pub fn collection(&mut self, msg: gallery::Msg) {
        let ActiveView::Collection(g) = &mut self.view else {
            debug!("collection message while another view is mounted; ignored");
            return;
        };
        let command = g.update(msg);
        self.run_gallery(command);
    }

    /// Dispatch to the portfolio overview.
    pub fn wealth(&mut self, msg: portfolio::Msg) {
        let ActiveView::Wealth(o) = &mut self.view else {
            debug!("wealth message while another view is mounted; ignored");
            return;
        };
        let command = o.update(msg);
        self.run_portfolio(command);
    }

    fn run_gallery(&mut self, mut command: Option<gallery::Command>) {
        let ActiveView::Collection(g) = &mut self.view else {
            return;
        };
        while let Some(gallery::Command::FetchCards) = command {
            let loaded = self
                .client
                .cards()
                .list()
                .map_err(|e| e.user_message(FETCH_CARDS_FAILED));
            command = g.update(gallery::Msg::CardsLoaded(loaded));
        }
    }

    fn run_portfolio(&mut self, mut command: Option<portfolio::Command>) {
        let ActiveView::Wealth(o) = &mut self.view else {
            return;
        };
        while let Some(cmd) = command {
            let reply = match cmd {
                portfolio::Command::FetchSummary => portfolio::Msg::SummaryLoaded(
                    self.client
                        .portfolio()
                        .analytics()
                        .map_err(|e| e.user_message(FETCH_PORTFOLIO_FAILED)),
                ),
                portfolio::Command::FetchHistory { card_id } => portfolio::Msg::HistoryLoaded {
                    card_id,
                    outcome: self
                        .client
                        .cards()
                        .price_history(card_id)
                        .map_err(|e| e.user_message(FETCH_HISTORY_FAILED)),
                },
            };
            command = o.update(reply);
        }
    }
}
