//! Upload & analyze workflow for the home view.
//!
//! ```text
//! Idle --FileSelected--> PreviewOnly --AnalyzeRequested--> Analyzing
//!   ^                        ^                                 |
//!   |                        +---------- analysis failed -------+
//!   |                                                          v
//!   +------ save succeeded ------ Saving <--SaveRequested-- Result (+ grading editor)
//!                                   |                          ^
//!                                   +------ save failed -------+
//! ```
//!
//! Every command carries a [`Ticket`]; a finished message whose ticket is
//! not the one currently awaited is dropped, so a slow response can never
//! overwrite state produced by a newer selection.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::NOTICE_TTL;
use crate::models::{
    AnalysisResult, CardImage, GradingDimension, GradingEdit, GradingPart, SavedCard,
};
use crate::save_request::SaveCardRequest;

/// Generation token tying a response to the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PreviewOnly,
    Analyzing,
    Result,
    Saving,
}

/// Dismissible success banner with its auto-clear deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub enum Msg {
    FileSelected(CardImage),
    AnalyzeRequested,
    AnalysisFinished {
        ticket: Ticket,
        outcome: Result<AnalysisResult, String>,
    },
    ToggleGradingEditor,
    GradingChanged {
        dimension: GradingDimension,
        part: GradingPart,
        value: String,
    },
    NameChanged(String),
    PriceChanged(String),
    DetailsChanged(String),
    SaveRequested,
    SaveFinished {
        ticket: Ticket,
        outcome: Result<SavedCard, String>,
    },
    DismissNotice,
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Analyze { ticket: Ticket, image: CardImage },
    Save { ticket: Ticket, request: SaveCardRequest },
}

#[derive(Debug, Clone)]
pub struct UploadWorkflow {
    phase: Phase,
    image: Option<CardImage>,
    preview: Option<String>,
    result: Option<AnalysisResult>,
    grading: GradingEdit,
    editing_grading: bool,
    error: Option<String>,
    notice: Option<Notice>,
    awaiting: Option<Ticket>,
    next_ticket: u64,
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            image: None,
            preview: None,
            result: None,
            grading: GradingEdit::default(),
            editing_grading: false,
            error: None,
            notice: None,
            awaiting: None,
            next_ticket: 0,
        }
    }
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::FileSelected(image) => {
                self.preview = Some(image.preview_data_url());
                self.image = Some(image);
                self.result = None;
                self.grading = GradingEdit::default();
                self.editing_grading = false;
                self.error = None;
                self.awaiting = None;
                self.phase = Phase::PreviewOnly;
                None
            }
            Msg::AnalyzeRequested => {
                if !matches!(self.phase, Phase::Idle | Phase::PreviewOnly) {
                    return None;
                }
                let image = self.image.clone()?;
                let ticket = self.issue();
                self.error = None;
                self.phase = Phase::Analyzing;
                Some(Command::Analyze { ticket, image })
            }
            Msg::AnalysisFinished { ticket, outcome } => {
                if !self.accept(ticket) {
                    return None;
                }
                match outcome {
                    Ok(result) => {
                        self.grading = GradingEdit::from_analysis(&result);
                        self.result = Some(result);
                        self.phase = Phase::Result;
                    }
                    Err(message) => {
                        self.error = Some(message);
                        self.phase = Phase::PreviewOnly;
                    }
                }
                None
            }
            Msg::ToggleGradingEditor => {
                if self.result.is_some() {
                    self.editing_grading = !self.editing_grading;
                }
                None
            }
            Msg::GradingChanged {
                dimension,
                part,
                value,
            } => {
                if self.result.is_some() {
                    self.grading.set(dimension, part, value);
                }
                None
            }
            Msg::NameChanged(name) => {
                if let Some(result) = self.result.as_mut() {
                    result.card_name = name;
                }
                None
            }
            Msg::PriceChanged(price) => {
                if let Some(result) = self.result.as_mut() {
                    result.estimated_price = price;
                }
                None
            }
            Msg::DetailsChanged(details) => {
                if let Some(result) = self.result.as_mut() {
                    result.details = details;
                }
                None
            }
            Msg::SaveRequested => {
                if self.phase != Phase::Result {
                    return None;
                }
                let request = self.save_request()?;
                let ticket = self.issue();
                self.error = None;
                self.phase = Phase::Saving;
                Some(Command::Save { ticket, request })
            }
            Msg::SaveFinished { ticket, outcome } => {
                if !self.accept(ticket) {
                    return None;
                }
                match outcome {
                    Ok(card) => {
                        info!(id = card.id, "workflow reset after save");
                        self.reset();
                        self.notice = Some(Notice {
                            message: format!("{} saved to your collection!", card.card_name),
                            expires_at: Instant::now() + NOTICE_TTL,
                        });
                    }
                    Err(message) => {
                        self.error = Some(message);
                        self.phase = Phase::Result;
                    }
                }
                None
            }
            Msg::DismissNotice => {
                self.notice = None;
                None
            }
            Msg::Tick(now) => {
                if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
                    self.notice = None;
                }
                None
            }
        }
    }

    /// The request a save would send right now, or `None` when there is no
    /// image or no analysis to save.
    pub fn save_request(&self) -> Option<SaveCardRequest> {
        let image = self.image.clone()?;
        let result = self.result.as_ref()?;
        let mut request = SaveCardRequest::from_analysis(image, result);
        request.grading(&self.grading);
        Some(request)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn image(&self) -> Option<&CardImage> {
        self.image.as_ref()
    }

    /// `data:` URL of the selected photo.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn grading(&self) -> &GradingEdit {
        &self.grading
    }

    pub fn is_editing_grading(&self) -> bool {
        self.editing_grading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Analyzing | Phase::Saving)
    }

    fn issue(&mut self) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.awaiting = Some(ticket);
        ticket
    }

    fn accept(&mut self, ticket: Ticket) -> bool {
        if self.awaiting != Some(ticket) {
            debug!(?ticket, awaiting = ?self.awaiting, "dropping stale response");
            return false;
        }
        self.awaiting = None;
        true
    }

    /// Back to `Idle`, keeping only the ticket counter so old tickets stay dead.
    fn reset(&mut self) {
        let next_ticket = self.next_ticket;
        *self = Self {
            next_ticket,
            ..Self::default()
        };
    }
}
