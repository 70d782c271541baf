//! Server-rendered pages.
//!
//! Handlers build a [`ViewModel`] and hand it to the [`ViewRenderer`] held in
//! the application state together with the [`View`] to produce.

pub mod html;
pub mod summary;

use std::fmt;

use serde::Serialize;

use weightlog_core::result::AppResult;
use weightlog_core::types::WeightId;
use weightlog_entity::weight::Weight;

use crate::dto::WeightForm;

pub use html::HtmlRenderer;
pub use summary::WeightSummary;

/// The pages the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Weight list with averages.
    Index,
    /// A single record.
    Detail,
    /// Creation form.
    New,
    /// Edit form for an existing record.
    Edit,
}

impl View {
    /// Template-style name of the page.
    pub fn name(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Detail => "detail.html",
            Self::New => "new.html",
            Self::Edit => "edit.html",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of a page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ViewData {
    /// Nothing to show besides the error, if any.
    #[default]
    Empty,
    /// Every record, for the list page.
    List(Vec<Weight>),
    /// One record, for the detail page.
    Record(Weight),
    /// Form values; `id` is set when editing an existing record.
    Form {
        /// Record being edited.
        id: Option<WeightId>,
        /// Values to pre-fill.
        values: WeightForm,
    },
}

/// Data shared by every page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// Page payload.
    pub data: ViewData,
    /// Message shown above the content.
    pub error: Option<String>,
    /// Mean of `max` over the listed records, two decimals.
    pub average_max: String,
    /// Mean of `min` over the listed records, two decimals.
    pub average_min: String,
    /// Mean of `difference` over the listed records, two decimals.
    pub average_diff: String,
}

impl ViewModel {
    /// List page model.
    pub fn list(weights: Vec<Weight>) -> Self {
        let summary = WeightSummary::from_records(&weights);
        Self {
            data: ViewData::List(weights),
            error: None,
            average_max: summary.formatted_max(),
            average_min: summary.formatted_min(),
            average_diff: summary.formatted_diff(),
        }
    }

    /// Detail page model.
    pub fn record(weight: Weight) -> Self {
        Self {
            data: ViewData::Record(weight),
            ..Self::default()
        }
    }

    /// Form page model.
    pub fn form(id: Option<WeightId>, values: WeightForm) -> Self {
        Self {
            data: ViewData::Form { id, values },
            ..Self::default()
        }
    }

    /// Model carrying only an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::default().with_error(message)
    }

    /// Attach an error message.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

/// Turns a view and its model into an HTML document.
///
/// Implementations are built once at startup and shared by every request.
pub trait ViewRenderer: Send + Sync + 'static {
    /// Render `view` with `model`.
    fn render(&self, view: View, model: &ViewModel) -> AppResult<String>;
}
