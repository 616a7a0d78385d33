//! Session state - the one document being worked on

use piimask_classifier::Classifier;
use piimask_core::{Error, Result, Snapshot, Span};
use piimask_security::RuleTable;
use tracing::{debug, info};

use crate::transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Analyzed,
    Masked,
}

/// Which snapshot is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Original,
    Masked,
}

/// Claim on an in-flight analysis.
///
/// Obtained from [`Session::begin_analysis`]; only the most recently issued
/// ticket can be committed, and [`Session::reset`] voids all of them.
#[derive(Debug)]
pub struct AnalysisTicket {
    generation: u64,
    text: String,
}

impl AnalysisTicket {
    /// The text to send to the classifier.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Holds the original snapshot, the derived masked snapshot and the active view.
///
/// `analyze`, `mask`, `restore` and `reset` are the only mutators. Each either
/// completes or returns an error with the session unchanged.
#[derive(Debug)]
pub struct Session {
    rules: RuleTable,
    original: Option<Snapshot>,
    masked: Option<Snapshot>,
    view: Option<View>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rules(RuleTable::new())
    }

    pub fn with_rules(rules: RuleTable) -> Self {
        Self {
            rules,
            original: None,
            masked: None,
            view: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.original, self.view) {
            (None, _) => SessionState::Empty,
            (Some(_), Some(View::Masked)) => SessionState::Masked,
            (Some(_), _) => SessionState::Analyzed,
        }
    }

    pub fn view(&self) -> Option<View> {
        self.view
    }

    pub fn original(&self) -> Option<&Snapshot> {
        self.original.as_ref()
    }

    /// The last masked snapshot, kept after `restore` until the next
    /// `analyze` or `reset`.
    pub fn masked(&self) -> Option<&Snapshot> {
        self.masked.as_ref()
    }

    /// The snapshot for the current view.
    pub fn active(&self) -> Option<&Snapshot> {
        match self.view? {
            View::Original => self.original.as_ref(),
            View::Masked => self.masked.as_ref(),
        }
    }

    /// Start an analysis of `text`. Any ticket issued earlier becomes stale.
    pub fn begin_analysis(&mut self, text: impl Into<String>) -> Result<AnalysisTicket> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }

        self.generation += 1;
        debug!(generation = self.generation, "Analysis started");

        Ok(AnalysisTicket {
            generation: self.generation,
            text,
        })
    }

    /// Install classifier output for a ticket as the new original snapshot.
    ///
    /// Replaces the original and discards any masked snapshot. Stale tickets
    /// and invalid spans are rejected without touching the session.
    pub fn commit_analysis(&mut self, ticket: AnalysisTicket, spans: Vec<Span>) -> Result<&Snapshot> {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale analysis"
            );
            return Err(Error::StaleAnalysis);
        }

        let snapshot = Snapshot::new(ticket.text, spans)?;
        info!(entities = snapshot.spans().len(), "Analysis committed");

        self.masked = None;
        self.view = Some(View::Original);
        Ok(self.original.insert(snapshot))
    }

    /// Classify `text` and make it the session's original snapshot.
    ///
    /// On any failure the previous state is kept.
    pub async fn analyze(
        &mut self,
        text: impl Into<String>,
        classifier: &dyn Classifier,
    ) -> Result<&Snapshot> {
        let ticket = self.begin_analysis(text)?;
        debug!(classifier = classifier.name(), "Classifying");
        let spans = classifier.classify(ticket.text()).await?;
        self.commit_analysis(ticket, spans)
    }

    /// Build the masked snapshot from the original and display it.
    ///
    /// Always starts from the original, overwriting any previous mask.
    pub fn mask(&mut self) -> Result<&Snapshot> {
        let original = self.original.as_ref().ok_or(Error::NotAnalyzed)?;
        let masked = transform::mask(original, &self.rules)?;

        info!(entities = masked.spans().len(), "Text masked");
        self.view = Some(View::Masked);
        Ok(self.masked.insert(masked))
    }

    /// Switch back to the original snapshot. A no-op when it is already shown.
    pub fn restore(&mut self) -> Result<&Snapshot> {
        let original = self.original.as_ref().ok_or(Error::NotAnalyzed)?;

        if self.view == Some(View::Masked) {
            info!("Original text restored");
        }
        self.view = Some(View::Original);
        Ok(original)
    }

    /// Drop both snapshots and void in-flight analyses. Idempotent.
    pub fn reset(&mut self) {
        self.original = None;
        self.masked = None;
        self.view = None;
        self.generation += 1;
        debug!("Session reset");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
