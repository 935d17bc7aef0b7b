//! The reactive controller: selection events in, figures out.
//!
//! A two-state machine around the engine and scatter builder. Events merge
//! into a single pending selection (latest value per field wins, no backlog);
//! `process` recomputes once for the merged selection; the blocking `run`
//! driver layers channel draining on top so bursts arriving mid-recompute
//! coalesce and only the newest selection's figure reaches the presenter.

use std::sync::mpsc::Receiver;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::presenter::FigurePresenter;
use crate::api::scatter_figure::scatter_figure;
use crate::core::{GroupKey, IndicatorId, IndicatorTable, Selection};
use crate::error::{BoardError, BoardResult};
use crate::figure::Figure;

/// One field-level change to the current selection, or a wholesale
/// replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionEvent {
    IndicatorsChanged(Vec<IndicatorId>),
    YearChanged(i32),
    GroupKeyChanged(GroupKey),
    SelectionReplaced(Selection),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerState {
    #[default]
    Idle,
    Recomputing,
}

/// What a recompute hands the display layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Figure(Figure),
    NoUpdate,
}

/// Owns the immutable table and the current selection; recomputes figures on
/// demand. Single-consumer by construction: all methods take `&mut self`.
#[derive(Debug)]
pub struct DashboardController {
    table: IndicatorTable,
    selection: Selection,
    pending: Option<Selection>,
    state: ControllerState,
}

impl DashboardController {
    #[must_use]
    pub fn new(table: IndicatorTable, initial: Selection) -> Self {
        Self {
            table,
            selection: initial,
            pending: None,
            state: ControllerState::Idle,
        }
    }

    #[must_use]
    pub fn table(&self) -> &IndicatorTable {
        &self.table
    }

    /// The last selection handed to `process`, merged or initial.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Folds one event into the pending selection. Repeated changes to the
    /// same field before the next `process` overwrite each other.
    pub fn submit(&mut self, event: SelectionEvent) {
        let mut next = self
            .pending
            .take()
            .unwrap_or_else(|| self.selection.clone());
        match event {
            SelectionEvent::IndicatorsChanged(ids) => {
                next.indicators = ids.into_iter().collect();
            }
            SelectionEvent::YearChanged(year) => next.year = year,
            SelectionEvent::GroupKeyChanged(key) => next.group_by = key,
            SelectionEvent::SelectionReplaced(selection) => next = selection,
        }
        self.pending = Some(next);
    }

    /// Recomputes once for the merged pending selection.
    ///
    /// `NoUpdate` when nothing is pending, when the merged selection has no
    /// indicators at all, or when it names an indicator the table does not
    /// know. The merged selection becomes current either way; it is the
    /// widget state, not a command that can fail.
    pub fn process(&mut self) -> BoardResult<Response> {
        let Some(next) = self.pending.take() else {
            return Ok(Response::NoUpdate);
        };
        self.state = ControllerState::Recomputing;
        let response = self.evaluate(&next);
        self.selection = next;
        self.state = ControllerState::Idle;
        response
    }

    fn evaluate(&self, selection: &Selection) -> BoardResult<Response> {
        if selection.indicators.is_empty() {
            return Ok(Response::NoUpdate);
        }
        match scatter_figure(&self.table, selection) {
            Ok(figure) => {
                debug!(
                    year = selection.year,
                    indicators = selection.indicators.len(),
                    traces = figure.data.len(),
                    "figure recomputed"
                );
                Ok(Response::Figure(figure))
            }
            Err(BoardError::UnknownIndicator { id }) => {
                warn!(%id, "selection names an unknown indicator, keeping last figure");
                Ok(Response::NoUpdate)
            }
            Err(other) => Err(other),
        }
    }

    /// Blocking event loop: drains `events` into merged selections, presents
    /// recomputed figures, and returns once every sender is dropped.
    ///
    /// Events that arrive while a recompute is in flight supersede its
    /// output: the stale figure is discarded unpresented and the loop goes
    /// straight into the next recompute.
    pub fn run<P: FigurePresenter>(
        &mut self,
        events: &Receiver<SelectionEvent>,
        presenter: &mut P,
    ) -> BoardResult<()> {
        loop {
            if self.pending.is_none() {
                match events.recv() {
                    Ok(event) => self.submit(event),
                    Err(_) => return Ok(()),
                }
            }
            // Absorb the rest of the burst before recomputing.
            while let Ok(event) = events.try_recv() {
                self.submit(event);
            }

            let response = self.process()?;

            // Anything queued during the recompute makes this figure stale.
            let mut superseded = false;
            while let Ok(event) = events.try_recv() {
                self.submit(event);
                superseded = true;
            }
            if superseded {
                continue;
            }
            if let Response::Figure(figure) = response {
                presenter.present(figure)?;
            }
        }
    }
}
