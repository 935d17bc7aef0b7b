//! Presenter seam between the controller and the display layer.

use std::io::Write;

use crate::error::BoardResult;
use crate::figure::Figure;

/// Receives each figure the controller decides to show. Implementations own
/// the actual display concern, whether a widget, a socket or a file.
pub trait FigurePresenter {
    fn present(&mut self, figure: Figure) -> BoardResult<()>;
}

/// Discards every figure. Useful when only the controller's state matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl FigurePresenter for NullPresenter {
    fn present(&mut self, _figure: Figure) -> BoardResult<()> {
        Ok(())
    }
}

/// Keeps every presented figure, in order. Test instrumentation.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub presented: Vec<Figure>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Figure> {
        self.presented.last()
    }
}

impl FigurePresenter for RecordingPresenter {
    fn present(&mut self, figure: Figure) -> BoardResult<()> {
        self.presented.push(figure);
        Ok(())
    }
}

/// Writes each figure as a v1 contract JSON document followed by a newline.
#[derive(Debug)]
pub struct JsonWriterPresenter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriterPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FigurePresenter for JsonWriterPresenter<W> {
    fn present(&mut self, figure: Figure) -> BoardResult<()> {
        let json = figure.to_json_contract_v1_pretty()?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
