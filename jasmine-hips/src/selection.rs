//! Selections handed from the sky map to data viewers.
//!
//! A [`Selection`] names the catalog tile and the row inside it. It is the
//! whole payload a viewer needs, and its JSON form is the
//! `{"csv_url": ..., "csv_idx": ...}` message viewers already understand.
//!
//! Viewers are reached through channels. [`SelectionDispatcher`] decides
//! whether a selection goes to the viewer already open or to a new one,
//! according to the [`WindowMode`].

use jasmine_core::{JasmineError, JasmineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::mpsc::Sender;

/// Catalog tile address and row index for one click.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub csv_url: String,
    pub csv_idx: u64,
}

impl Selection {
    pub fn new(csv_url: impl Into<String>, csv_idx: u64) -> Self {
        Self {
            csv_url: csv_url.into(),
            csv_idx,
        }
    }

    pub fn to_json(&self) -> JasmineResult<String> {
        serde_json::to_string(self)
            .map_err(|e| JasmineError::parse_error("selection", &e.to_string()))
    }

    pub fn from_json(text: &str) -> JasmineResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| JasmineError::parse_error("selection", &e.to_string()))
    }
}

/// How selections are routed to viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowMode {
    /// Reuse one viewer for every selection.
    #[default]
    Single,
    /// Open a new viewer for every selection.
    MultiModal,
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::MultiModal => f.write_str("multi-modal"),
        }
    }
}

impl FromStr for WindowMode {
    type Err = JasmineError;

    fn from_str(s: &str) -> JasmineResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi-modal" | "multimodal" => Ok(Self::MultiModal),
            other => Err(JasmineError::parse_error(
                "window mode",
                &format!("unknown mode '{}'", other),
            )),
        }
    }
}

/// Opens a viewer and returns the channel feeding it.
pub trait ViewerFactory {
    fn open(&mut self) -> JasmineResult<Sender<Selection>>;
}

impl<F> ViewerFactory for F
where
    F: FnMut() -> JasmineResult<Sender<Selection>>,
{
    fn open(&mut self) -> JasmineResult<Sender<Selection>> {
        self()
    }
}

/// Routes selections to viewers.
pub struct SelectionDispatcher<F> {
    mode: WindowMode,
    factory: F,
    current: Option<Sender<Selection>>,
    opened: usize,
}

impl<F: ViewerFactory> SelectionDispatcher<F> {
    pub fn new(mode: WindowMode, factory: F) -> Self {
        Self {
            mode,
            factory,
            current: None,
            opened: 0,
        }
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: WindowMode) {
        self.mode = mode;
    }

    /// Whether a viewer from an earlier dispatch is still held.
    pub fn has_viewer(&self) -> bool {
        self.current.is_some()
    }

    /// Number of viewers opened so far.
    pub fn viewers_opened(&self) -> usize {
        self.opened
    }

    /// Delivers `selection` to a viewer.
    ///
    /// In [`WindowMode::Single`] the open viewer is reused; if it has gone
    /// away a replacement is opened. In [`WindowMode::MultiModal`] every call
    /// opens a new viewer.
    ///
    /// # Errors
    /// [`JasmineError::ChannelClosed`] if a freshly opened viewer drops the
    /// selection, or whatever the factory returns.
    pub fn dispatch(&mut self, selection: Selection) -> JasmineResult<()> {
        let selection = match (self.mode, self.current.take()) {
            (WindowMode::Single, Some(sender)) => match sender.send(selection) {
                Ok(()) => {
                    self.current = Some(sender);
                    return Ok(());
                }
                Err(err) => {
                    log::warn!("viewer channel closed, opening a new viewer");
                    err.0
                }
            },
            (_, current) => {
                self.current = current;
                selection
            }
        };

        let sender = self.factory.open()?;
        self.opened += 1;
        log::debug!(
            "opened viewer {} for {} row {}",
            self.opened,
            selection.csv_url,
            selection.csv_idx
        );
        sender
            .send(selection)
            .map_err(|_| JasmineError::ChannelClosed)?;
        self.current = Some(sender);
        Ok(())
    }
}
