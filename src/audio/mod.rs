//! Sound feedback — short cues for navigation and selection.
//!
//! Two cues are preloaded from the project's `assets/` directory at
//! startup. Playback runs on a dedicated thread so the event loop never
//! touches the audio device. Every failure on the way to the speaker
//! (no device, missing file, decode error) is swallowed: sound is an
//! enhancement, never an error surface.

use std::io::Cursor;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};

use rodio::{Decoder, OutputStream, Sink};
use tracing::debug;

/// Relative path of the navigation cue.
pub const MOVE_CUE_ASSET: &str = "assets/move.ogg";
/// Relative path of the selection cue.
pub const SELECT_CUE_ASSET: &str = "assets/select.ogg";

/// The two feedback sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Selection moved (arrow keys).
    Move,
    /// Selection confirmed (Enter).
    Select,
}

/// Handle to the playback thread. `play` never blocks and never fails.
pub struct Feedback {
    tx: Option<Sender<Cue>>,
}

impl Feedback {
    /// Preload cues from `<dir>/assets/` and start the playback thread.
    ///
    /// Missing cue files simply stay silent; if neither exists the thread
    /// is not started at all.
    pub fn new(dir: &Path) -> Self {
        let move_bytes = read_cue(&dir.join(MOVE_CUE_ASSET));
        let select_bytes = read_cue(&dir.join(SELECT_CUE_ASSET));
        if move_bytes.is_none() && select_bytes.is_none() {
            return Self { tx: None };
        }

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || playback_loop(rx, move_bytes, select_bytes));
        Self { tx: Some(tx) }
    }

    /// A feedback handle that plays nothing (`--mute`).
    pub fn muted() -> Self {
        Self { tx: None }
    }

    /// Request a cue. Best-effort: if the playback thread is gone or was
    /// never started, the request is dropped.
    pub fn play(&self, cue: Cue) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(cue);
        }
    }
}

fn read_cue(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            debug!(path = %path.display(), "cue not loaded: {err}");
            None
        }
    }
}

/// Playback thread body. Each request decodes the preloaded bytes from the
/// start; dropping the previous sink cuts off any cue still playing, so a
/// rapid burst of moves restarts the sound rather than stacking it.
fn playback_loop(rx: Receiver<Cue>, move_bytes: Option<Vec<u8>>, select_bytes: Option<Vec<u8>>) {
    let Ok((_stream, handle)) = OutputStream::try_default() else {
        debug!("no audio output device, cues disabled");
        return;
    };

    let mut current: Option<Sink> = None;
    while let Ok(cue) = rx.recv() {
        let bytes = match cue {
            Cue::Move => &move_bytes,
            Cue::Select => &select_bytes,
        };
        let Some(bytes) = bytes else { continue };
        let Ok(source) = Decoder::new(Cursor::new(bytes.clone())) else {
            continue;
        };
        let Ok(sink) = Sink::try_new(&handle) else { continue };
        sink.append(source);
        current = Some(sink);
    }
    drop(current);
}
