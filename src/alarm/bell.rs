//! Terminal bell alarm.

use std::io::Write;

use super::Alarm;

/// ASCII bell character.
const BEL: &[u8] = b"\x07";

/// Rings the terminal bell on an output stream.
#[derive(Debug)]
pub struct BellAlarm<W: Write> {
    out: W,
}

impl<W: Write> BellAlarm<W> {
    /// Ring the bell on `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the alarm and return the stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Alarm for BellAlarm<W> {
    fn play(&mut self) {
        if let Err(e) = self.out.write_all(BEL).and_then(|()| self.out.flush()) {
            tracing::warn!("failed to ring terminal bell: {e}");
        }
    }

    // A bell cannot be interrupted once rung.
    fn stop(&mut self) {}
}
