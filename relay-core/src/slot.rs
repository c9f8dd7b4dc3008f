//! Übergabe vom I2C-Kontext an den Relay-Task
//!
//! Single-Slot Queue (Kapazität 1, überschreibt bei vollem Slot).
//! Der I2C-Kontext blockiert nie, der Relay-Task wartet asynchron.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

use crate::types::BusMessage;

/// Single-Slot für I2C-Nachrichten
///
/// Generisch über den Mutex-Typ:
/// - **Firmware:** `CriticalSectionRawMutex` (interrupt-sicher)
/// - **Tests:** `NoopRawMutex`
pub struct BusSlot<M: RawMutex> {
    signal: Signal<M, BusMessage>,
}

impl<M: RawMutex> BusSlot<M> {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Legt eine Nachricht ab, ohne zu blockieren
    ///
    /// Gibt `true` zurück wenn eine noch nicht abgeholte Nachricht
    /// überschrieben wurde.
    pub fn offer(&self, message: BusMessage) -> bool {
        let overwritten = self.signal.signaled();
        self.signal.signal(message);
        overwritten
    }

    /// Wartet auf die nächste Nachricht
    pub async fn take(&self) -> BusMessage {
        self.signal.wait().await
    }

    /// Holt eine Nachricht ab, falls vorhanden
    pub fn try_take(&self) -> Option<BusMessage> {
        self.signal.try_take()
    }

    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }
}

impl<M: RawMutex> Default for BusSlot<M> {
    fn default() -> Self {
        Self::new()
    }
}
