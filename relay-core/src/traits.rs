//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::OutputState;

/// Fehler-Typ für Ausgangs-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    WriteFailed,
}

/// Fehler-Typ für die serielle Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    Read,
    Write,
}

/// Trait für den binären Ausgang (LED)
///
/// Der Relay bekommt den Treiber bei der Konstruktion übergeben,
/// es gibt keinen globalen Zustand.
///
/// # Implementierungen
/// - **Production:** SmartLedOutput (WS2812 über RMT), GpioLedOutput (GPIO)
/// - **Testing:** MockOutputDriver (in-memory Mock)
pub trait OutputDriver {
    /// Setzt den Ausgang sofort und synchron
    ///
    /// # Fehlerbehandlung
    /// Gibt `OutputError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set(&mut self, state: OutputState) -> Result<(), OutputError>;
}

/// Trait für eine byte-orientierte Verbindung (UART)
///
/// # Implementierungen
/// - **Production:** UartLink (esp-hal UART im Async-Modus)
/// - **Testing:** MockLink (Eingabe-Queue + Ausgabe-Buffer)
#[allow(async_fn_in_trait)]
pub trait ByteLink {
    /// Wartet auf genau ein Byte
    async fn read_byte(&mut self) -> Result<u8, LinkError>;

    /// Schreibt alle Bytes (fire-and-forget, kein Flow Control)
    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError>;
}
