//! Core Types für das Command-Relay
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Binärer Zustand des Ausgangs (LED)
///
/// Startwert ist immer `Off`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputState {
    #[default]
    Off,
    On,
}

impl OutputState {
    pub fn is_on(self) -> bool {
        self == OutputState::On
    }
}

impl From<bool> for OutputState {
    fn from(on: bool) -> Self {
        if on { OutputState::On } else { OutputState::Off }
    }
}

/// Dekodiertes Kommando aus einem einzelnen Token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// LED einschalten
    TurnOn,
    /// LED ausschalten
    TurnOff,
    /// Zeilenende bzw. neutrales Token - keine Aktion, keine Antwort
    Ignore,
    /// Unbekanntes Byte (nur im UART-Stream)
    Unknown(u8),
}

impl Command {
    /// Zielzustand eines erkannten Kommandos, `None` für Ignore/Unknown
    pub fn target_state(self) -> Option<OutputState> {
        match self {
            Command::TurnOn => Some(OutputState::On),
            Command::TurnOff => Some(OutputState::Off),
            Command::Ignore | Command::Unknown(_) => None,
        }
    }
}

/// Ausgehende Antwort-Tokens (nur UART-Variante)
///
/// Jede Antwort wird als eigene Zeile gesendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Einmaliges Banner nach der Initialisierung
    Ready,
    LedOn,
    LedOff,
    UnknownCommand,
}

impl Response {
    /// Wire-Darstellung ohne Zeilenende
    pub fn as_str(self) -> &'static str {
        match self {
            Response::Ready => "ESP32_READY_UART2",
            Response::LedOn => "OK:LED_ON",
            Response::LedOff => "OK:LED_OFF",
            Response::UnknownCommand => "ERROR:UNKNOWN_COMMAND",
        }
    }

    /// Bestätigung für einen erreichten Zustand
    pub fn ack(state: OutputState) -> Self {
        match state {
            OutputState::On => Response::LedOn,
            OutputState::Off => Response::LedOff,
        }
    }
}

/// Lokale Diagnose-Meldung (Debug-Log, beide Varianten)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    LedOn,
    LedOff,
    UnknownCommand(u8),
}

impl Diagnostic {
    /// Feste Meldung ohne das Byte bei `UnknownCommand`
    pub fn message(self) -> &'static str {
        match self {
            Diagnostic::LedOn => "LED ON",
            Diagnostic::LedOff => "LED OFF",
            Diagnostic::UnknownCommand(_) => "Unknown command",
        }
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Diagnostic::UnknownCommand(byte) => {
                write!(f, "Unknown command: '{}' (0x{:02X})", byte as char, byte)
            }
            other => f.write_str(other.message()),
        }
    }
}

/// Inhalt einer I2C-Schreibtransaktion
///
/// Es wird nur das erste Byte ausgewertet, `len` zählt alle empfangenen Bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusMessage {
    first: Option<u8>,
    len: usize,
}

impl BusMessage {
    /// Nachricht ohne Daten (Adress-Write ohne Payload)
    pub const fn empty() -> Self {
        Self { first: None, len: 0 }
    }

    /// Nachricht mit genau einem Byte
    pub const fn byte(value: u8) -> Self {
        Self {
            first: Some(value),
            len: 1,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            first: bytes.first().copied(),
            len: bytes.len(),
        }
    }

    pub fn first(&self) -> Option<u8> {
        self.first
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for OutputState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            OutputState::Off => defmt::write!(fmt, "Off"),
            OutputState::On => defmt::write!(fmt, "On"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::TurnOn => defmt::write!(fmt, "TurnOn"),
            Command::TurnOff => defmt::write!(fmt, "TurnOff"),
            Command::Ignore => defmt::write!(fmt, "Ignore"),
            Command::Unknown(byte) => defmt::write!(fmt, "Unknown(0x{=u8:X})", byte),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Response {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Diagnostic {
    fn format(&self, fmt: defmt::Formatter) {
        match *self {
            Diagnostic::UnknownCommand(byte) => {
                defmt::write!(
                    fmt,
                    "Unknown command: '{=char}' (0x{=u8:X})",
                    byte as char,
                    byte
                )
            }
            other => defmt::write!(fmt, "{=str}", other.message()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusMessage {
    fn format(&self, fmt: defmt::Formatter) {
        match self.first {
            Some(byte) => defmt::write!(fmt, "BusMessage {{ first: {}, len: {} }}", byte, self.len),
            None => defmt::write!(fmt, "BusMessage {{ empty }}"),
        }
    }
}
