//! Command Relay - Pure Business Logic
//!
//! Bildet Tokens auf den Ausgangszustand ab. Keine Hardware-Dependencies,
//! der Ausgang wird über den `OutputDriver` Trait angesprochen.

use crate::codec::{decode_bus_message, decode_stream_byte};
use crate::traits::{OutputDriver, OutputError};
use crate::types::{BusMessage, Command, Diagnostic, OutputState, Response};

/// Herkunft eines Tokens
///
/// Bestimmt ob eine Antwort auf den Rückkanal geht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Link {
    /// UART: Bestätigungen und Fehler gehen zurück an den Sender
    Stream,
    /// I2C-Slave: kein Rückkanal
    Bus,
}

/// Ergebnis der Verarbeitung eines Tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub command: Command,
    /// Zustand nach der Verarbeitung
    pub state: OutputState,
    /// Antwort für den Rückkanal (nur `Link::Stream`)
    pub response: Option<Response>,
    /// Ergebnis des Treiber-Aufrufs, `Ok` wenn nicht geschrieben wurde
    pub output: Result<(), OutputError>,
}

impl Outcome {
    /// Lokale Diagnose-Zeile für das Debug-Log
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self.command {
            Command::TurnOn => Some(Diagnostic::LedOn),
            Command::TurnOff => Some(Diagnostic::LedOff),
            Command::Unknown(byte) => Some(Diagnostic::UnknownCommand(byte)),
            Command::Ignore => None,
        }
    }
}

/// Command Relay
///
/// Besitzt den Ausgangszustand exklusiv. Der Zustand ändert sich nur
/// synchron durch ein erkanntes Kommando.
///
/// # Beispiele
///
/// ```
/// # use relay_core::{CommandRelay, OutputDriver, OutputError, OutputState};
/// struct Led(OutputState);
/// impl OutputDriver for Led {
///     fn set(&mut self, state: OutputState) -> Result<(), OutputError> {
///         self.0 = state;
///         Ok(())
///     }
/// }
///
/// let mut relay = CommandRelay::new(Led(OutputState::Off));
/// let outcome = relay.process_stream_byte(b'1');
/// assert_eq!(outcome.state, OutputState::On);
/// assert_eq!(outcome.response.map(|r| r.as_str()), Some("OK:LED_ON"));
/// ```
pub struct CommandRelay<D: OutputDriver> {
    driver: D,
    state: OutputState,
}

impl<D: OutputDriver> CommandRelay<D> {
    /// Erstellt einen Relay, logischer Zustand ist `Off`
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            state: OutputState::Off,
        }
    }

    /// Schreibt den Startzustand (`Off`) auf den Ausgang
    ///
    /// Muss vor dem ersten Token aufgerufen werden.
    pub fn start(&mut self) -> Result<(), OutputError> {
        self.state = OutputState::Off;
        self.driver.set(self.state)
    }

    pub fn state(&self) -> OutputState {
        self.state
    }

    /// Gibt den Treiber zurück
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Übergangsfunktion
    ///
    /// Erkannte Kommandos schreiben den Ausgang immer und werden immer
    /// bestätigt, auch wenn sich der Zustand nicht ändert.
    pub fn apply(&mut self, command: Command, link: Link) -> Outcome {
        let (output, response) = match command.target_state() {
            Some(target) => {
                self.state = target;
                (self.driver.set(target), Some(Response::ack(target)))
            }
            None => {
                let response = match command {
                    Command::Unknown(_) => Some(Response::UnknownCommand),
                    _ => None,
                };
                (Ok(()), response)
            }
        };

        Outcome {
            command,
            state: self.state,
            response: match link {
                Link::Stream => response,
                Link::Bus => None,
            },
            output,
        }
    }

    /// Verarbeitet genau ein Byte aus dem UART-Stream
    pub fn process_stream_byte(&mut self, byte: u8) -> Outcome {
        self.apply(decode_stream_byte(byte), Link::Stream)
    }

    /// Verarbeitet genau eine I2C-Nachricht
    pub fn process_bus_message(&mut self, message: BusMessage) -> Outcome {
        self.apply(decode_bus_message(message), Link::Bus)
    }
}
