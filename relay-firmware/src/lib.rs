// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von relay-core
pub use relay_core::{
    BusMessage, BusSlot, ByteLink, Command, CommandRelay, Diagnostic, LinkError, Outcome,
    OutputDriver, OutputError, OutputState, Response, announce_ready, serve_bus_message,
    serve_stream_byte,
};

// Embassy Mutex-Typ
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

// ============================================================================
// Type-Aliase für Übergabe-Typen
// ============================================================================

/// Single-Slot für I2C-Nachrichten (I2C0-Interrupt → Relay Task)
/// CriticalSectionRawMutex: Zugriff aus Interrupt und Task
pub type BusMessageSlot = BusSlot<CriticalSectionRawMutex>;

/// Relay mit dem LED-Treiber der aktuellen Build-Variante
pub type StatusRelay = CommandRelay<hal::StatusLed>;
