//! Dekodierung der Eingangs-Tokens
//!
//! Zwei Vokabulare: ASCII-Bytes vom UART-Stream und numerische
//! Ein-Byte-Nachrichten vom I2C-Bus.

use crate::types::{BusMessage, Command};

/// Zeilenende für ausgehende Antworten (wie `println` im Sketch)
pub const LINE_ENDING: &[u8] = b"\r\n";

/// Dekodiert ein Byte aus dem UART-Stream
///
/// `'1'` → TurnOn, `'0'` → TurnOff, `'\n'`/`'\r'` → Ignore, sonst Unknown.
///
/// ```
/// # use relay_core::{Command, decode_stream_byte};
/// assert_eq!(decode_stream_byte(b'1'), Command::TurnOn);
/// assert_eq!(decode_stream_byte(b'\r'), Command::Ignore);
/// assert_eq!(decode_stream_byte(b'x'), Command::Unknown(b'x'));
/// ```
pub fn decode_stream_byte(byte: u8) -> Command {
    match byte {
        b'1' => Command::TurnOn,
        b'0' => Command::TurnOff,
        b'\n' | b'\r' => Command::Ignore,
        other => Command::Unknown(other),
    }
}

/// Dekodiert eine I2C-Nachricht
///
/// Numerisch `1` → TurnOn, `0` → TurnOff. Alles andere, auch eine leere
/// Nachricht, wird stillschweigend ignoriert (kein Unknown auf dem Bus).
pub fn decode_bus_message(message: BusMessage) -> Command {
    match message.first() {
        Some(1) => Command::TurnOn,
        Some(0) => Command::TurnOff,
        _ => Command::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_vocabulary() {
        assert_eq!(decode_stream_byte(b'1'), Command::TurnOn);
        assert_eq!(decode_stream_byte(b'0'), Command::TurnOff);
        assert_eq!(decode_stream_byte(b'\n'), Command::Ignore);
        assert_eq!(decode_stream_byte(b'\r'), Command::Ignore);
    }

    #[test]
    fn test_stream_numeric_values_are_unknown() {
        // Auf dem UART zählen nur ASCII-Ziffern
        assert_eq!(decode_stream_byte(1), Command::Unknown(1));
        assert_eq!(decode_stream_byte(0), Command::Unknown(0));
        assert_eq!(decode_stream_byte(b'9'), Command::Unknown(b'9'));
    }

    #[test]
    fn test_bus_vocabulary() {
        assert_eq!(decode_bus_message(BusMessage::byte(1)), Command::TurnOn);
        assert_eq!(decode_bus_message(BusMessage::byte(0)), Command::TurnOff);
    }

    #[test]
    fn test_bus_ascii_digits_are_ignored() {
        assert_eq!(decode_bus_message(BusMessage::byte(b'1')), Command::Ignore);
        assert_eq!(decode_bus_message(BusMessage::byte(b'0')), Command::Ignore);
        assert_eq!(decode_bus_message(BusMessage::byte(0xFF)), Command::Ignore);
    }

    #[test]
    fn test_bus_empty_message_is_ignored() {
        assert_eq!(decode_bus_message(BusMessage::empty()), Command::Ignore);
    }

    #[test]
    fn test_bus_multi_byte_transaction_uses_first_byte() {
        // Eine einzige Transaktion mit Zusatzbytes, nicht zwei Writes
        let msg = BusMessage::from_bytes(&[0, 7, 7]);
        assert_eq!(decode_bus_message(msg), Command::TurnOff);
    }
}
