//! Integration Tests für den Command-Relay
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockOutputDriver und MockLink

use std::collections::VecDeque;

use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use relay_core::{
    BusMessage, BusSlot, ByteLink, Command, CommandRelay, Diagnostic, LinkError, OutputDriver,
    OutputError, OutputState, Response, announce_ready, serve_bus_message, serve_stream_byte,
};

// ============================================================================
// Mock Output Driver
// ============================================================================

#[derive(Default)]
pub struct MockOutputDriver {
    pub last_state: Option<OutputState>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockOutputDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputDriver for MockOutputDriver {
    fn set(&mut self, state: OutputState) -> Result<(), OutputError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(OutputError::WriteFailed);
        }

        self.last_state = Some(state);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Link (UART)
// ============================================================================

#[derive(Default)]
pub struct MockLink {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    pub fail_writes: bool,
}

impl MockLink {
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            rx: input.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Gesendete Zeilen ohne Zeilenende
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.tx.clone())
            .unwrap()
            .split_terminator("\r\n")
            .map(str::to_owned)
            .collect()
    }
}

impl ByteLink for MockLink {
    async fn read_byte(&mut self) -> Result<u8, LinkError> {
        self.rx.pop_front().ok_or(LinkError::Read)
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        if self.fail_writes {
            return Err(LinkError::Write);
        }
        self.tx.extend_from_slice(bytes);
        Ok(())
    }
}

fn started_relay() -> CommandRelay<MockOutputDriver> {
    let mut relay = CommandRelay::new(MockOutputDriver::new());
    relay.start().unwrap();
    relay
}

// ============================================================================
// Tests: Startup
// ============================================================================

#[test]
fn test_startup_state_is_off() {
    let relay = CommandRelay::new(MockOutputDriver::new());
    assert_eq!(relay.state(), OutputState::Off);
}

#[test]
fn test_start_writes_off_to_driver() {
    let relay = started_relay();
    assert_eq!(relay.state(), OutputState::Off);

    let driver = relay.into_driver();
    assert_eq!(driver.last_state, Some(OutputState::Off));
    assert_eq!(driver.write_count, 1);
}

#[test]
fn test_start_reports_driver_failure() {
    let mut driver = MockOutputDriver::new();
    driver.fail_next_write = true;
    let mut relay = CommandRelay::new(driver);

    assert_eq!(relay.start(), Err(OutputError::WriteFailed));
    assert_eq!(relay.state(), OutputState::Off);
}

// ============================================================================
// Tests: UART-Variante
// ============================================================================

#[test]
fn test_stream_on_off_newline() {
    let mut relay = started_relay();

    let on = relay.process_stream_byte(b'1');
    let off = relay.process_stream_byte(b'0');
    let newline = relay.process_stream_byte(b'\n');

    assert_eq!(relay.state(), OutputState::Off);
    assert_eq!(on.response, Some(Response::LedOn));
    assert_eq!(off.response, Some(Response::LedOff));
    assert_eq!(newline.command, Command::Ignore);
    assert_eq!(newline.response, None);
    assert_eq!(newline.diagnostic(), None);
}

#[test]
fn test_stream_unknown_byte() {
    let mut relay = started_relay();
    relay.process_stream_byte(b'1');

    let outcome = relay.process_stream_byte(b'9');

    assert_eq!(outcome.state, OutputState::On);
    assert_eq!(outcome.response, Some(Response::UnknownCommand));
    assert_eq!(outcome.diagnostic(), Some(Diagnostic::UnknownCommand(b'9')));
    assert_eq!(
        outcome.diagnostic().unwrap().to_string(),
        "Unknown command: '9' (0x39)"
    );
}

#[test]
fn test_turn_on_twice_acknowledges_twice() {
    let mut relay = started_relay();

    let first = relay.process_stream_byte(b'1');
    let second = relay.process_stream_byte(b'1');

    assert_eq!(second.state, OutputState::On);
    assert_eq!(first.response, Some(Response::LedOn));
    assert_eq!(second.response, Some(Response::LedOn));
    assert_eq!(second.diagnostic().unwrap().message(), "LED ON");
}

#[test]
fn test_final_state_follows_last_recognized_command() {
    let mut relay = started_relay();

    for &byte in b"1x\r0\n11?\r0z1\n\n" {
        relay.process_stream_byte(byte);
    }
    assert_eq!(relay.state(), OutputState::On);

    for &byte in b"0abc\r\n" {
        relay.process_stream_byte(byte);
    }
    assert_eq!(relay.state(), OutputState::Off);
}

#[test]
fn test_noise_never_touches_driver() {
    let mut relay = started_relay();

    for &byte in b"\r\nabc9\x00\xff" {
        relay.process_stream_byte(byte);
    }

    let driver = relay.into_driver();
    assert_eq!(driver.write_count, 1); // nur start()
}

#[test]
fn test_driver_failure_keeps_logical_state() {
    let mut driver = MockOutputDriver::new();
    driver.fail_next_write = true;
    let mut relay = CommandRelay::new(driver);

    let outcome = relay.process_stream_byte(b'1');
    assert_eq!(outcome.output, Err(OutputError::WriteFailed));
    assert_eq!(outcome.state, OutputState::On);
    assert_eq!(outcome.response, Some(Response::LedOn));

    // Nächster Schreibvorgang klappt wieder
    let outcome = relay.process_stream_byte(b'0');
    assert_eq!(outcome.output, Ok(()));
    assert_eq!(relay.into_driver().last_state, Some(OutputState::Off));
}

// ============================================================================
// Tests: UART-Session
// ============================================================================

#[test]
fn test_announce_ready_sends_banner_once() {
    let mut link = MockLink::default();
    block_on(announce_ready(&mut link)).unwrap();
    assert_eq!(link.tx, b"ESP32_READY_UART2\r\n");
}

#[test]
fn test_session_writes_ack_lines() {
    let mut relay = started_relay();
    let mut link = MockLink::with_input(b"10\n9");

    for _ in 0..4 {
        let exchange = block_on(serve_stream_byte(&mut relay, &mut link)).unwrap();
        assert_eq!(exchange.reply, Ok(()));
    }

    assert_eq!(relay.state(), OutputState::Off);
    assert_eq!(
        link.lines(),
        vec!["OK:LED_ON", "OK:LED_OFF", "ERROR:UNKNOWN_COMMAND"]
    );
}

#[test]
fn test_session_processes_one_byte_per_call() {
    let mut relay = started_relay();
    let mut link = MockLink::with_input(b"10");

    let exchange = block_on(serve_stream_byte(&mut relay, &mut link)).unwrap();
    assert_eq!(exchange.outcome.command, Command::TurnOn);
    assert_eq!(link.rx.len(), 1);
    assert_eq!(relay.state(), OutputState::On);
}

#[test]
fn test_session_reply_failure_keeps_transition() {
    let mut relay = started_relay();
    let mut link = MockLink::with_input(b"1");
    link.fail_writes = true;

    let exchange = block_on(serve_stream_byte(&mut relay, &mut link)).unwrap();
    assert_eq!(exchange.reply, Err(LinkError::Write));
    assert_eq!(exchange.outcome.state, OutputState::On);
    assert_eq!(relay.state(), OutputState::On);
}

#[test]
fn test_session_read_failure_is_returned() {
    let mut relay = started_relay();
    let mut link = MockLink::default();

    let result = block_on(serve_stream_byte(&mut relay, &mut link));
    assert_eq!(result, Err(LinkError::Read));
    assert_eq!(relay.state(), OutputState::Off);
}

// ============================================================================
// Tests: I2C-Variante
// ============================================================================

#[test]
fn test_bus_empty_message_has_no_effect() {
    let mut relay = started_relay();

    let outcome = relay.process_bus_message(BusMessage::empty());

    assert_eq!(outcome.state, OutputState::Off);
    assert_eq!(outcome.response, None);
    assert_eq!(outcome.diagnostic(), None);
    assert_eq!(relay.into_driver().write_count, 1);
}

#[test]
fn test_bus_on_then_off() {
    let mut relay = started_relay();

    let on = relay.process_bus_message(BusMessage::byte(1));
    let off = relay.process_bus_message(BusMessage::byte(0));

    assert_eq!(relay.state(), OutputState::Off);
    assert_eq!(on.response, None);
    assert_eq!(off.response, None);
    assert_eq!(on.diagnostic(), Some(Diagnostic::LedOn));
    assert_eq!(off.diagnostic(), Some(Diagnostic::LedOff));
}

#[test]
fn test_bus_invalid_value_is_silent() {
    let mut relay = started_relay();
    relay.process_bus_message(BusMessage::byte(1));

    let outcome = relay.process_bus_message(BusMessage::byte(7));

    assert_eq!(outcome.command, Command::Ignore);
    assert_eq!(outcome.state, OutputState::On);
    assert_eq!(outcome.diagnostic(), None);
}

#[test]
fn test_bus_session_through_slot() {
    let slot: BusSlot<NoopRawMutex> = BusSlot::new();
    let mut relay = started_relay();

    slot.offer(BusMessage::byte(1));
    let outcome = block_on(serve_bus_message(&mut relay, &slot));
    assert_eq!(outcome.state, OutputState::On);

    slot.offer(BusMessage::byte(0));
    let outcome = block_on(serve_bus_message(&mut relay, &slot));
    assert_eq!(outcome.state, OutputState::Off);
    assert!(!slot.is_pending());
}

#[test]
fn test_slot_keeps_only_newest_message() {
    let slot: BusSlot<NoopRawMutex> = BusSlot::new();
    let mut relay = started_relay();

    assert!(!slot.offer(BusMessage::byte(0)));
    assert!(slot.offer(BusMessage::byte(1)));

    let outcome = block_on(serve_bus_message(&mut relay, &slot));
    assert_eq!(outcome.state, OutputState::On);
    assert_eq!(slot.try_take(), None);
}

#[test]
fn test_bus_back_to_back_writes_last_one_wins() {
    let slot: BusSlot<NoopRawMutex> = BusSlot::new();
    let mut relay = started_relay();

    // Zwei Writes enden, bevor der Relay-Task läuft: je eine Nachricht
    slot.offer(BusMessage::from_bytes(&[1]));
    slot.offer(BusMessage::from_bytes(&[0]));

    let outcome = block_on(serve_bus_message(&mut relay, &slot));
    assert_eq!(outcome.command, Command::TurnOff);
    assert_eq!(relay.state(), OutputState::Off);
    assert!(!slot.is_pending());
}

#[test]
fn test_bus_invalid_write_after_command_keeps_state() {
    let slot: BusSlot<NoopRawMutex> = BusSlot::new();
    let mut relay = started_relay();

    slot.offer(BusMessage::from_bytes(&[1]));
    block_on(serve_bus_message(&mut relay, &slot));

    slot.offer(BusMessage::from_bytes(&[1]));
    slot.offer(BusMessage::from_bytes(&[42]));
    let outcome = block_on(serve_bus_message(&mut relay, &slot));

    assert_eq!(outcome.command, Command::Ignore);
    assert_eq!(relay.state(), OutputState::On);
}
