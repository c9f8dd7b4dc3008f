// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use rgb::RGB8;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel) auf dem DevKit
pub const LED_GPIO_PIN: u8 = 8;

/// GPIO-Pin für eine einfache LED (Feature `gpio-led`)
pub const PLAIN_LED_GPIO_PIN: u8 = 2;

/// Helligkeits-Level für die LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// Farbe im Zustand "On" (gedimmtes Weiß)
pub const LED_ON_COLOR: RGB8 = RGB8 {
    r: LED_BRIGHTNESS,
    g: LED_BRIGHTNESS,
    b: LED_BRIGHTNESS,
};

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// UART Konfiguration
// ============================================================================

// Vom Build-Script geprüft und erzeugt:
// UART_BAUD_RATE (RELAY_UART_BAUD) und I2C_SLAVE_ADDRESS (RELAY_I2C_ADDRESS)
include!(concat!(env!("OUT_DIR"), "/relay_env.rs"));

/// UART1 RX-Pin (empfängt vom Pi)
pub const UART_RX_PIN: u8 = 4;

/// UART1 TX-Pin (sendet zum Pi)
pub const UART_TX_PIN: u8 = 5;

// ============================================================================
// I2C Konfiguration
// ============================================================================

/// I2C SDA-Pin
pub const I2C_SDA_PIN: u8 = 6;

/// I2C SCL-Pin
pub const I2C_SCL_PIN: u8 = 7;

// ============================================================================
// Timing
// ============================================================================

/// Pause nach jedem verarbeiteten Token (Entprellung / Stromsparen)
pub const POLL_INTERVAL_MS: u64 = 10;

/// Wartezeit nach dem Start bevor der Boot-Blink beginnt
pub const STARTUP_DELAY_MS: u64 = 1000;

/// Anzahl Blinks als Boot-Bestätigung
pub const BOOT_BLINK_COUNT: usize = 3;

/// Dauer einer Blink-Phase (an bzw. aus) in Millisekunden
pub const BOOT_BLINK_MS: u64 = 150;
