// LED Output-Treiber
//
// Implementiert den OutputDriver Trait aus relay-core für die
// beiden LED-Varianten: WS2812 über RMT und einfache GPIO-LED.

use relay_core::{OutputDriver, OutputError, OutputState};

/// Fehler bei der Initialisierung des LED-Treibers
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum LedInitError {
    /// RMT Peripheral konnte nicht konfiguriert werden
    Rmt,
}

// ============================================================================
// WS2812 über RMT (Default, DevKit On-Board LED)
// ============================================================================

#[cfg(not(feature = "gpio-led"))]
mod smart_led {
    use super::*;
    use esp_hal::Blocking;
    use esp_hal::rmt::Rmt;
    use esp_hal::time::Rate;
    use esp_hal_smartled::SmartLedsAdapter;
    use rgb::RGB8;
    use smart_leds_trait::SmartLedsWrite;

    // Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
    pub const LED_BUFFER_SIZE: usize = 25;

    /// RMT-Buffer Typ (erstellt mit smart_led_buffer!(1) Macro)
    pub type LedBuffer = [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE];

    /// LED-Ausgang über die RGB LED
    ///
    /// `On` zeigt die konfigurierte Farbe, `Off` schaltet alle Kanäle ab.
    ///
    /// Hinweis: Der Buffer muss 'static sein, daher wird er in main()
    /// über StaticCell erstellt und als Parameter übergeben.
    pub struct SmartLedOutput<'a> {
        led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
        on_color: RGB8,
    }

    impl<'a> SmartLedOutput<'a> {
        /// Erstellt einen neuen SmartLedOutput
        ///
        /// # Parameter
        /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
        /// - `rmt_peripheral`: RMT Peripheral
        /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
        /// - `buffer`: Buffer für LED-Daten
        /// - `on_color`: Farbe im Zustand `On`
        pub fn new(
            gpio8: esp_hal::peripherals::GPIO8<'a>,
            rmt_peripheral: esp_hal::peripherals::RMT<'a>,
            rmt_clock_mhz: u32,
            buffer: &'a mut LedBuffer,
            on_color: RGB8,
        ) -> Result<Self, LedInitError> {
            let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
                .map_err(|_| LedInitError::Rmt)?;

            let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

            Ok(Self { led, on_color })
        }

        fn color_for(&self, state: OutputState) -> RGB8 {
            match state {
                OutputState::On => self.on_color,
                OutputState::Off => RGB8::default(),
            }
        }
    }

    impl<'a> OutputDriver for SmartLedOutput<'a> {
        fn set(&mut self, state: OutputState) -> Result<(), OutputError> {
            let color = self.color_for(state);
            self.led
                .write([color].into_iter())
                .map_err(|_| OutputError::WriteFailed)
        }
    }
}

#[cfg(not(feature = "gpio-led"))]
pub use smart_led::{LED_BUFFER_SIZE, LedBuffer, SmartLedOutput};

// ============================================================================
// Einfache LED an einem GPIO (Feature `gpio-led`)
// ============================================================================

#[cfg(feature = "gpio-led")]
mod gpio_led {
    use super::*;
    use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

    /// LED-Ausgang über einen Push-Pull GPIO
    pub struct GpioLedOutput<'a> {
        pin: Output<'a>,
    }

    impl<'a> GpioLedOutput<'a> {
        /// Konfiguriert den Pin als Ausgang, Startpegel Low (LED aus)
        pub fn new(pin: impl OutputPin + 'a) -> Self {
            Self {
                pin: Output::new(pin, Level::Low, OutputConfig::default()),
            }
        }
    }

    impl<'a> OutputDriver for GpioLedOutput<'a> {
        fn set(&mut self, state: OutputState) -> Result<(), OutputError> {
            // GPIO-Schreiben kann nicht fehlschlagen
            self.pin.set_level(Level::from(state.is_on()));
            Ok(())
        }
    }
}

#[cfg(feature = "gpio-led")]
pub use gpio_led::GpioLedOutput;

/// LED-Treiber der aktuellen Build-Variante
#[cfg(not(feature = "gpio-led"))]
pub type StatusLed = SmartLedOutput<'static>;

/// LED-Treiber der aktuellen Build-Variante
#[cfg(feature = "gpio-led")]
pub type StatusLed = GpioLedOutput<'static>;
