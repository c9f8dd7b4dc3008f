// I2C Slave Listener
//
// esp-hal 1.0 bringt nur einen I2C-Master-Treiber mit. Der Master-Treiber
// übernimmt Takt, Pins und Reset des Peripherals, danach wird I2C0 über
// die Register in den Slave-Modus geschaltet.
//
// Bus-Kontext ist der I2C0-Interrupt: jede STOP-Bedingung löst
// TRANS_COMPLETE aus, der Handler leert die RX-FIFO und legt genau eine
// Nachricht pro Transaktion im Slot ab.

use defmt::warn;
use esp_hal::Blocking;
use esp_hal::i2c::master::{Config, I2c};
use esp_hal::interrupt::Priority;
use esp_hal::peripherals::{GPIO6, GPIO7, I2C0};
use relay_core::{BusMessage, BusSlot};

use crate::BusMessageSlot;

/// Tiefe der RX-FIFO von I2C0 (ESP32-C6)
const RX_FIFO_DEPTH: usize = 32;

/// Übergabe vom Interrupt-Handler an den Relay-Task
static RECEIVED: BusMessageSlot = BusSlot::new();

/// Fehler bei der Initialisierung des I2C-Slaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum I2cSlaveError {
    /// Adresse liegt außerhalb von 7 Bit
    Address,
    /// I2C Peripheral konnte nicht konfiguriert werden
    Config,
}

/// I2C0 im Slave-Modus
///
/// Jede abgeschlossene Schreibtransaktion des Masters wird zu genau
/// einer `BusMessage` in [`I2cSlaveListener::messages`].
pub struct I2cSlaveListener<'d> {
    // Hält Takt, Pin-Zuordnung und Interrupt-Bindung am Leben
    _bus: I2c<'d, Blocking>,
    address: u8,
}

impl<'d> I2cSlaveListener<'d> {
    /// Konfiguriert I2C0 als Slave mit 7-Bit Adresse
    ///
    /// # Parameter
    /// - `i2c`: I2C0 Peripheral
    /// - `sda`: GPIO6 (SDA)
    /// - `scl`: GPIO7 (SCL)
    /// - `address`: 7-Bit Slave-Adresse (z.B. 0x08)
    pub fn new(
        i2c: I2C0<'d>,
        sda: GPIO6<'d>,
        scl: GPIO7<'d>,
        address: u8,
    ) -> Result<Self, I2cSlaveError> {
        if address > 0x7F {
            return Err(I2cSlaveError::Address);
        }

        let mut bus = I2c::new(i2c, Config::default())
            .map_err(|_| I2cSlaveError::Config)?
            .with_sda(sda)
            .with_scl(scl);

        let regs = I2C0::regs();
        critical_section::with(|_| {
            // Slave-Modus und Adresse
            regs.ctr().modify(|_, w| w.ms_mode().clear_bit());
            // SAFETY: address <= 0x7F wurde oben geprüft, passt in das 15-Bit Feld
            regs.slave_addr()
                .write(|w| unsafe { w.slave_addr().bits(address as u16) });

            // FIFOs zurücksetzen
            regs.fifo_conf()
                .modify(|_, w| w.rx_fifo_rst().set_bit().tx_fifo_rst().set_bit());
            regs.fifo_conf()
                .modify(|_, w| w.rx_fifo_rst().clear_bit().tx_fifo_rst().clear_bit());

            // Alte Interrupt-Flags löschen
            // SAFETY: INT_CLR ist write-1-to-clear, jedes gesetzte Bit löscht nur ein Flag
            regs.int_clr().write(|w| unsafe { w.bits(u32::MAX) });

            // Nur TRANS_COMPLETE erzeugt einen Interrupt
            regs.int_ena().write(|w| w.trans_complete().set_bit());

            // Konfiguration in die I2C-Taktdomäne übernehmen
            regs.ctr().modify(|_, w| w.conf_upgate().set_bit());
        });

        bus.set_interrupt_handler(i2c0_handler);

        Ok(Self { _bus: bus, address })
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Slot mit der jeweils neuesten, noch nicht verarbeiteten Transaktion
    pub fn messages(&self) -> &'static BusMessageSlot {
        &RECEIVED
    }
}

/// Liest die RX-FIFO einer abgeschlossenen Transaktion
///
/// Das TRANS_COMPLETE-Flag wird vor dem Lesen des Füllstands gelöscht.
/// Endet währenddessen eine weitere Transaktion, setzt sie das Flag neu
/// und der Handler läuft erneut.
fn take_transaction() -> Option<BusMessage> {
    let regs = I2C0::regs();

    critical_section::with(|_| {
        if regs.int_raw().read().trans_complete().bit_is_clear() {
            return None;
        }
        regs.int_clr().write(|w| w.trans_complete().clear_bit_by_one());

        let pending = (regs.sr().read().rxfifo_cnt().bits() as usize).min(RX_FIFO_DEPTH);
        let mut buffer = [0u8; RX_FIFO_DEPTH];
        for byte in buffer.iter_mut().take(pending) {
            *byte = regs.data().read().fifo_rdata().bits();
        }

        Some(BusMessage::from_bytes(&buffer[..pending]))
    })
}

#[esp_hal::handler(priority = Priority::Priority1)]
fn i2c0_handler() {
    if let Some(message) = take_transaction() {
        if RECEIVED.offer(message) {
            warn!("I2C: Previous message not processed yet, overwritten");
        }
    }
}
