// Boot Blink - Sichtbare Bestätigung nach dem Start
use defmt::{error, info};
use embassy_time::{Duration, Timer};

use crate::config::{BOOT_BLINK_COUNT, BOOT_BLINK_MS};
use crate::{OutputDriver, OutputState};

/// Lässt die LED `count` mal blinken und endet im Zustand `Off`
///
/// Läuft vor dem Relay, danach übernimmt der Relay den Treiber.
///
/// # Parameter
/// - `led`: LED-Treiber (Hardware oder Mock)
/// - `count`: Anzahl Blinks
/// - `phase`: Dauer der An- und der Aus-Phase
pub async fn boot_blink_logic<D: OutputDriver>(led: &mut D, count: usize, phase: Duration) {
    for _ in 0..count {
        for state in [OutputState::On, OutputState::Off] {
            if let Err(e) = led.set(state) {
                error!("Boot blink: Failed to write LED: {}", e);
            }
            Timer::after(phase).await;
        }
    }
}

/// Boot-Blink mit den Werten aus config.rs
pub async fn boot_blink<D: OutputDriver>(led: &mut D) {
    info!("Boot blink ({}x)", BOOT_BLINK_COUNT);
    boot_blink_logic(led, BOOT_BLINK_COUNT, Duration::from_millis(BOOT_BLINK_MS)).await;
}
