//! PCA9685 Register Definitions
//!
//! Based on the NXP PCA9685 datasheet (Rev. 4).

// ============================================================================
// I2C Address
// ============================================================================

/// Default I2C address of Adafruit-style motor HATs
pub const DEFAULT_ADDRESS: u8 = 0x60;

// ============================================================================
// Registers
// ============================================================================

/// Mode register 1 (restart, sleep, allcall)
pub const MODE1: u8 = 0x00;

/// Mode register 2 (output driver configuration)
pub const MODE2: u8 = 0x01;

/// PWM frequency prescaler (chip-wide, writable only while asleep)
pub const PRESCALE: u8 = 0xFE;

/// Channel 0 on-counter, low byte. Subsequent channels follow at
/// 4-byte strides; see [`channel_base`].
pub const LED0_ON_L: u8 = 0x06;
pub const LED0_ON_H: u8 = 0x07;
pub const LED0_OFF_L: u8 = 0x08;
pub const LED0_OFF_H: u8 = 0x09;

/// Broadcast registers affecting every channel at once
pub const ALL_LED_ON_L: u8 = 0xFA;
pub const ALL_LED_ON_H: u8 = 0xFB;
pub const ALL_LED_OFF_L: u8 = 0xFC;
pub const ALL_LED_OFF_H: u8 = 0xFD;

// ============================================================================
// Mode bits
// ============================================================================

/// MODE1: respond to the all-call address
pub const MODE1_ALLCALL: u8 = 0x01;

/// MODE1: low-power mode, oscillator off
pub const MODE1_SLEEP: u8 = 0x10;

/// MODE1: restart PWM channels after waking from sleep
pub const MODE1_RESTART: u8 = 0x80;

/// MODE2: totem-pole (not open-drain) outputs
pub const MODE2_OUTDRV: u8 = 0x04;

// ============================================================================
// PWM geometry
// ============================================================================

/// Internal oscillator frequency in Hz
pub const OSC_CLOCK_HZ: u32 = 25_000_000;

/// Ticks per PWM period (12-bit counters)
pub const PWM_TICKS: u16 = 4096;

/// Counter value with bit 12 set: full-on when written to the on-counter,
/// full-off when written to the off-counter
pub const FULL_SCALE: u16 = 4096;

/// Number of independent PWM channels
pub const CHANNEL_COUNT: u8 = 16;

/// First register of a channel's 4-register block (on-low, on-high,
/// off-low, off-high)
pub const fn channel_base(channel: u8) -> u8 {
    LED0_ON_L + 4 * channel
}

/// Prescale register value for a target PWM frequency
///
/// Computed as `floor(25 MHz / 4096 / freq - 1 + 0.05)` per the datasheet
/// recommendation, in `f64` so results match the reference implementation
/// bit-for-bit.
pub fn prescale_from_hz(freq_hz: u16) -> u8 {
    let mut ps = OSC_CLOCK_HZ as f64;
    ps /= PWM_TICKS as f64;
    ps /= f64::from(freq_hz);
    ps -= 1.0;
    libm::floor(ps + 0.05) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_prescale(freq_hz: u16) -> u8 {
        libm::floor(25_000_000.0 / 4096.0 / f64::from(freq_hz) - 1.0 + 0.05) as u8
    }

    #[test]
    fn test_prescale_known_values() {
        assert_eq!(prescale_from_hz(1600), 2);
        assert_eq!(prescale_from_hz(1000), 5);
        assert_eq!(prescale_from_hz(200), 29);
        assert_eq!(prescale_from_hz(60), 100);
        assert_eq!(prescale_from_hz(50), 121);
        assert_eq!(prescale_from_hz(40), 151);
    }

    #[test]
    fn test_prescale_matches_reference_over_operating_range() {
        for freq in 40..=1600u16 {
            assert_eq!(prescale_from_hz(freq), reference_prescale(freq), "freq={freq}");
        }
    }

    #[test]
    fn test_channel_base() {
        assert_eq!(channel_base(0), 0x06);
        assert_eq!(channel_base(1), 0x0A);
        assert_eq!(channel_base(8), 0x26);
        assert_eq!(channel_base(15), 0x42);
    }
}
