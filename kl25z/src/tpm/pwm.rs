//! PWM signal generation on a TPM channel.
//!
//! Example usage:
//!
//! ```ignore
//! let config = pwm::Config {
//!     prescaler: pwm::Prescaler::Div16,
//!     period: 999,
//! };
//!
//! let mut channel = config.make(tpm::PTD1);
//! channel.set_duty_cycle(750);
//! channel.enable();
//! ```

use super::pac;
use super::pin::Pin;

/// Counter clock divisor: divides the TPM clock by `2^n`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prescaler {
    Div1 = 0,
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Div64 = 6,
    Div128 = 7,
}

impl Prescaler {
    /// Division factor.
    #[inline]
    pub fn divisor(self) -> u32 {
        1 << self as u32
    }
}

/// PWM timing configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub prescaler: Prescaler,
    pub period: u16,
}

impl Config {
    /// Claim the pin and apply this timing to its channel.
    #[inline]
    pub fn make(self, pin: Pin) -> Pwm {
        let mut pwm = Pwm::new(pin);
        pwm.set_frequency(self.prescaler, self.period);
        pwm
    }
}

/// PWM channel on one of the wired output [pins][Pin].
///
/// Construction claims the pin: the clock gates of the TPM instance and of
/// the pin's port are opened, and the pin mux is switched over to the
/// timer. The channel starts out disabled; set a frequency and a duty
/// cycle, then [enable][Pwm::enable] it.
pub struct Pwm {
    regs: pac::TpmRegisters,
}

impl Pwm {
    /// Claim the pin and bind the channel registers.
    #[inline]
    pub fn new(pin: Pin) -> Self {
        let fields = pin.decode();
        let regs = pac::TpmRegisters::bind(fields);
        pac::enable_tpm_clock(fields.instance);
        pac::enable_port_clock(fields.port);
        regs.select_mux(fields.mux);
        Self { regs }
    }

    /// Set the PWM frequency to `TPM_CLOCK / ((period + 1) * prescaler)`.
    ///
    /// Stops the counter; the prescaler must never change while counting.
    /// Call [enable][Pwm::enable] afterwards to restart the signal.
    #[inline]
    pub fn set_frequency(&mut self, prescaler: Prescaler, period: u16) {
        self.disable();
        self.regs.write_prescaler(prescaler as u8);
        self.regs.write_period(period);
    }

    /// Set the compare value controlling the duty cycle.
    ///
    /// The realized duty is `100 - compare / (period + 1) * 100` percent:
    /// a larger compare value gives a smaller duty. Stops the counter;
    /// call [enable][Pwm::enable] afterwards to restart the signal.
    #[inline]
    pub fn set_duty_cycle(&mut self, compare: u16) {
        self.disable();
        self.regs.write_compare(compare);
    }

    /// Start generating the signal on the output pin.
    #[inline]
    pub fn enable(&mut self) {
        self.regs.select_pwm_mode();
        self.regs.start_counter();
    }

    /// Stop the counter, freezing the output.
    #[inline]
    pub fn disable(&mut self) {
        self.regs.stop_counter();
    }

    #[inline]
    pub fn read_compare(&self) -> u16 {
        self.regs.read_compare()
    }

    #[inline]
    pub fn read_period(&self) -> u16 {
        self.regs.read_period()
    }

    #[inline]
    pub fn read_counter(&self) -> u16 {
        self.regs.read_counter()
    }
}

impl embedded_hal::PwmPin for Pwm {
    type Duty = u16;

    #[inline]
    fn disable(&mut self) {
        Pwm::disable(self);
    }

    #[inline]
    fn enable(&mut self) {
        Pwm::enable(self);
    }

    #[inline]
    fn get_duty(&self) -> u16 {
        self.read_compare()
    }

    #[inline]
    fn get_max_duty(&self) -> u16 {
        self.read_period()
    }

    #[inline]
    fn set_duty(&mut self, duty: u16) {
        self.set_duty_cycle(duty);
    }
}

/// Generated PWM frequency in Hertz.
#[inline]
pub fn frequency(source_hz: u32, prescaler: Prescaler, period: u16) -> u32 {
    source_hz / ((period as u32 + 1) * prescaler.divisor())
}

/// Realized duty cycle in percent.
///
/// Saturates at 0 when the compare value exceeds the period.
#[inline]
pub fn duty_percent(compare: u16, period: u16) -> u32 {
    let cycle = period as u32 + 1;
    100u32.saturating_sub(compare as u32 * 100 / cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;

    #[test]
    fn prescaler_covers_all_divisors() {
        let all = [
            Prescaler::Div1,
            Prescaler::Div2,
            Prescaler::Div4,
            Prescaler::Div8,
            Prescaler::Div16,
            Prescaler::Div32,
            Prescaler::Div64,
            Prescaler::Div128,
        ];
        for (n, p) in all.iter().enumerate() {
            assert_eq!(*p as u8, n as u8);
            assert_eq!(p.divisor(), 1 << n);
        }
    }

    #[test]
    fn frequency_formula() {
        assert_eq!(
            frequency(clock::TPM_CLOCK, Prescaler::Div16, 999),
            clock::TPM_CLOCK / 16_000
        );
        assert_eq!(frequency(1_000_000, Prescaler::Div1, 999), 1_000);
    }

    #[test]
    fn duty_is_inverted() {
        assert_eq!(duty_percent(750, 999), 25);
        assert_eq!(duty_percent(500, 999), 50);
        assert_eq!(duty_percent(0, 999), 100);
        assert_eq!(duty_percent(1000, 999), 0);
    }

    #[test]
    fn duty_saturates_past_the_period() {
        assert_eq!(duty_percent(2000, 999), 0);
        assert_eq!(duty_percent(u16::MAX, 0), 0);
    }

    #[test]
    fn breathing_ramp_revisits_its_start() {
        // The demo loop steps the compare value 500, 250, 0, 750, 500, ...
        let mut compare: u16 = 500;
        let mut levels = [0u32; 5];
        for slot in levels.iter_mut() {
            *slot = duty_percent(compare, 999);
            compare = if compare == 0 { 750 } else { compare - 250 };
        }
        assert_eq!(levels, [50, 75, 100, 25, 50]);
    }
}
