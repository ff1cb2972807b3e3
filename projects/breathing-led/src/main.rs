#![no_main]
#![no_std]

extern crate panic_halt;

use cortex_m_rt::entry;
use cortex_m_semihosting::hprintln;

use kl25z::delay;
use kl25z::tpm;
use kl25z::tpm::pwm::{Prescaler, Pwm};

/// Blue LED of the FRDM-KL25Z board, on TPM0 channel 1.
const LED: tpm::Pin = tpm::PTD1;

/// PWM period in timer ticks.
const PERIOD: u16 = 999;

/// Counter clock divisor.
const PRESCALER: Prescaler = Prescaler::Div16;

/// Duty ramp: step down by 250, wrap from fully-on back to 750.
const STEP: u16 = 250;
const WRAP: u16 = 750;

/// Time between brightness steps.
const STEP_MILLIS: u32 = 300;

#[entry]
fn main() -> ! {
    if cfg!(debug_assertions) {
        hprintln!("Hello! This is the breathing-led demo.").unwrap();
    }

    let mut pwm = Pwm::new(LED);

    // Compare value: larger means dimmer, 0 means fully on.
    let mut duty: u16 = 500;

    loop {
        // Reconfigure and restart the channel with the new duty value.
        pwm.set_frequency(PRESCALER, PERIOD);
        pwm.set_duty_cycle(duty);
        pwm.enable();

        delay::millis(STEP_MILLIS);

        duty = if duty == 0 { WRAP } else { duty - STEP };
    }
}
