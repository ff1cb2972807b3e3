#![no_main]
#![no_std]

extern crate panic_halt;

use cortex_m_rt::entry;
use cortex_m_semihosting::hprintln;

use kl25z::delay;
use kl25z::tpm;
use kl25z::tpm::pwm;

#[entry]
fn main() -> ! {
    if cfg!(debug_assertions) {
        hprintln!("Hello! This is the PWM example.").unwrap();
    }

    // Set the pwm frequency.
    let config = pwm::Config {
        prescaler: pwm::Prescaler::Div16,
        period: 999,
    };

    // Blue LED at quarter brightness.
    let mut channel = config.make(tpm::PTD1);

    channel.set_duty_cycle(750);
    channel.enable();

    loop {
        delay::millis(1);
    }
}
