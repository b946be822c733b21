//! Simon memory game firmware for the ATmega128
//!
//! `game` holds the state machine and is portable; `drivers` adapts
//! embedded-hal pins to the game's [`game::Panel`]; `hal` talks to the
//! ATmega128 registers and only exists on AVR targets.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod config;
pub mod drivers;
pub mod game;

#[cfg(target_arch = "avr")]
pub mod hal;
