pub mod oscillator;
pub mod structural;
