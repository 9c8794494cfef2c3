#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

mod diagnostics;
mod driver;
mod error;
mod frame;
mod register;
mod utils;

pub use diagnostics::RegisterDump;
pub use driver::{ANGLE_MAX, As5x47};
pub use error::Error;
pub use frame::{CommandFrame, ReadDataFrame, WriteDataFrame};
pub use register::{
    CompensatedAngle, CordicMagnitude, DiagnosticsAgc, ErrorFlags, Programming, Register,
    Settings1, Settings2, UncompensatedAngle, ZeroPositionLsb, ZeroPositionMsb,
};
