use std::{fmt, fmt::Display, mem::size_of};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::op::SwitchOp;
use crate::utils::parse_non_negative;

/// Integer types a switch can store its state in.
pub trait SwitchState: num::PrimInt + num::Unsigned + fmt::Binary + fmt::Debug {}

impl<T> SwitchState for T where T: num::PrimInt + num::Unsigned + fmt::Binary + fmt::Debug {}

/// A mutable bitmask over a single unsigned integer.
///
/// Every argument is taken as anything that can be displayed and is
/// accepted only if it renders as plain decimal digits, so `5` and `"5"`
/// pass while `-1`, `1.5`, `"abc"` and `""` are rejected with
/// [`Error::InvalidArgument`]. Bit indices must also be below
/// [`BinarySwitch::width`].
///
/// Treats least significant bit as index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinarySwitch<T = u64> {
    state: T,
}

impl<T: SwitchState> BinarySwitch<T> {
    pub fn new() -> Self {
        Self { state: T::zero() }
    }

    /// Number of addressable bits.
    pub fn width() -> usize {
        size_of::<T>() * 8
    }

    /// Overwrites the state. Returns the new state.
    pub fn set_state<V: Display>(&mut self, value: V) -> Result<T> {
        let value: T =
            parse_non_negative(&value).map_err(|e| e.with_source(SwitchOp::SetState.as_ref()))?;
        self.state = value;
        trace!("set_state -> {:#b}", self.state);
        Ok(self.state)
    }

    pub fn state(&self) -> T {
        self.state
    }

    /// Base-2 rendering of the state, without prefix or leading zeros.
    pub fn binary(&self) -> String {
        format!("{:b}", self.state)
    }

    pub fn reset(&mut self) -> T {
        self.state = T::zero();
        trace!("reset");
        self.state
    }

    /// Sets bit `idx`. Returns the new state.
    pub fn on<I: Display>(&mut self, idx: I) -> Result<T> {
        self.apply_on(idx, SwitchOp::On)
    }

    /// Flips bit `idx` and returns the new state.
    ///
    /// This is an XOR, not a clear: calling it on a bit that is already off
    /// turns that bit on.
    pub fn off<I: Display>(&mut self, idx: I) -> Result<T> {
        self.apply_off(idx, SwitchOp::Off)
    }

    /// Applies [`BinarySwitch::on`] to every index in order and returns the
    /// final state.
    ///
    /// Stops at the first invalid index. Bits set by earlier indices stay set.
    pub fn batch_on<I>(&mut self, idxs: I) -> Result<T>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (n, idx) in idxs.into_iter().enumerate() {
            if let Err(e) = self.apply_on(idx, SwitchOp::BatchOn) {
                debug!("batch_on aborted at item {}", n);
                return Err(e);
            }
        }
        Ok(self.state)
    }

    /// Applies [`BinarySwitch::off`] (the toggle) to every index in order and
    /// returns the final state. Earlier toggles are kept if an index is invalid.
    pub fn batch_off<I>(&mut self, idxs: I) -> Result<T>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (n, idx) in idxs.into_iter().enumerate() {
            if let Err(e) = self.apply_off(idx, SwitchOp::BatchOff) {
                debug!("batch_off aborted at item {}", n);
                return Err(e);
            }
        }
        Ok(self.state)
    }

    /// Same as [`BinarySwitch::on`] but returns the switch for chaining.
    pub fn with_on<I: Display>(&mut self, idx: I) -> Result<&mut Self> {
        self.apply_on(idx, SwitchOp::On)?;
        Ok(self)
    }

    /// Same as [`BinarySwitch::off`] but returns the switch for chaining.
    pub fn with_off<I: Display>(&mut self, idx: I) -> Result<&mut Self> {
        self.apply_off(idx, SwitchOp::Off)?;
        Ok(self)
    }

    pub fn is_on<I: Display>(&self, idx: I) -> Result<bool> {
        let index = Self::bit_index(idx, SwitchOp::IsOn)?;
        Ok(self.state & Self::mask(index) != T::zero())
    }

    pub fn is_off<I: Display>(&self, idx: I) -> Result<bool> {
        let index = Self::bit_index(idx, SwitchOp::IsOff)?;
        Ok(self.state & Self::mask(index) == T::zero())
    }

    fn apply_on<I: Display>(&mut self, idx: I, op: SwitchOp) -> Result<T> {
        let index = Self::bit_index(idx, op)?;
        self.state = self.state | Self::mask(index);
        trace!("{} {} -> {:#b}", op.as_ref(), index, self.state);
        Ok(self.state)
    }

    fn apply_off<I: Display>(&mut self, idx: I, op: SwitchOp) -> Result<T> {
        let index = Self::bit_index(idx, op)?;
        self.state = self.state ^ Self::mask(index);
        trace!("{} {} -> {:#b}", op.as_ref(), index, self.state);
        Ok(self.state)
    }

    fn mask(index: usize) -> T {
        T::one() << index
    }

    fn bit_index<I: Display>(idx: I, op: SwitchOp) -> Result<usize> {
        let index: usize = parse_non_negative(&idx).map_err(|e| e.with_source(op.as_ref()))?;
        if index >= Self::width() {
            debug!("bit {} is past the {}-bit state", index, Self::width());
            return Err(Error::invalid_argument_with_source(
                idx.to_string(),
                op.as_ref().to_string(),
            ));
        }
        Ok(index)
    }
}

impl<T: SwitchState> Default for BinarySwitch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SwitchState> From<T> for BinarySwitch<T> {
    fn from(state: T) -> Self {
        Self { state }
    }
}

impl<T: SwitchState> fmt::Display for BinarySwitch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

impl<T: SwitchState> fmt::Binary for BinarySwitch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.state, f)
    }
}
