use std::fmt::Display;

use binary_switch::{BinarySwitch, Result, SwitchOp};

/// Arguments every validating operation must reject.
pub const INVALID_ARGS: [&str; 4] = ["-1", "abc", "1.5", ""];

/// Runs `op` on `switch` with a single argument, discarding the value.
pub fn run_op<A: Display>(switch: &mut BinarySwitch, op: SwitchOp, arg: A) -> Result<()> {
    match op {
        SwitchOp::SetState => switch.set_state(arg).map(|_| ()),
        SwitchOp::On => switch.on(arg).map(|_| ()),
        SwitchOp::Off => switch.off(arg).map(|_| ()),
        SwitchOp::BatchOn => switch.batch_on([arg]).map(|_| ()),
        SwitchOp::BatchOff => switch.batch_off([arg]).map(|_| ()),
        SwitchOp::IsOn => switch.is_on(arg).map(|_| ()),
        SwitchOp::IsOff => switch.is_off(arg).map(|_| ()),
    }
}

pub fn switch_with_state(state: u64) -> BinarySwitch {
    let mut switch: BinarySwitch = BinarySwitch::new();
    switch.set_state(state).unwrap();
    switch
}
