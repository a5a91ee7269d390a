use strum_macros::{AsRefStr, EnumIter};

/// Operations that take a numeric argument and validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SwitchOp {
    SetState,
    On,
    Off,
    BatchOn,
    BatchOff,
    IsOn,
    IsOff,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names() {
        let ops: Vec<SwitchOp> = SwitchOp::iter().collect();
        let names: Vec<&str> = ops.iter().map(|op| op.as_ref()).collect();
        assert_eq!(
            vec!["set_state", "on", "off", "batch_on", "batch_off", "is_on", "is_off"],
            names
        );
    }
}
