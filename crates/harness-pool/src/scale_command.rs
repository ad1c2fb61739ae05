use serde::{Deserialize, Serialize};

/// A pool resize request produced by a worker and applied once by the
/// controller.
///
/// Wire format is one JSON object per stdout line, tagged by `command`:
/// `{"command":"scaleUp","amount":3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ScaleCommand {
    /// Fork `amount` additional workers.
    ScaleUp { amount: u32 },
    /// Kill the `amount` oldest workers, or the whole pool when fewer
    /// than one worker would remain.
    ScaleDown { amount: u32 },
}

impl ScaleCommand {
    pub fn amount(&self) -> u32 {
        match self {
            ScaleCommand::ScaleUp { amount } | ScaleCommand::ScaleDown { amount } => *amount,
        }
    }
}
