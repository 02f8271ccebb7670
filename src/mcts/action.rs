use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract actions enumerated at every expansion and at the root of a
/// decision. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Call,
    MinRaise,
    MaxRaise,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Fold, Action::Call, Action::MinRaise, Action::MaxRaise];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Fold => "fold",
            Action::Call => "call",
            Action::MinRaise => "min_raise",
            Action::MaxRaise => "max_raise",
        };
        f.write_str(name)
    }
}
