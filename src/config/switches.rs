use serde::Serialize;

/// Boolean valued context configurations.
///
/// When set to true things related to the identifier are enabled.
#[derive(Clone, Debug, Serialize)]
pub struct Switches {
    /// Propagate the consequences of unit clauses to a fixed point on entry to a search node.
    pub unit_propagation: bool,

    /// Assign atoms which occur with a single polarity, once per search node.
    pub pure_literals: bool,
}

impl Default for Switches {
    fn default() -> Self {
        Switches {
            unit_propagation: true,
            pure_literals: true,
        }
    }
}
