/*!
Configuration of a context.

All configuration for a context is contained within the context, set when the context is built from a [Config].

The heuristics of a solve are independent [switches](Switches).
With every switch off a solve falls back to plain backtracking search, and any combination of switches preserves the verdict of a solve --- though rarely the work taken to reach it.
*/

mod switches;
pub use switches::Switches;

use serde::Serialize;

/// The primary configuration structure.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Config {
    /// Boolean valued configurations.
    pub switches: Switches,
}
