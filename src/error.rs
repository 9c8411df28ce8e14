use displaydoc::Display;

/// Configuration faults detected before the control loop starts.
#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum ConfigError {
    /// The crossfade step count must be greater than zero.
    ZeroFadeSteps,
    /// The mode list must contain at least one mode.
    EmptyModeList,
    /// The mode list does not fit into the mode registry.
    TooManyModes,
    /// The photocell on-threshold must be strictly below the off-threshold.
    InvalidThresholds,
    /// The double-click window must be greater than zero.
    ZeroClickWindow,
    /// The tick interval must not exceed a quarter of the double-click window.
    TickTooCoarse,
}
