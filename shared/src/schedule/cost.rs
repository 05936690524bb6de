/// Channel footprint and latency of a schedule, for callers budgeting a
/// shared channel across features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostReport {
    /// Boolean registers crossing the wire.
    pub wire_booleans: usize,
    /// Analog registers crossing the wire.
    pub wire_analogs: usize,
    /// Total channel bits consumed, counting each analog register at the
    /// channel's analog resolution.
    pub wire_bits: usize,
    /// Ticks of one full transmission cycle over all objects.
    pub cycle_ticks: u32,
    /// Worst-case ticks from a value changing to the remote side applying
    /// it, counting encode and decode conversions.
    pub full_sync_ticks: u32,
}
