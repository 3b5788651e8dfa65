pub const AGING_CMD: &str = "aging";

/// Collection path the aging-laser QC task publishes under.
pub const DEFAULT_COLLECTION: &str = "FT0/AgingLaser";

/// Ordinary detector channels are 0..DETECTOR_CHANNELS; the four ids
/// after that are the reference channels, recorded per laser peak.
pub const DETECTOR_CHANNELS: usize = 208;
pub const REFERENCE_CHANNELS: std::ops::RangeInclusive<usize> = 208..=211;
pub const PEAKS: std::ops::RangeInclusive<usize> = 1..=2;
pub const ADCS: std::ops::RangeInclusive<usize> = 0..=1;

/// First retained bin in amplitude mode: cuts out the low-amplitude
/// bins (8 ADC channels and below).
pub const AMP_LOW_BIN: usize = 110;
pub const TIME_LOW_BIN: usize = 1;
