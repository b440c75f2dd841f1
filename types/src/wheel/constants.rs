/// Degrees in one full turn of any ring.
pub const FULL_TURN_DEGREES: i64 = 360;

/// Starting balance for a fresh table session.
pub const STARTING_BALANCE: u64 = 2_000;

/// Minimum full revolutions a ring makes before landing.
pub const MIN_FULL_TURNS: u32 = 4;

/// Maximum full revolutions a ring makes before landing (inclusive).
pub const MAX_FULL_TURNS: u32 = 6;

/// Wheel-turning duration between choosing a target and resolving it.
pub const SPIN_DURATION_MS: u64 = 4_500;

/// Pause between a bonus wedge resolving and the next ring starting.
pub const CASCADE_DELAY_MS: u64 = 1_200;

/// Pause between a terminal settlement and returning to idle.
pub const SETTLE_DELAY_MS: u64 = 3_000;

/// Outer logo payouts (excludes the returned stake).
pub const LOGO1_MULTIPLIER: u64 = 25;
pub const LOGO2_MULTIPLIER: u64 = 50;

/// Outer ring: 60 wedges, 6° each.
pub const OUTER_SEQUENCE: [&str; 60] = [
    "BONUS", "1", "2", "1", "5", "1", "2", "10", "1", "2", //
    "1", "5", "2", "1", "Logo1", "1", "2", "1", "5", "1", //
    "2", "10", "1", "2", "1", "5", "2", "1", "2", "1", //
    "Logo2", "1", "5", "2", "1", "10", "1", "2", "1", "5", //
    "1", "2", "1", "Logo1", "1", "2", "1", "2", "5", "1", //
    "2", "1", "10", "1", "2", "1", "5", "1", "2", "1", //
];

/// Middle ring: 30 wedges, 12° each. Reached only through an outer BONUS.
pub const MIDDLE_SEQUENCE: [&str; 30] = [
    "BONUS", "30", "50", "60", "50", "40", "50", "60", "50", "30", //
    "75", "40", "50", "60", "40", "50", "40", "60", "50", "40", //
    "75", "30", "50", "60", "40", "50", "40", "60", "50", "30", //
];

/// Inner ring: 30 wedges, 12° each. No BONUS wedge, so the cascade stops here.
pub const INNER_SEQUENCE: [&str; 30] = [
    "250", "75", "100", "125", "100", "75", "100", "150", "75", "100", //
    "125", "100", "75", "125", "100", "200", "75", "100", "125", "100", //
    "75", "100", "150", "75", "100", "125", "75", "100", "125", "75", //
];

/// Label of the wedge that continues the bonus cascade.
pub const BONUS_LABEL: &str = "BONUS";
