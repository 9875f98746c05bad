//! Player progression tables: XP thresholds, level titles, craft bonuses.
//!
//! XP thresholds are absolute values against the lifetime XP total, not
//! per-level deltas. `XP_REQUIREMENTS[level]` is the total XP needed to
//! advance past `level`; the displayed bar therefore never resets. This
//! is the established display contract of the game and is preserved
//! deliberately.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum player level.
pub const MAX_PLAYER_LEVEL: u32 = 10;

/// Lifetime-XP thresholds, indexed by current level.
///
/// Index 0 is the pre-game placeholder; a level-N player advances when
/// lifetime XP reaches `XP_REQUIREMENTS[N]`.
pub const XP_REQUIREMENTS: [u64; 10] = [
    0,      // Level 1 (starting)
    500,    // Level 2
    1500,   // Level 3
    3000,   // Level 4
    6000,   // Level 5
    10000,  // Level 6
    15000,  // Level 7
    22000,  // Level 8
    30000,  // Level 9
    40000,  // Level 10
];

/// Display title per level.
pub const LEVEL_TITLES: [&str; 10] = [
    "Novice Smith",        // Level 1
    "Apprentice",          // Level 2
    "Journeyman",          // Level 3
    "Craftsman",           // Level 4
    "Expert Forger",       // Level 5
    "Master Smith",        // Level 6
    "Grandmaster",         // Level 7
    "Legendary Forger",    // Level 8
    "Cosmic Artisan",      // Level 9
    "Alien Armory Master", // Level 10
];

/// One-time XP bonus for the first craft of each distinct output.
pub const FIRST_CRAFT_BONUS_XP: u64 = 50;

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// The lifetime-XP threshold to advance past `level`.
///
/// Returns `None` at or beyond [`MAX_PLAYER_LEVEL`] (the UI shows 0 there).
pub fn xp_threshold(level: u32) -> Option<u64> {
    if level >= MAX_PLAYER_LEVEL {
        return None;
    }
    let index = usize::try_from(level).ok()?;
    XP_REQUIREMENTS.get(index).copied()
}

/// Display title for a level, clamped to the table bounds.
pub fn title_for(level: u32) -> &'static str {
    let index = usize::try_from(level.clamp(1, MAX_PLAYER_LEVEL)).unwrap_or(1);
    let index = index.saturating_sub(1);
    LEVEL_TITLES.get(index).copied().unwrap_or("Novice Smith")
}
