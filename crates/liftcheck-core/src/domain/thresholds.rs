//! Exercise-science threshold registry.
//!
//! Every numeric limit the rule engine enforces is declared here exactly
//! once. Rules read these constants and tables; they never hard-code a
//! number of their own.
//!
//! # Changing a limit
//!
//! 1. Edit the constant or the registry entry below
//! 2. Rules and `liftcheck rules` output pick it up

use crate::domain::rules::RuleTag;
use crate::domain::value_objects::ExperienceLevel;

// ── Deload ───────────────────────────────────────────────────────────────────

/// Programs at least this many weeks long must contain a deload week.
pub const DELOAD_REQUIRED_MIN_WEEKS: u32 = 4;

/// Lowest accepted deload volume multiplier (inclusive).
pub const DELOAD_VOLUME_MIN: f64 = 0.40;

/// Highest accepted deload volume multiplier (inclusive).
pub const DELOAD_VOLUME_MAX: f64 = 0.65;

/// Whether a deload week's multiplier lies in the accepted band.
///
/// NaN is never in range.
pub fn deload_volume_in_range(multiplier: f64) -> bool {
    (DELOAD_VOLUME_MIN..=DELOAD_VOLUME_MAX).contains(&multiplier)
}

// ── Volume (MRV) ─────────────────────────────────────────────────────────────

/// MRV applied when the experience level is unknown.
pub const DEFAULT_MRV: u32 = 16;

/// Maximum recoverable volume for one experience level.
#[derive(Debug, Clone, Copy)]
pub struct MrvDef {
    pub level: ExperienceLevel,
    /// Sets per muscle per week.
    pub sets: u32,
}

/// Single source of truth for weekly per-muscle volume caps.
pub static MRV_REGISTRY: &[MrvDef] = &[
    MrvDef {
        level: ExperienceLevel::Beginner,
        sets: 12,
    },
    MrvDef {
        level: ExperienceLevel::Novice,
        sets: 12,
    },
    MrvDef {
        level: ExperienceLevel::Intermediate,
        sets: 20,
    },
    MrvDef {
        level: ExperienceLevel::Advanced,
        sets: 25,
    },
    MrvDef {
        level: ExperienceLevel::Elite,
        sets: 25,
    },
];

/// Look up the MRV for a level, falling back to [`DEFAULT_MRV`].
pub fn mrv_for(level: Option<ExperienceLevel>) -> u32 {
    level
        .and_then(|level| MRV_REGISTRY.iter().find(|def| def.level == level))
        .map_or(DEFAULT_MRV, |def| def.sets)
}

// ── CNS ──────────────────────────────────────────────────────────────────────

/// Longest allowed run of consecutive high-CNS training days.
pub const MAX_CONSECUTIVE_HIGH_CNS_DAYS: u32 = 2;

// ── Beginner ─────────────────────────────────────────────────────────────────

/// Most training days a beginner may have in a non-deload week.
pub const BEGINNER_MAX_TRAINING_DAYS: usize = 3;

// ── Recovery ─────────────────────────────────────────────────────────────────

/// Minimum calendar-day gap between sessions hitting the same muscle (48h).
pub const MIN_RECOVERY_GAP_DAYS: u8 = 2;

// ── Rule descriptions ────────────────────────────────────────────────────────

/// Display metadata for one rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub tag: RuleTag,
    pub summary: &'static str,
}

/// Rules in evaluation order.
pub static RULE_REGISTRY: &[RuleDef] = &[
    RuleDef {
        tag: RuleTag::DeloadRequired,
        summary: "Programs of 4+ weeks must include at least one deload week",
    },
    RuleDef {
        tag: RuleTag::DeloadVolumeInvalid,
        summary: "Deload weeks must run at 40-65% of baseline volume",
    },
    RuleDef {
        tag: RuleTag::VolumeExceedsMrv,
        summary: "Weekly sets per primary muscle must stay at or below MRV (deload weeks exempt)",
    },
    RuleDef {
        tag: RuleTag::CnsOverload,
        summary: "No more than 2 consecutive days with compound strength/power work",
    },
    RuleDef {
        tag: RuleTag::BeginnerOvertraining,
        summary: "Beginners train at most 3 days per non-deload week",
    },
    RuleDef {
        tag: RuleTag::InsufficientRecovery,
        summary: "Sessions hitting the same primary muscle need 48h between them",
    },
];
