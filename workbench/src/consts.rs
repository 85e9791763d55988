//! Shared constants for the workbench crate.

// ── Layout ──────────────────────────────────────────────────────

/// Number of slots each row gets unless configured otherwise.
pub const DEFAULT_SLOTS_PER_ROW: u32 = 3;

/// Upper bound accepted for a configured slot count.
pub const MAX_SLOTS_PER_ROW: u32 = 9;

// ── Identifiers ─────────────────────────────────────────────────

/// Prefix of generated row ids (`row-1`, `row-2`, ...).
pub const ROW_ID_PREFIX: &str = "row-";

/// Prefix of slot keys (`slot-<row>-<position>`).
pub const SLOT_KEY_PREFIX: &str = "slot-";

/// Container name of a row's palette in payloads and element ids.
pub const PALETTE: &str = "palette";

/// Container name of a row's trash in payloads and element ids.
pub const TRASH: &str = "trash";

// ── Persistence ─────────────────────────────────────────────────

/// Storage key holding the serialized snapshot log.
pub const DEFAULT_STORAGE_KEY: &str = "fn_slots_history";
