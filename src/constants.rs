//! App-wide constants.
//!
//! Centralises config paths, environment variable names, and the fixed
//! header literals so a rename only requires changing this file.

/// Crate version, shown by `--version` on both binaries.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.ectf-secrets.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".ectf-secrets.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "ectf-secrets";

// ── Header literals ─────────────────────────────────────────────────

/// Value of the `PASSWORD` define in both headers.
pub const PASSWORD: &str = "unlock";

/// Stand-in for `PAIR_PIN`, `CAR_ID` and `CAR_SECRET` in an unpaired fob.
pub const UNPAIRED_PLACEHOLDER: &str = "000000";

pub const CAR_HEADER_GUARD: &str = "__CAR_SECRETS__";
pub const FOB_HEADER_GUARD: &str = "__FOB_SECRETS__";

/// Indentation of the JSON secret store.
pub const STORE_INDENT: &[u8] = b"    ";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_QUIET: &str = "ECTF_SECRETS_QUIET";
