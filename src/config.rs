//! We can have a little hard-coded config, [as a
//! snack](https://knowyourmeme.com/memes/cats-can-have-a-little-salami).

/// Quiet period the editor waits out after a keystroke before autosaving.
/// This lands in the `delay:` modifier of the editor form's htmx trigger.
pub const AUTOSAVE_DEBOUNCE_MS: u32 = 900;

/// Quiet period for the search box before the note grid refreshes.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Note cards preview their content truncated to this many characters.
pub const NOTE_PREVIEW_CHARS: usize = 120;

/// Session cookies older than this fail validation, sending the bearer back
/// through login.
pub const SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 30;
