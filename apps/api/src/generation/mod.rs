// Guide generation: eligibility filtering, shuffled diversity-first selection,
// and assembly of the numbered guide returned to callers.
// No I/O here; the only side effect is drawing from the injected RNG.

pub mod guide;
pub mod handlers;
pub mod selector;
pub mod shuffle;
