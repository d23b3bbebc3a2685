//! Cross-crate scenarios: recorded JSON-lines frames decoded by
//! `handsign-protocols`, classified and debounced by `handsign-core`.

#[cfg(test)]
mod util;

#[cfg(test)]
mod recognition;
