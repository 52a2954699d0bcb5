//! Parallel exhaustive salt recovery
//!
//! Given a credential and an observed info string produced with
//! [`AuthMethod::SaltedMd5`], scan the whole decimal salt space
//! `[0, 10^max_digits)` for salts that reproduce the ciphertext. The scan
//! is exhaustive: every worker finishes its full range before the call
//! returns, and all matches in range are reported, not just the first.

use std::ops::Range;
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::auth::{AuthMethod, Authenticator};
use crate::credential::Credential;
use crate::error::{EpgError, Result};

/// Largest salt space that fits the 64-bit candidate counter
const MAX_SALT_DIGITS: u32 = 19;

/// Options for a salt search
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Number of decimal digits: candidates cover `[0, 10^max_digits)`
    pub max_digits: u32,
    /// Format candidates zero-padded to `max_digits` before hashing
    pub zero_padded: bool,
    /// Worker threads scanning disjoint ranges
    pub workers: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_digits: 8,
            zero_padded: true,
            workers: 4,
        }
    }
}

/// Outcome of testing a single salt candidate.
///
/// Only a failed key derivation is survivable: it rules out this candidate
/// and nothing else. Any other error aborts the search, since skipping it
/// would silently leave part of the salt space uncovered.
enum Trial {
    Match,
    NoMatch,
    SkippedDerivation,
}

/// Scan the salt space for salts reproducing `target_info`.
///
/// The space is split into one contiguous range per worker, computed up
/// front; the last worker absorbs the division remainder. Matches are
/// appended to a shared collection and returned sorted ascending, so the
/// result is identical for any worker count. The call blocks until every
/// worker has finished its entire range.
///
/// # Errors
///
/// [`EpgError::SaltDigits`] when `max_digits` exceeds 19, and any
/// non-derivation error a worker encounters.
pub fn search_salts(
    credential: &Credential,
    target_info: &str,
    options: &SearchOptions,
) -> Result<Vec<u64>> {
    if options.max_digits > MAX_SALT_DIGITS {
        return Err(EpgError::SaltDigits(options.max_digits));
    }
    let total = 10u64.pow(options.max_digits);
    let matches = Mutex::new(Vec::new());

    thread::scope(|scope| {
        let handles: Vec<_> = partition(total, options.workers)
            .into_iter()
            .map(|range| {
                let matches = &matches;
                scope.spawn(move || scan_range(credential, target_info, options, range, matches))
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(outcome) => outcome?,
                // A dead worker means lost coverage; fail loudly.
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        Ok::<(), EpgError>(())
    })?;

    let mut found = matches
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);
    found.sort_unstable();
    Ok(found)
}

/// Split `[0, total)` into one contiguous half-open range per worker.
///
/// All workers but the last get `total / workers` candidates; the last
/// additionally absorbs the remainder. The ranges are disjoint and cover
/// the space exactly.
fn partition(total: u64, workers: usize) -> Vec<Range<u64>> {
    let workers = workers.max(1) as u64;
    let base = total / workers;
    (0..workers)
        .map(|index| {
            let start = index * base;
            let end = if index == workers - 1 {
                total
            } else {
                start + base
            };
            start..end
        })
        .collect()
}

fn scan_range(
    credential: &Credential,
    target_info: &str,
    options: &SearchOptions,
    range: Range<u64>,
    matches: &Mutex<Vec<u64>>,
) -> Result<()> {
    for candidate in range {
        let salt = format_salt(candidate, options);
        match try_salt(credential, target_info, &salt)? {
            Trial::Match => matches
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(candidate),
            Trial::NoMatch | Trial::SkippedDerivation => {}
        }
    }
    Ok(())
}

fn try_salt(credential: &Credential, target_info: &str, salt: &str) -> Result<Trial> {
    let authenticator = Authenticator::new(credential, AuthMethod::SaltedMd5, Some(salt))?;
    match authenticator.info() {
        Ok(info) if info == target_info => Ok(Trial::Match),
        Ok(_) => Ok(Trial::NoMatch),
        Err(EpgError::KeyLength(_)) => Ok(Trial::SkippedDerivation),
        Err(err) => Err(err),
    }
}

fn format_salt(candidate: u64, options: &SearchOptions) -> String {
    if options.zero_padded {
        format!("{candidate:0width$}", width = options.max_digits as usize)
    } else {
        candidate.to_string()
    }
}
