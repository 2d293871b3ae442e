use rand::Rng;
use std::collections::HashSet;

const SUFFIX_LEN: usize = 6;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Issues human-readable confirmation codes: `<PREFIX>-<year>-<6 chars>`,
/// e.g. `OSH-2026-K4PZ1Q`. Uniqueness is guaranteed by collision-checking
/// against the set of codes already issued.
#[derive(Debug, Clone)]
pub struct ConfirmationCodes {
    prefix: String,
}

impl ConfirmationCodes {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn generate(&self, year: i32) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        format!("{}-{}-{}", self.prefix, year, suffix)
    }

    /// Generate a code not present in `issued`. 36^6 suffixes per year make
    /// collisions rare; the loop retries on the odd hit.
    pub fn issue(&self, year: i32, issued: &HashSet<String>) -> String {
        loop {
            let code = self.generate(year);
            if !issued.contains(&code) {
                return code;
            }
        }
    }
}
