multiversx_sc::derive_imports!();

// ============================================================
// Registration Status — per-voter record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum RegistrationStatus {
    /// Nothing stored for this account. Encodes to empty storage.
    Unregistered,
    /// Holds a unit of the registered asset, has not voted yet.
    Registered,
    /// Vote consumed. Terminal.
    Voted,
}

// ============================================================
// Tally — yes/no counters, stored once the first vote lands
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug, Default)]
pub struct Tally {
    pub votes_for: u64,
    pub votes_against: u64,
}

impl Tally {
    pub fn record(&mut self, in_favor: bool) {
        if in_favor {
            self.votes_for += 1;
        } else {
            self.votes_against += 1;
        }
    }
}
