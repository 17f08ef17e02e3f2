multiversx_sc::imports!();

use crate::errors::ERR_UNDERFUNDED_DEPOSIT;
use crate::types::InboundPayment;

// ============================================================
// Deposit model
// ============================================================

/// Flat deposit locked by every stored record
pub const RECORD_FLAT_DEPOSIT: u64 = 2_500;

/// Deposit per byte of record key + record slot
pub const RECORD_BYTE_DEPOSIT: u64 = 400;

/// Storage-cost oracle. Tracks the footprint of every record the contract
/// holds and derives the minimum balance that footprint locks. Deposits are
/// always measured as the difference between two snapshots of
/// `min_balance` taken immediately around a mutation, never estimated.
#[multiversx_sc::module]
pub trait StorageDepositModule {
    #[view(getMinBalance)]
    fn min_balance(&self) -> BigUint {
        let records = BigUint::from(self.occupied_records().get());
        let bytes = BigUint::from(self.occupied_bytes().get());

        records * RECORD_FLAT_DEPOSIT + bytes * RECORD_BYTE_DEPOSIT
    }

    /// Deposit locked between two `min_balance` snapshots.
    fn locked_between(&self, before: &BigUint, after: &BigUint) -> BigUint {
        if after > before {
            after - before
        } else {
            BigUint::zero()
        }
    }

    /// Deposit released between two `min_balance` snapshots.
    fn released_between(&self, before: &BigUint, after: &BigUint) -> BigUint {
        self.locked_between(after, before)
    }

    fn occupy(&self, footprint: usize) {
        self.occupied_records().update(|records| *records += 1);
        self.occupied_bytes().update(|bytes| *bytes += footprint as u64);
    }

    fn release(&self, footprint: usize) {
        self.occupied_records()
            .update(|records| *records = records.saturating_sub(1));
        self.occupied_bytes()
            .update(|bytes| *bytes = bytes.saturating_sub(footprint as u64));
    }

    /// The deposit must be EGLD and cover `required`.
    fn require_deposit_covers(&self, deposit: &InboundPayment<Self::Api>, required: &BigUint) {
        require!(deposit.is_egld(), ERR_UNDERFUNDED_DEPOSIT);
        require!(&deposit.amount >= required, ERR_UNDERFUNDED_DEPOSIT);
    }

    // ── Footprint ──

    #[view(getOccupiedRecords)]
    #[storage_mapper("occupiedRecords")]
    fn occupied_records(&self) -> SingleValueMapper<u64>;

    #[view(getOccupiedBytes)]
    #[storage_mapper("occupiedBytes")]
    fn occupied_bytes(&self) -> SingleValueMapper<u64>;
}
