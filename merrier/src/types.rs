multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Account Record — one per registered account
// ============================================================

/// Bytes reserved for each amount in a record. 32 bytes hold any EGLD
/// amount with room to spare.
pub const AMOUNT_SLOT_SIZE: usize = 32;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct AccountRecord<M: ManagedTypeApi> {
    /// Target amount, fixed at registration
    pub goal: BigUint<M>,
    /// Cumulative support received, net of the fee skim
    pub filled: BigUint<M>,
    /// Unwithdrawn part of `filled`
    pub balance: BigUint<M>,
}

impl<M: ManagedTypeApi> AccountRecord<M> {
    /// Storage charged for a record, whatever its amounts encode to.
    /// Keeps the deposit of a record fixed for its whole life.
    pub const STORAGE_SIZE: usize = 3 * AMOUNT_SLOT_SIZE;

    pub fn new(goal: BigUint<M>) -> Self {
        AccountRecord {
            goal,
            filled: BigUint::zero(),
            balance: BigUint::zero(),
        }
    }
}
