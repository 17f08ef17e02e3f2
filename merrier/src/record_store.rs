multiversx_sc::imports!();

use ledger_modules::errors::{ERR_ALREADY_EXISTS, ERR_NOT_FOUND};
use ledger_modules::storage_deposit;

use crate::types::AccountRecord;

/// Per-account records. Every insert and removal goes through the
/// storage-deposit snapshot so the charged and refunded deposits always
/// match what the record occupies.
#[multiversx_sc::module]
pub trait RecordStoreModule: storage_deposit::StorageDepositModule {
    fn has_record(&self, key: &ManagedAddress) -> bool {
        !self.user_data(key).is_empty()
    }

    /// Inserts a new record and returns the deposit it locks.
    fn create_record(&self, key: &ManagedAddress, record: &AccountRecord<Self::Api>) -> BigUint {
        require!(!self.has_record(key), ERR_ALREADY_EXISTS);

        let footprint = self.record_footprint(key);

        let before = self.min_balance();
        self.user_data(key).set(record);
        self.occupy(footprint);
        let after = self.min_balance();

        self.locked_between(&before, &after)
    }

    fn read_record(&self, key: &ManagedAddress) -> AccountRecord<Self::Api> {
        require!(self.has_record(key), ERR_NOT_FOUND);
        self.user_data(key).get()
    }

    fn update_record(&self, key: &ManagedAddress, record: &AccountRecord<Self::Api>) {
        require!(self.has_record(key), ERR_NOT_FOUND);
        self.user_data(key).set(record);
    }

    /// Removes a record and returns the deposit it released.
    fn delete_record(&self, key: &ManagedAddress) -> BigUint {
        require!(self.has_record(key), ERR_NOT_FOUND);

        let footprint = self.record_footprint(key);

        let before = self.min_balance();
        self.user_data(key).clear();
        self.release(footprint);
        let after = self.min_balance();

        self.released_between(&before, &after)
    }

    /// Measures the deposit a record would lock without keeping it. The
    /// trial record only lives between the two snapshots; a failure in
    /// between reverts the whole call along with it.
    fn trial_record_deposit(
        &self,
        key: &ManagedAddress,
        record: &AccountRecord<Self::Api>,
    ) -> BigUint {
        let locked = self.create_record(key, record);
        self.delete_record(key);
        locked
    }

    /// Key bytes plus the fixed record slot.
    fn record_footprint(&self, key: &ManagedAddress) -> usize {
        key.as_managed_buffer().len() + AccountRecord::<Self::Api>::STORAGE_SIZE
    }

    #[storage_mapper("userData")]
    fn user_data(&self, key: &ManagedAddress) -> SingleValueMapper<AccountRecord<Self::Api>>;
}
