#![no_std]

multiversx_sc::imports!();

pub mod merrier_proxy;
pub mod record_store;
pub mod types;

use ledger_modules::errors::{
    ERR_INSUFFICIENT_BALANCE, ERR_INVALID_FEE_PERCENT, ERR_NOT_FOUND, ERR_ZERO_FEE,
};
use ledger_modules::{fund_custody, storage_deposit};
use types::AccountRecord;

// ============================================================
// Constants
// ============================================================

/// Fee percentages are expressed out of 100
const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Merrier:
    record_store::RecordStoreModule
    + storage_deposit::StorageDepositModule
    + fund_custody::FundCustodyModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, fee_percent: u64) {
        require!(
            fee_percent > 0 && fee_percent <= PERCENT_DENOMINATOR,
            ERR_INVALID_FEE_PERCENT
        );

        self.app_transaction_percent().set(fee_percent);
        self.app_balance().set(BigUint::zero());
        self.record_creator();
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: getMbr
    // Measures the exact deposit `register` will ask for.
    // ========================================================

    #[endpoint(getMbr)]
    #[payable("EGLD")]
    fn get_mbr(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let attached = self.inbound_egld();

        let required =
            self.trial_record_deposit(&caller, &AccountRecord::new(BigUint::zero()));

        // Keeps nothing, not even what was sent along with it.
        self.pay_out(&caller, &attached.token, &attached.amount);

        required
    }

    // ========================================================
    // ENDPOINT: register
    // Opens a record for the caller, paid for by the attached deposit.
    // ========================================================

    #[endpoint(register)]
    #[payable("EGLD")]
    fn register(&self, goal: BigUint) {
        let caller = self.blockchain().get_caller();
        let deposit = self.inbound_egld();

        let required = self.create_record(&caller, &AccountRecord::new(goal.clone()));
        self.require_deposit_covers(&deposit, &required);

        // Anything above the required deposit goes straight back.
        let excess = &deposit.amount - &required;
        self.pay_out(&caller, &deposit.token, &excess);

        self.register_event(&caller, &goal, &required);
    }

    // ========================================================
    // ENDPOINT: support
    // Skims the fee into the app balance, credits the rest.
    // ========================================================

    #[endpoint(support)]
    #[payable("EGLD")]
    fn support(&self, beneficiary: ManagedAddress) {
        require!(self.has_record(&beneficiary), ERR_NOT_FOUND);

        let payment = self.inbound_egld();
        self.verify_inbound(&payment, &BigUint::from(1u64));

        let fee = self.compute_fee(&payment.amount);
        require!(fee > 0u64, ERR_ZERO_FEE);
        let net = &payment.amount - &fee;

        let mut record = self.read_record(&beneficiary);
        record.filled += &net;
        record.balance += &net;
        self.update_record(&beneficiary, &record);

        self.app_balance().update(|balance| *balance += &fee);

        self.support_event(&beneficiary, &payment.sender, &payment.amount, &fee);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let mut record = self.read_record(&caller);
        require!(amount <= record.balance, ERR_INSUFFICIENT_BALANCE);

        self.pay_out_egld(&caller, &amount);

        record.balance -= &amount;
        self.update_record(&caller, &record);

        self.withdraw_event(&caller, &amount, &record.balance);
    }

    // ========================================================
    // ENDPOINT: withdrawAppBalance
    // Creator collects the accumulated fees.
    // ========================================================

    #[endpoint(withdrawAppBalance)]
    fn withdraw_app_balance(&self) {
        let creator = self.require_creator();

        let amount = self.app_balance().take();
        self.pay_out_egld(&creator, &amount);

        self.app_balance_withdrawn_event(&creator, &amount);
    }

    // ========================================================
    // ENDPOINT: deregister
    // Closes the caller's record; refunds balance plus deposit.
    // ========================================================

    #[endpoint(deregister)]
    fn deregister(&self) {
        let caller = self.blockchain().get_caller();
        let record = self.read_record(&caller);

        let released = self.delete_record(&caller);
        let refund = &record.balance + &released;
        self.pay_out_egld(&caller, &refund);

        self.deregister_event(&caller, &record.balance, &released);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Fee share of `amount`, rounded down.
    fn compute_fee(&self, amount: &BigUint) -> BigUint {
        let percent = self.app_transaction_percent().get();
        (amount * percent) / PERCENT_DENOMINATOR
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getUserData)]
    fn get_user_data(&self, account: ManagedAddress) -> AccountRecord<Self::Api> {
        self.read_record(&account)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("register")]
    fn register_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] goal: &BigUint,
        deposit: &BigUint,
    );

    #[event("support")]
    fn support_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] supporter: &ManagedAddress,
        #[indexed] amount: &BigUint,
        fee: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        remaining_balance: &BigUint,
    );

    #[event("appBalanceWithdrawn")]
    fn app_balance_withdrawn_event(&self, #[indexed] creator: &ManagedAddress, amount: &BigUint);

    #[event("deregister")]
    fn deregister_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] balance: &BigUint,
        deposit: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getFeePercent)]
    #[storage_mapper("appTransactionPercent")]
    fn app_transaction_percent(&self) -> SingleValueMapper<u64>;

    #[view(getAppBalance)]
    #[storage_mapper("appBalance")]
    fn app_balance(&self) -> SingleValueMapper<BigUint>;
}
