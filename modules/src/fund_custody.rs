multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_AMOUNT, ERR_INSUFFICIENT_BALANCE, ERR_UNAUTHORIZED};
use crate::types::InboundPayment;

/// Custody rules shared by both contracts: what an inbound transfer must
/// look like, when the contract may pay out, and who the creator is.
#[multiversx_sc::module]
pub trait FundCustodyModule {
    // ========================================================
    // Creator authority
    // ========================================================

    fn record_creator(&self) {
        let creator = self.blockchain().get_caller();
        self.creator().set(&creator);
    }

    fn require_creator(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.creator().get(), ERR_UNAUTHORIZED);
        caller
    }

    // ========================================================
    // Inbound transfers
    // ========================================================

    /// EGLD attached to the current call. Zero when nothing was attached.
    fn inbound_egld(&self) -> InboundPayment<Self::Api> {
        InboundPayment {
            sender: self.blockchain().get_caller(),
            token: EgldOrEsdtTokenIdentifier::egld(),
            amount: self.call_value().egld_value().clone_value(),
        }
    }

    fn verify_inbound(&self, payment: &InboundPayment<Self::Api>, min_amount: &BigUint) {
        require!(&payment.amount >= min_amount, ERR_INSUFFICIENT_AMOUNT);
    }

    // ========================================================
    // Outbound transfers
    // ========================================================

    /// Pays `amount` of `token` out of the contract's own balance.
    /// Zero amounts move nothing.
    fn pay_out(
        &self,
        receiver: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        if *amount == 0u64 {
            return;
        }

        let custodied = self.blockchain().get_sc_balance(token, 0);
        require!(amount <= &custodied, ERR_INSUFFICIENT_BALANCE);

        self.send().direct(receiver, token, 0, amount);
    }

    fn pay_out_egld(&self, receiver: &ManagedAddress, amount: &BigUint) {
        self.pay_out(receiver, &EgldOrEsdtTokenIdentifier::egld(), amount);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getCreator)]
    #[storage_mapper("creator")]
    fn creator(&self) -> SingleValueMapper<ManagedAddress>;
}
