#![no_std]

multiversx_sc::imports!();

pub mod dao_proxy;
pub mod types;

use ledger_modules::errors::{
    ERR_ALREADY_BOOTSTRAPPED, ERR_ALREADY_REGISTERED, ERR_ALREADY_VOTED, ERR_INSUFFICIENT_AMOUNT,
    ERR_NOT_BOOTSTRAPPED, ERR_NOT_REGISTERED, ERR_NO_VOTES, ERR_WRONG_ASSET,
};
use ledger_modules::fund_custody;
use types::{RegistrationStatus, Tally};

/// Units of the registered asset handed to each registering voter
const UNITS_PER_VOTER: u64 = 1;

/// Display name and ticker of the issued voting asset
const TOKEN_DISPLAY_NAME: &[u8] = b"DaoVote";
const TOKEN_TICKER: &[u8] = b"VOTE";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Dao: fund_custody::FundCustodyModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, proposal: ManagedBuffer) {
        self.proposal().set(&proposal);
        self.record_creator();
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: bootstrap
    // Creator pays the issue cost; the contract issues the voting
    // asset with a fixed supply and no mint or burn rights. The
    // asset is fixed once the issue callback lands.
    // ========================================================

    #[endpoint(bootstrap)]
    #[payable("EGLD")]
    fn bootstrap(&self, initial_supply: BigUint) {
        self.require_creator();
        require!(self.registered_asset().is_empty(), ERR_ALREADY_BOOTSTRAPPED);
        require!(!self.bootstrap_pending().get(), ERR_ALREADY_BOOTSTRAPPED);
        require!(initial_supply >= UNITS_PER_VOTER, ERR_INSUFFICIENT_AMOUNT);

        let issue_cost = self.inbound_egld();
        self.verify_inbound(&issue_cost, &BigUint::from(1u64));

        self.bootstrap_pending().set(true);

        self.send()
            .esdt_system_sc_tx()
            .issue_fungible(
                issue_cost.amount,
                &ManagedBuffer::from(TOKEN_DISPLAY_NAME),
                &ManagedBuffer::from(TOKEN_TICKER),
                &initial_supply,
                FungibleTokenProperties {
                    num_decimals: 0,
                    can_freeze: false,
                    can_wipe: false,
                    can_pause: false,
                    can_mint: false,
                    can_burn: false,
                    can_change_owner: false,
                    can_upgrade: false,
                    can_add_special_roles: false,
                },
            )
            .callback(self.callbacks().bootstrap_callback())
            .async_call_and_exit();
    }

    #[callback]
    fn bootstrap_callback(&self, #[call_result] result: ManagedAsyncCallResult<()>) {
        self.bootstrap_pending().clear();

        match result {
            ManagedAsyncCallResult::Ok(()) => {
                let supply = self.call_value().single_esdt();
                self.fix_registered_asset(&supply.token_identifier, &supply.amount);
            }
            ManagedAsyncCallResult::Err(_) => {
                // the system contract returns the issue cost
                let returned = self.call_value().egld_value().clone_value();
                let creator = self.creator().get();
                self.pay_out_egld(&creator, &returned);
            }
        }
    }

    /// Records the freshly issued asset. Its whole supply is already
    /// held by the contract.
    fn fix_registered_asset(&self, asset: &TokenIdentifier, supply: &BigUint) {
        require!(self.registered_asset().is_empty(), ERR_ALREADY_BOOTSTRAPPED);
        self.registered_asset().set(asset);

        self.bootstrap_event(asset, supply);
    }

    // ========================================================
    // ENDPOINT: register
    // One registration record and one asset unit per account.
    // ========================================================

    #[endpoint(register)]
    fn register(&self, asset: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        self.require_registered_asset(&asset);
        require!(
            self.registrations(&caller).get() == RegistrationStatus::Unregistered,
            ERR_ALREADY_REGISTERED
        );

        self.registrations(&caller).set(RegistrationStatus::Registered);
        self.pay_out(
            &caller,
            &EgldOrEsdtTokenIdentifier::esdt(asset),
            &BigUint::from(UNITS_PER_VOTER),
        );

        self.voter_registered_event(&caller);
    }

    // ========================================================
    // ENDPOINT: vote
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, in_favor: bool, asset: TokenIdentifier) {
        let caller = self.blockchain().get_caller();
        self.require_registered_asset(&asset);
        match self.registrations(&caller).get() {
            RegistrationStatus::Unregistered => sc_panic!(ERR_NOT_REGISTERED),
            RegistrationStatus::Voted => sc_panic!(ERR_ALREADY_VOTED),
            RegistrationStatus::Registered => {}
        }

        let mut tally = if self.tally().is_empty() {
            Tally::default()
        } else {
            self.tally().get()
        };
        tally.record(in_favor);
        self.tally().set(&tally);

        self.registrations(&caller).set(RegistrationStatus::Voted);

        self.vote_event(&caller, in_favor);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_registered_asset(&self, asset: &TokenIdentifier) {
        require!(!self.registered_asset().is_empty(), ERR_NOT_BOOTSTRAPPED);
        require!(asset == &self.registered_asset().get(), ERR_WRONG_ASSET);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getRegisteredAsa)]
    fn get_registered_asa(&self) -> TokenIdentifier {
        require!(!self.registered_asset().is_empty(), ERR_NOT_BOOTSTRAPPED);
        self.registered_asset().get()
    }

    /// (votes for, votes against). Fails until the first vote is cast.
    #[view(getVotes)]
    fn get_votes(&self) -> MultiValue2<u64, u64> {
        require!(!self.tally().is_empty(), ERR_NO_VOTES);
        let tally = self.tally().get();
        (tally.votes_for, tally.votes_against).into()
    }

    #[view(isRegistered)]
    fn is_registered(&self, account: &ManagedAddress) -> bool {
        self.registrations(account).get() != RegistrationStatus::Unregistered
    }

    #[view(hasVoted)]
    fn has_voted(&self, account: &ManagedAddress) -> bool {
        self.registrations(account).get() == RegistrationStatus::Voted
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("bootstrap")]
    fn bootstrap_event(&self, #[indexed] asset: &TokenIdentifier, supply: &BigUint);

    #[event("voterRegistered")]
    fn voter_registered_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("vote")]
    fn vote_event(&self, #[indexed] voter: &ManagedAddress, in_favor: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposal)]
    #[storage_mapper("proposal")]
    fn proposal(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("registeredAsset")]
    fn registered_asset(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("bootstrapPending")]
    fn bootstrap_pending(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("tally")]
    fn tally(&self) -> SingleValueMapper<Tally>;

    #[storage_mapper("registrations")]
    fn registrations(&self, voter: &ManagedAddress) -> SingleValueMapper<RegistrationStatus>;
}
