multiversx_sc::imports!();

/// A transfer attached to the current call, as seen by the custody rules.
/// Attached value always lands in the called contract, so there is no
/// receiver to check.
pub struct InboundPayment<M: ManagedTypeApi> {
    pub sender: ManagedAddress<M>,
    pub token: EgldOrEsdtTokenIdentifier<M>,
    pub amount: BigUint<M>,
}

impl<M: ManagedTypeApi> InboundPayment<M> {
    pub fn is_egld(&self) -> bool {
        self.token.is_egld()
    }
}
