// ============================================================
// Error messages
// Every failure aborts the whole call; the VM reverts all
// storage writes and transfers made before the failure.
// ============================================================

// ── Record presence ──

pub const ERR_ALREADY_EXISTS: &str = "Record already exists";
pub const ERR_NOT_FOUND: &str = "Record not found";

// ── Fund transfer validation ──

pub const ERR_UNDERFUNDED_DEPOSIT: &str = "Storage deposit does not cover the record";
pub const ERR_INSUFFICIENT_AMOUNT: &str = "Payment amount below minimum";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const ERR_ZERO_FEE: &str = "Payment too small to generate a fee";

// ── Authority / configuration ──

pub const ERR_UNAUTHORIZED: &str = "Only the creator can call this endpoint";
pub const ERR_INVALID_FEE_PERCENT: &str = "Fee percent must be between 1 and 100";

// ── Tally state machine ──

pub const ERR_WRONG_ASSET: &str = "Wrong asset";
pub const ERR_NOT_REGISTERED: &str = "Caller is not registered";
pub const ERR_ALREADY_REGISTERED: &str = "Caller is already registered";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_ALREADY_BOOTSTRAPPED: &str = "Already bootstrapped";
pub const ERR_NOT_BOOTSTRAPPED: &str = "Not bootstrapped";
pub const ERR_NO_VOTES: &str = "No votes cast yet";
