use crate::domain::{DomainName, Params};

use super::wire::{flag, optional_text};
use super::{Response, domain_params};

pub const GET_REG_LOCK_COMMAND: &str = "GetRegLock";
pub const SET_REG_LOCK_COMMAND: &str = "SetRegLock";

const LOCK_FAILED: &str = "Failed";

/// Lock status reported back when an unlock finds the domain already
/// unlocked.
pub const UNLOCKED_STATUS: &str = "Unlocked";

pub fn decode_reg_lock_response(response: &Response) -> bool {
    flag(response.root(), "RegLock")
}

/// `UnlockRegistrar` is inverted: `0` locks, `1` unlocks.
pub fn encode_set_reg_lock_form(domain: &DomainName, locked: bool) -> Params {
    domain_params(domain).with("UnlockRegistrar", if locked { "0" } else { "1" })
}

/// The new lock status, or `None` when the registrar answers `Failed`.
pub fn decode_set_reg_lock_response(response: &Response) -> Option<String> {
    optional_text(response.root(), "RegistrarLock").filter(|status| status != LOCK_FAILED)
}

/// Whether an error message says the domain is already unlocked.
pub fn is_already_unlocked(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("already") && message.contains("unlocked")
}
