use soroban_sdk::{log, Address, Env};

use crate::storage_types::{AdminConfig, Campaign, CrowdfundError};

/// Only the configured authority may pass. The identity is compared before
/// the signature is demanded, so an impostor always gets `Unauthorized`.
pub fn require_authority(
    e: &Env,
    config: &AdminConfig,
    caller: &Address,
) -> Result<(), CrowdfundError> {
    if *caller != config.authority {
        log!(e, "caller is not the admin authority", caller.clone());
        return Err(CrowdfundError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

/// Only the campaign's creator may pass.
pub fn require_creator(
    e: &Env,
    campaign: &Campaign,
    caller: &Address,
) -> Result<(), CrowdfundError> {
    if *caller != campaign.creator {
        log!(e, "caller is not the campaign creator", campaign.id, caller.clone());
        return Err(CrowdfundError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}
