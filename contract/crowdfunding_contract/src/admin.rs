use soroban_sdk::{log, Address, Env};

use crate::access;
use crate::storage_types::{
    AdminConfig, CrowdfundError, DataKey, FIRST_CAMPAIGN_ID, TTL_INSTANCE,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn read_config(e: &Env) -> Result<AdminConfig, CrowdfundError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn write_config(e: &Env, config: &AdminConfig) {
    e.storage().instance().set(&DataKey::Config, config);
    extend_instance(e);
}

pub fn read_token(e: &Env) -> Result<Address, CrowdfundError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

/// Create the singleton config. A second call fails and leaves the first
/// authority in place.
pub fn create_config(
    e: &Env,
    authority: &Address,
    token: &Address,
) -> Result<AdminConfig, CrowdfundError> {
    if has_config(e) {
        return Err(CrowdfundError::AlreadyInitialized);
    }

    let config = AdminConfig {
        authority: authority.clone(),
        paused: false,
    };

    e.storage().instance().set(&DataKey::Token, token);
    e.storage().instance().set(&DataKey::NextCampaignId, &FIRST_CAMPAIGN_ID);
    write_config(e, &config);

    Ok(config)
}

/// Flip the pause flag on behalf of the authority and return the new value.
pub fn toggle_pause(
    e: &Env,
    config: &mut AdminConfig,
    caller: &Address,
) -> Result<bool, CrowdfundError> {
    access::require_authority(e, config, caller)?;
    config.paused = !config.paused;
    Ok(config.paused)
}

pub fn require_not_paused(e: &Env, config: &AdminConfig) -> Result<(), CrowdfundError> {
    if config.paused {
        log!(e, "rejected while paused");
        return Err(CrowdfundError::SystemPaused);
    }
    Ok(())
}
