use soroban_sdk::{log, token, Address, Env, String, Vec};

use crate::admin;
use crate::math;
use crate::storage_types::*;

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn read_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::CampaignNotFound)
}

pub fn write_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

fn read_next_id(e: &Env) -> Result<CampaignId, CrowdfundError> {
    e.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(CrowdfundError::NotInitialized)
}

/// Reserve a fresh campaign id. Ids start at 1 and are never reused.
pub fn allocate_id(e: &Env) -> Result<CampaignId, CrowdfundError> {
    let campaign_id = read_next_id(e)?;
    let next = math::add(campaign_id, 1)?;
    e.storage().instance().set(&DataKey::NextCampaignId, &next);
    admin::extend_instance(e);
    Ok(campaign_id)
}

pub fn campaign_count(e: &Env) -> Result<u64, CrowdfundError> {
    math::subtract(read_next_id(e)?, FIRST_CAMPAIGN_ID)
}

/// Parameter checks for a new campaign, in the order they are reported.
pub fn validate_new_campaign(
    title: &String,
    description: &String,
    goal: u64,
    deadline: u64,
    now: u64,
) -> Result<(), CrowdfundError> {
    if goal == 0 {
        return Err(CrowdfundError::InvalidGoal);
    }
    if deadline <= now {
        return Err(CrowdfundError::InvalidDeadline);
    }
    if math::subtract(deadline, now)? > MAX_CAMPAIGN_DURATION {
        return Err(CrowdfundError::CampaignTooLong);
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CrowdfundError::TitleTooLong);
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CrowdfundError::DescriptionTooLong);
    }
    Ok(())
}

/// Validate and allocate a campaign. Nothing is persisted here.
pub fn open_campaign(
    e: &Env,
    creator: &Address,
    title: String,
    description: String,
    goal: u64,
    deadline: u64,
) -> Result<Campaign, CrowdfundError> {
    validate_new_campaign(&title, &description, goal, deadline, e.ledger().timestamp())?;

    Ok(Campaign {
        id: allocate_id(e)?,
        creator: creator.clone(),
        title,
        description,
        goal,
        raised_amount: 0,
        deadline,
    })
}

pub fn state_at(campaign: &Campaign, now: u64) -> CampaignState {
    if now < campaign.deadline {
        CampaignState::Open
    } else if campaign.raised_amount > 0 {
        CampaignState::Funded
    } else {
        CampaignState::Settled
    }
}

/// Account a donation against the campaign. Over-funding is allowed; a
/// donation at exactly the deadline is not.
pub fn record_donation(
    campaign: &mut Campaign,
    amount: u64,
    now: u64,
) -> Result<u64, CrowdfundError> {
    if now >= campaign.deadline {
        return Err(CrowdfundError::CampaignExpired);
    }
    if amount == 0 {
        return Err(CrowdfundError::InvalidAmount);
    }
    campaign.raised_amount = math::add(campaign.raised_amount, amount)?;
    Ok(campaign.raised_amount)
}

/// Empty the campaign once its deadline has passed and return the payout.
/// Reaching the goal early does not unlock it.
pub fn settle(campaign: &mut Campaign, now: u64) -> Result<u64, CrowdfundError> {
    if now < campaign.deadline {
        return Err(CrowdfundError::CampaignStillOpen);
    }
    if campaign.raised_amount == 0 {
        return Err(CrowdfundError::NothingToWithdraw);
    }
    let payout = campaign.raised_amount;
    campaign.raised_amount = math::subtract(campaign.raised_amount, payout)?;
    Ok(payout)
}

/// Move a donation from the donor into the contract's held balance.
pub fn collect(e: &Env, donor: &Address, amount: u64) -> Result<(), CrowdfundError> {
    let token_client = token::TokenClient::new(e, &admin::read_token(e)?);
    token_client.transfer(donor, &e.current_contract_address(), &math::to_token_amount(amount));
    Ok(())
}

/// Pay the settled amount out of the contract's held balance.
pub fn pay_out(e: &Env, creator: &Address, amount: u64) -> Result<(), CrowdfundError> {
    let token_client = token::TokenClient::new(e, &admin::read_token(e)?);
    token_client.transfer(&e.current_contract_address(), creator, &math::to_token_amount(amount));
    log!(e, "campaign funds paid out", creator.clone(), amount);
    Ok(())
}

/// Campaigns in id order from `start_id`, at most `limit` (capped) of them.
pub fn page(e: &Env, start_id: CampaignId, limit: u32) -> Result<Vec<Campaign>, CrowdfundError> {
    let end = read_next_id(e)?;
    let limit = limit.min(MAX_PAGE_SIZE);
    let mut campaigns = Vec::new(e);

    let mut campaign_id = start_id.max(FIRST_CAMPAIGN_ID);
    while campaign_id < end && campaigns.len() < limit {
        if let Some(campaign) = e
            .storage()
            .persistent()
            .get::<PersistentKey, Campaign>(&PersistentKey::Campaign(campaign_id))
        {
            campaigns.push_back(campaign);
        }
        campaign_id += 1;
    }

    Ok(campaigns)
}
