#![no_std]

mod access;
mod admin;
mod campaign;
mod events;
mod math;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use storage_types::{AdminConfig, Campaign, CampaignId, CampaignState, CrowdfundError};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Create the admin configuration. `token` is the asset contract of the
    /// value unit that campaigns collect and pay out.
    pub fn initialize(env: Env, authority: Address, token: Address) -> Result<(), CrowdfundError> {
        if admin::has_config(&env) {
            return Err(CrowdfundError::AlreadyInitialized);
        }
        authority.require_auth();

        admin::create_config(&env, &authority, &token)?;

        events::emit_initialized(&env, events::InitializedEvent { authority, token });
        Ok(())
    }

    /// Flip the global pause flag. Authority only.
    pub fn toggle_pause(env: Env, authority: Address) -> Result<bool, CrowdfundError> {
        let mut config = admin::read_config(&env)?;
        let paused = admin::toggle_pause(&env, &mut config, &authority)?;
        admin::write_config(&env, &config);

        events::emit_pause_toggled(&env, events::PauseToggledEvent { authority, paused });
        Ok(paused)
    }

    /// Open a new campaign and return its id.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: u64,
        deadline: u64,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();
        let config = admin::read_config(&env)?;
        admin::require_not_paused(&env, &config)?;

        let campaign = campaign::open_campaign(&env, &creator, title, description, goal, deadline)?;
        campaign::write_campaign(&env, &campaign);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id: campaign.id,
                creator,
                goal,
                deadline,
            },
        );

        Ok(campaign.id)
    }

    /// Pledge `amount` to an open campaign.
    pub fn donate(
        env: Env,
        campaign_id: CampaignId,
        donor: Address,
        amount: u64,
    ) -> Result<u64, CrowdfundError> {
        donor.require_auth();
        let config = admin::read_config(&env)?;
        admin::require_not_paused(&env, &config)?;

        let mut campaign = campaign::read_campaign(&env, campaign_id)?;
        let now = env.ledger().timestamp();
        let raised_amount = campaign::record_donation(&mut campaign, amount, now).map_err(|err| {
            log!(&env, "donation rejected", campaign_id, now, campaign.deadline);
            err
        })?;

        campaign::collect(&env, &donor, amount)?;
        campaign::write_campaign(&env, &campaign);

        events::emit_donation_received(
            &env,
            events::DonationReceivedEvent {
                campaign_id,
                donor,
                amount,
                raised_amount,
            },
        );

        Ok(raised_amount)
    }

    /// Pay everything raised to the creator once the deadline has passed.
    /// Not gated by the pause flag.
    pub fn withdraw(env: Env, campaign_id: CampaignId, creator: Address) -> Result<u64, CrowdfundError> {
        admin::read_config(&env)?;

        let mut campaign = campaign::read_campaign(&env, campaign_id)?;
        access::require_creator(&env, &campaign, &creator)?;

        let amount = campaign::settle(&mut campaign, env.ledger().timestamp())?;
        campaign::write_campaign(&env, &campaign);
        campaign::pay_out(&env, &creator, amount)?;

        events::emit_funds_withdrawn(
            &env,
            events::FundsWithdrawnEvent {
                campaign_id,
                creator,
                amount,
            },
        );

        Ok(amount)
    }

    /// View functions
    pub fn get_config(env: Env) -> Result<AdminConfig, CrowdfundError> {
        admin::read_config(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, CrowdfundError> {
        admin::read_token(&env)
    }

    pub fn is_paused(env: Env) -> Result<bool, CrowdfundError> {
        Ok(admin::read_config(&env)?.paused)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
        campaign::read_campaign(&env, campaign_id)
    }

    pub fn get_campaign_state(env: Env, campaign_id: CampaignId) -> Result<CampaignState, CrowdfundError> {
        let campaign = campaign::read_campaign(&env, campaign_id)?;
        Ok(campaign::state_at(&campaign, env.ledger().timestamp()))
    }

    pub fn get_campaign_count(env: Env) -> Result<u64, CrowdfundError> {
        campaign::campaign_count(&env)
    }

    pub fn get_campaigns(env: Env, start_id: CampaignId, limit: u32) -> Result<Vec<Campaign>, CrowdfundError> {
        campaign::page(&env, start_id, limit)
    }
}
