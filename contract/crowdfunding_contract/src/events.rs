use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct InitializedEvent {
    pub authority: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PauseToggledEvent {
    pub authority: Address,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: u64,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DonationReceivedEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub amount: u64,
    pub raised_amount: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: u64,
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    env.events().publish((Symbol::new(env, "initialized"),), event);
}

pub fn emit_pause_toggled(env: &Env, event: PauseToggledEvent) {
    env.events().publish((Symbol::new(env, "pause_toggled"),), event);
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events().publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events().publish((Symbol::new(env, "funds_withdrawn"),), event);
}
