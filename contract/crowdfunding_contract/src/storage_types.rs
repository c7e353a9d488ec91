use soroban_sdk::{contracterror, contracttype, Address, String};

// Instance storage: the singleton config and contract-wide counters
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Token,
    NextCampaignId,
}

// Persistent storage: one entry per campaign
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
}

pub type CampaignId = u64;

/// Process-wide admin configuration. Created once by `initialize`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct AdminConfig {
    pub authority: Address,
    pub paused: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub goal: u64,
    pub raised_amount: u64,
    pub deadline: u64, // Ledger timestamp, donations rejected from here on
}

// Never stored; derived from the campaign fields and ledger time
#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignState {
    Open,
    Funded,
    Settled,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    SystemPaused = 4,
    InvalidGoal = 5,
    InvalidDeadline = 6,
    InvalidAmount = 7,
    CampaignExpired = 8,
    CampaignStillOpen = 9,
    NothingToWithdraw = 10,
    ArithmeticOverflow = 11,
    ArithmeticUnderflow = 12,
    CampaignNotFound = 13,
    TitleTooLong = 14,
    DescriptionTooLong = 15,
    CampaignTooLong = 16,
}

// Constants
pub const MAX_TITLE_LENGTH: u32 = 100;
pub const MAX_DESCRIPTION_LENGTH: u32 = 500;
pub const MAX_CAMPAIGN_DURATION: u64 = 86400 * 30; // 30 days in seconds
pub const MAX_PAGE_SIZE: u32 = 50;
pub const FIRST_CAMPAIGN_ID: CampaignId = 1;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
