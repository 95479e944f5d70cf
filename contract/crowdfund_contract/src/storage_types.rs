use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaigns,
    CreatorCampaigns(Address),
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
    Contributors(CampaignId),
}

pub type CampaignId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Open,
    Finalized,
    Released,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub creator_name: String,
    pub title: String,
    pub description: String,
    pub image_link: String,
    pub token: Address,
    pub goal_amount: i128,
    pub minimum_amount: i128,
    pub created_at: u64,
    pub raising_deadline: u64, // Contributions close at this timestamp
    pub raised_amount: i128,
    pub is_finalized: bool,
    pub funds_released: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidParameters = 1,
    DeadlinePassed = 2,
    BelowMinimum = 3,
    TransferFailed = 4,
    NotFinalized = 5,
    AlreadyReleased = 6,
    Unauthorized = 7,
    CampaignNotFound = 8,
    Overflow = 9,
}

// Constants
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
