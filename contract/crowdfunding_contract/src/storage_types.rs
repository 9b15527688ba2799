use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    TokenService,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(Address, CampaignId), // (Contributor, CampaignID)
}

pub type CampaignId = u64;

/// A funding campaign as held in persistent storage.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub details: String,
    pub goal_amount: u128,
    /// Funds currently held; reset to zero by a withdrawal.
    pub raised_amount: u128,
    /// Latched the first time `raised_amount >= goal_amount`.
    pub completed: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    ZeroAmount = 1,
    CampaignNotFound = 2,
    Unauthorized = 3,
    Overflow = 4,
    TransferFailed = 5,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
