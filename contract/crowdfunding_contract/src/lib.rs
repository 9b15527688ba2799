#![no_std]

mod campaign;
mod contribution;
mod events;
mod payment;
mod storage_types;
mod withdrawal;


use soroban_sdk::{contract, contractimpl, Address, Env, String};
use storage_types::DataKey;

pub use events::*;
pub use storage_types::{Campaign, CampaignId, CrowdfundingError};
pub use withdrawal::{TokenTransferService, TokenTransferServiceClient};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Fix the transfer service used for withdrawals. It cannot be changed later.
    pub fn __constructor(env: Env, token_service: Address) {
        env.storage().instance().set(&DataKey::TokenService, &token_service);
        env.storage().instance().set(&DataKey::NextCampaignId, &0u64);
        campaign::extend_instance(&env);
    }

    /// Open a new campaign owned by `creator` and return its id.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        details: String,
        goal_amount: u128,
    ) -> Result<CampaignId, CrowdfundingError> {
        creator.require_auth();
        campaign::create(&env, creator, title, details, goal_amount)
    }

    /// Contribute `amount` to a campaign. Any identity may pay.
    pub fn pay_campaign(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
        amount: u128,
    ) -> Result<(), CrowdfundingError> {
        contributor.require_auth();
        payment::pay(&env, &contributor, campaign_id, amount)
    }

    /// Move the funds a campaign currently holds to its creator.
    pub fn withdraw_campaign_amount(
        env: Env,
        withdrawer: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CrowdfundingError> {
        withdrawer.require_auth();
        withdrawal::withdraw(&env, &withdrawer, campaign_id)
    }

    pub fn get_campaign_goal(env: Env, campaign_id: CampaignId) -> Result<u128, CrowdfundingError> {
        campaign::lookup(&env, campaign_id).map(|c| c.goal_amount)
    }

    pub fn get_campaign_progress(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<u128, CrowdfundingError> {
        campaign::lookup(&env, campaign_id).map(|c| c.raised_amount)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundingError> {
        campaign::lookup(&env, campaign_id)
    }

    pub fn is_campaign_completed(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<bool, CrowdfundingError> {
        campaign::lookup(&env, campaign_id).map(|c| c.completed)
    }

    /// Latest single payment by `contributor`, or 0 if they never paid.
    pub fn get_contribution(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
    ) -> Result<u128, CrowdfundingError> {
        campaign::lookup(&env, campaign_id)?;
        Ok(contribution::last_contribution(&env, &contributor, campaign_id))
    }

    pub fn campaign_count(env: Env) -> CampaignId {
        campaign::next_campaign_id(&env)
    }

    pub fn token_service(env: Env) -> Option<Address> {
        campaign::token_service(&env)
    }
}
