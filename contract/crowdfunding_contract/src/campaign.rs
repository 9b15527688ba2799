use soroban_sdk::{log, Address, Env, String};

use crate::events::{emit_campaign_created, CampaignCreatedEvent};
use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Identity of the transfer service fixed at construction.
pub fn token_service(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::TokenService)
}

/// Next id to hand out, which is also the number of campaigns created so far.
pub fn next_campaign_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(0)
}

/// Allocate the next sequential id and store a fresh campaign under it.
pub fn create(
    env: &Env,
    creator: Address,
    title: String,
    details: String,
    goal_amount: u128,
) -> Result<CampaignId, CrowdfundingError> {
    let campaign_id = next_campaign_id(env);
    let next_id = campaign_id
        .checked_add(1)
        .ok_or(CrowdfundingError::Overflow)?;

    let campaign = Campaign {
        id: campaign_id,
        creator: creator.clone(),
        title: title.clone(),
        details,
        goal_amount,
        raised_amount: 0,
        completed: false,
    };

    save(env, &campaign);
    env.storage().instance().set(&DataKey::NextCampaignId, &next_id);
    extend_instance(env);

    log!(env, "campaign created", campaign_id, goal_amount);
    emit_campaign_created(
        env,
        CampaignCreatedEvent {
            creator,
            campaign_id,
            goal_amount,
            title,
        },
    );

    Ok(campaign_id)
}

pub fn lookup(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundingError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundingError::CampaignNotFound)
}

/// Apply `f` to an existing campaign and persist the result. Nothing is
/// written when the campaign is missing or `f` fails.
pub fn update<R>(
    env: &Env,
    campaign_id: CampaignId,
    f: impl FnOnce(&mut Campaign) -> Result<R, CrowdfundingError>,
) -> Result<R, CrowdfundingError> {
    let mut campaign = lookup(env, campaign_id)?;
    let out = f(&mut campaign)?;
    save(env, &campaign);
    Ok(out)
}

pub(crate) fn save(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}
