use soroban_sdk::{Address, Env};

use crate::campaign::extend_persistent;
use crate::storage_types::{CampaignId, PersistentKey};

/// Store `amount` as the contributor's latest payment to the campaign,
/// replacing whatever was recorded before.
pub fn record(env: &Env, contributor: &Address, campaign_id: CampaignId, amount: u128) {
    let key = PersistentKey::Contribution(contributor.clone(), campaign_id);
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn last_contribution(env: &Env, contributor: &Address, campaign_id: CampaignId) -> u128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(contributor.clone(), campaign_id))
        .unwrap_or(0)
}
