use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub creator: Address,
    pub campaign_id: CampaignId,
    pub goal_amount: u128,
    pub title: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaidToCampaignEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignGoalReachedEvent {
    pub campaign_id: CampaignId,
    pub goal_amount: u128,
}

/// Carries the amount of the triggering contribution, not the running total.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignProgressUpdatedEvent {
    pub campaign_id: CampaignId,
    pub amount: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub campaign_id: CampaignId,
    pub to: Address,
    pub amount: u128,
}

fn topics(env: &Env, name: &str) -> (Symbol, Symbol) {
    (Symbol::new(env, "crowdfund"), Symbol::new(env, name))
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(topics(env, "campaign_created"), event);
}

pub fn emit_paid_to_campaign(env: &Env, event: PaidToCampaignEvent) {
    env.events().publish(topics(env, "paid_to_campaign"), event);
}

pub fn emit_goal_reached(env: &Env, event: CampaignGoalReachedEvent) {
    env.events().publish(topics(env, "goal_reached"), event);
}

pub fn emit_progress_updated(env: &Env, event: CampaignProgressUpdatedEvent) {
    env.events().publish(topics(env, "progress_updated"), event);
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish(topics(env, "withdrawn"), event);
}
