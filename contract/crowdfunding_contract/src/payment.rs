use soroban_sdk::{log, Address, Env};

use crate::campaign;
use crate::contribution;
use crate::events::*;
use crate::storage_types::{CampaignId, CrowdfundingError};

/// Credit `amount` to a campaign on behalf of `contributor`.
///
/// Completion is edge-triggered: the goal-reached event fires only on the
/// payment that first takes `raised_amount` to or past `goal_amount`.
/// Campaigns keep accepting funds after completion.
pub fn pay(
    env: &Env,
    contributor: &Address,
    campaign_id: CampaignId,
    amount: u128,
) -> Result<(), CrowdfundingError> {
    if amount == 0 {
        return Err(CrowdfundingError::ZeroAmount);
    }

    let (goal_amount, goal_reached) = campaign::update(env, campaign_id, |campaign| {
        campaign.raised_amount = campaign
            .raised_amount
            .checked_add(amount)
            .ok_or(CrowdfundingError::Overflow)?;

        let goal_reached = !campaign.completed && campaign.raised_amount >= campaign.goal_amount;
        if goal_reached {
            campaign.completed = true;
        }
        Ok((campaign.goal_amount, goal_reached))
    })?;

    if goal_reached {
        log!(env, "campaign goal reached", campaign_id, goal_amount);
        emit_goal_reached(
            env,
            CampaignGoalReachedEvent {
                campaign_id,
                goal_amount,
            },
        );
    }

    contribution::record(env, contributor, campaign_id, amount);
    campaign::extend_instance(env);

    emit_paid_to_campaign(
        env,
        PaidToCampaignEvent {
            campaign_id,
            contributor: contributor.clone(),
            amount,
        },
    );
    emit_progress_updated(
        env,
        CampaignProgressUpdatedEvent {
            campaign_id,
            amount,
        },
    );

    Ok(())
}
