use soroban_sdk::{contractclient, log, Address, Env};

use crate::campaign;
use crate::events::{emit_withdrawn, WithdrawnEvent};
use crate::storage_types::{CampaignId, CrowdfundingError};

/// External value-movement capability paid out to on withdrawal.
#[contractclient(name = "TokenTransferServiceClient")]
pub trait TokenTransferService {
    fn transfer(env: Env, recipient: Address, amount: u128) -> bool;
}

/// Pay out everything a campaign currently holds to its creator.
///
/// The balance is zeroed and persisted before the transfer service is
/// called, so a re-entrant call sees an empty campaign. If the service
/// declines or traps the error return makes the host drop the zeroing along
/// with the rest of the invocation.
pub fn withdraw(
    env: &Env,
    withdrawer: &Address,
    campaign_id: CampaignId,
) -> Result<(), CrowdfundingError> {
    let mut campaign = campaign::lookup(env, campaign_id)?;

    if campaign.creator != *withdrawer {
        return Err(CrowdfundingError::Unauthorized);
    }

    if campaign.raised_amount == 0 {
        return Ok(());
    }

    let amount = campaign.raised_amount;
    campaign.raised_amount = 0;
    campaign::save(env, &campaign);
    campaign::extend_instance(env);

    let service = campaign::token_service(env).ok_or(CrowdfundingError::TransferFailed)?;
    let client = TokenTransferServiceClient::new(env, &service);
    match client.try_transfer(withdrawer, &amount) {
        Ok(Ok(true)) => {}
        _ => {
            log!(env, "transfer failed", campaign_id, amount);
            return Err(CrowdfundingError::TransferFailed);
        }
    }

    log!(env, "campaign withdrawn", campaign_id, amount);
    emit_withdrawn(
        env,
        WithdrawnEvent {
            campaign_id,
            to: withdrawer.clone(),
            amount,
        },
    );

    Ok(())
}
