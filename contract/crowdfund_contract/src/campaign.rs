use soroban_sdk::{log, Address, Env};

use crate::events;
use crate::storage;
use crate::storage_types::*;
use crate::utils;

/// Flip `is_finalized` once the raising window has closed.
///
/// Returns `true` only for the call that performed the transition.
pub fn observe_deadline(env: &Env, campaign: &mut Campaign) -> bool {
    if campaign.is_finalized || !utils::has_arrived(env, campaign.raising_deadline) {
        return false;
    }
    campaign.is_finalized = true;
    true
}

/// Load a campaign with the deadline already observed.
///
/// Every entry point goes through here, so finalization is persisted by
/// whichever call first sees the deadline behind it.
pub fn load_observed(env: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    let mut campaign = storage::load_campaign(env, campaign_id)?;

    if observe_deadline(env, &mut campaign) {
        storage::save_campaign(env, &campaign);
        log!(env, "campaign finalized", campaign_id);
        events::emit_campaign_finalized(
            env,
            events::CampaignFinalizedEvent {
                campaign_id,
                raised_amount: campaign.raised_amount,
                finalized_at: utils::get_current_timestamp(env),
            },
        );
    }

    Ok(campaign)
}

pub fn status(campaign: &Campaign) -> CampaignStatus {
    if campaign.funds_released {
        CampaignStatus::Released
    } else if campaign.is_finalized {
        CampaignStatus::Finalized
    } else {
        CampaignStatus::Open
    }
}

/// New `(raised_amount, contributor_total)` if `amount` may be accepted.
pub fn plan_contribution(
    env: &Env,
    campaign: &Campaign,
    contributor: &Address,
    amount: i128,
) -> Result<(i128, i128), Error> {
    if utils::has_arrived(env, campaign.raising_deadline) {
        return Err(Error::DeadlinePassed);
    }

    // Zero is refused even when the minimum is zero.
    if amount <= 0 || amount < campaign.minimum_amount {
        return Err(Error::BelowMinimum);
    }

    let raised_amount = campaign
        .raised_amount
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let contributor_total = storage::contribution_of(env, campaign.id, contributor)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    Ok((raised_amount, contributor_total))
}

/// Release guard, ordered so that timing and double-release are reported
/// regardless of who is calling.
pub fn check_release(campaign: &Campaign, caller: &Address) -> Result<(), Error> {
    if !campaign.is_finalized {
        return Err(Error::NotFinalized);
    }
    if campaign.funds_released {
        return Err(Error::AlreadyReleased);
    }
    if *caller != campaign.creator {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn goal_reached(campaign: &Campaign) -> bool {
    campaign.raised_amount >= campaign.goal_amount
}
