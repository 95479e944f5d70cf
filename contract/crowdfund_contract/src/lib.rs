#![no_std]

mod campaign;
mod events;
mod registry;
mod storage;
mod storage_types;
mod token;
mod utils;

#[cfg(test)]
mod mock_token;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use events::{
    CampaignCreatedEvent, CampaignFinalizedEvent, ContributionReceivedEvent, FundsReleasedEvent,
};
pub use storage_types::{Campaign, CampaignId, CampaignStatus, Error};
pub use token::{FundingToken, FundingTokenClient};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Open a new campaign owned by `creator`.
    ///
    /// The campaign accepts contributions immediately and until
    /// `duration_in_days` days from now. `minimum_amount` defaults to zero.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        token: Address,
        creator_name: String,
        title: String,
        description: String,
        image_link: String,
        duration_in_days: u32,
        goal_amount: i128,
        minimum_amount: Option<i128>,
    ) -> Result<CampaignId, Error> {
        creator.require_auth();

        utils::validate_duration(duration_in_days)?;
        utils::validate_goal(goal_amount)?;
        let minimum_amount = utils::resolve_minimum(minimum_amount)?;

        let created_at = utils::get_current_timestamp(&env);
        let raising_deadline = utils::deadline_after(created_at, duration_in_days)?;

        let campaign = Campaign {
            id: storage::next_campaign_id(&env),
            creator: creator.clone(),
            creator_name,
            title,
            description,
            image_link,
            token: token.clone(),
            goal_amount,
            minimum_amount,
            created_at,
            raising_deadline,
            raised_amount: 0,
            is_finalized: false,
            funds_released: false,
        };

        registry::register(&env, &campaign);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id: campaign.id,
                creator,
                token,
                goal_amount,
                raising_deadline,
            },
        );

        Ok(campaign.id)
    }

    /// Every campaign ever created, oldest first.
    pub fn list_campaigns(env: Env) -> Vec<CampaignId> {
        registry::list(&env)
    }

    pub fn campaign_count(env: Env) -> u32 {
        registry::list(&env).len()
    }

    pub fn campaigns_by_creator(env: Env, creator: Address) -> Vec<CampaignId> {
        registry::list_by_creator(&env, creator)
    }

    /// Contribute `amount` of the campaign token.
    ///
    /// `contributor` must have approved this contract for at least `amount`
    /// beforehand. Nothing is recorded unless the token movement succeeds.
    pub fn fund(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();

        let mut campaign = campaign::load_observed(&env, campaign_id)?;
        let (raised_amount, contributor_total) =
            campaign::plan_contribution(&env, &campaign, &contributor, amount)?;

        token::collect(&env, &campaign.token, &contributor, amount)?;

        campaign.raised_amount = raised_amount;
        storage::set_contribution(&env, campaign_id, &contributor, contributor_total);
        storage::save_campaign(&env, &campaign);

        log!(&env, "contribution accepted", campaign_id, amount);

        events::emit_contribution_received(
            &env,
            events::ContributionReceivedEvent {
                campaign_id,
                contributor,
                amount,
                raised_amount,
            },
        );

        Ok(())
    }

    /// Close the funding window. Anyone may call this once the deadline has
    /// passed; repeated calls are no-ops.
    pub fn finalize(env: Env, campaign_id: CampaignId) -> Result<(), Error> {
        let campaign = campaign::load_observed(&env, campaign_id)?;
        if !campaign.is_finalized {
            return Err(Error::NotFinalized);
        }
        Ok(())
    }

    /// Pay everything raised to the creator. Succeeds at most once.
    pub fn release(env: Env, campaign_id: CampaignId, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let mut campaign = campaign::load_observed(&env, campaign_id)?;
        campaign::check_release(&campaign, &caller)?;

        let amount = campaign.raised_amount;
        if amount > 0 {
            token::disburse(&env, &campaign.token, &campaign.creator, amount)?;
        }

        campaign.funds_released = true;
        storage::save_campaign(&env, &campaign);

        log!(&env, "funds released", campaign_id, amount);

        events::emit_funds_released(
            &env,
            events::FundsReleasedEvent {
                campaign_id,
                creator: campaign.creator,
                amount,
            },
        );

        Ok(amount)
    }

    // View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        campaign::load_observed(&env, campaign_id)
    }

    pub fn raised_amount(env: Env, campaign_id: CampaignId) -> Result<i128, Error> {
        Ok(campaign::load_observed(&env, campaign_id)?.raised_amount)
    }

    pub fn is_finalized(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        Ok(campaign::load_observed(&env, campaign_id)?.is_finalized)
    }

    pub fn funds_released(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        Ok(campaign::load_observed(&env, campaign_id)?.funds_released)
    }

    pub fn status(env: Env, campaign_id: CampaignId) -> Result<CampaignStatus, Error> {
        let campaign = campaign::load_observed(&env, campaign_id)?;
        Ok(campaign::status(&campaign))
    }

    /// Cumulative amount `contributor` has put into the campaign.
    pub fn contribution_of(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, Error> {
        campaign::load_observed(&env, campaign_id)?;
        Ok(storage::contribution_of(&env, campaign_id, &contributor))
    }

    /// Contributors in order of first contribution.
    pub fn contributors(env: Env, campaign_id: CampaignId) -> Result<Vec<Address>, Error> {
        campaign::load_observed(&env, campaign_id)?;
        Ok(storage::load_contributors(&env, campaign_id))
    }

    pub fn goal_reached(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        let campaign = campaign::load_observed(&env, campaign_id)?;
        Ok(campaign::goal_reached(&campaign))
    }

    pub fn time_left(env: Env, campaign_id: CampaignId) -> Result<u64, Error> {
        let campaign = campaign::load_observed(&env, campaign_id)?;
        Ok(utils::seconds_until(&env, campaign.raising_deadline))
    }

    /// Contract-wide holding of the campaign's token. Campaigns sharing a
    /// token share one custody balance.
    pub fn custody_balance(env: Env, campaign_id: CampaignId) -> Result<i128, Error> {
        let campaign = campaign::load_observed(&env, campaign_id)?;
        Ok(token::custody_balance(&env, &campaign.token))
    }
}
