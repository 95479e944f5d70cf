use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub token: Address,
    pub goal_amount: i128,
    pub raising_deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionReceivedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub raised_amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignFinalizedEvent {
    pub campaign_id: CampaignId,
    pub raised_amount: i128,
    pub finalized_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsReleasedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_contribution_received(env: &Env, event: ContributionReceivedEvent) {
    env.events().publish(
        (Symbol::new(env, "contribution_received"),),
        event,
    );
}

pub fn emit_campaign_finalized(env: &Env, event: CampaignFinalizedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_finalized"),),
        event,
    );
}

pub fn emit_funds_released(env: &Env, event: FundsReleasedEvent) {
    env.events().publish(
        (Symbol::new(env, "funds_released"),),
        event,
    );
}
