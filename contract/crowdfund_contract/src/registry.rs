use soroban_sdk::{Address, Env, Vec};

use crate::storage;
use crate::storage_types::{Campaign, CampaignId, PersistentKey};

/// Store a fresh campaign and make it discoverable in one step.
pub fn register(env: &Env, campaign: &Campaign) {
    storage::save_campaign(env, campaign);
    storage::append_id(env, &PersistentKey::Campaigns, campaign.id);
    storage::append_id(
        env,
        &PersistentKey::CreatorCampaigns(campaign.creator.clone()),
        campaign.id,
    );
}

/// Every campaign ever created, oldest first.
pub fn list(env: &Env) -> Vec<CampaignId> {
    storage::load_ids(env, &PersistentKey::Campaigns)
}

pub fn list_by_creator(env: &Env, creator: Address) -> Vec<CampaignId> {
    storage::load_ids(env, &PersistentKey::CreatorCampaigns(creator))
}
