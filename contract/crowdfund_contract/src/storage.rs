use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{
    Campaign, CampaignId, DataKey, Error, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn next_campaign_id(env: &Env) -> CampaignId {
    let id: CampaignId = env.storage().instance().get(&DataKey::NextCampaignId).unwrap_or(1);
    env.storage().instance().set(&DataKey::NextCampaignId, &(id + 1));
    extend_instance(env);
    id
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn load_ids(env: &Env, key: &PersistentKey) -> Vec<CampaignId> {
    env.storage().persistent().get(key).unwrap_or(Vec::new(env))
}

pub fn append_id(env: &Env, key: &PersistentKey, campaign_id: CampaignId) {
    let mut ids = load_ids(env, key);
    ids.push_back(campaign_id);
    env.storage().persistent().set(key, &ids);
    extend_persistent(env, key);
}

pub fn contribution_of(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

/// Records a contributor's new cumulative total, enrolling first-time contributors.
pub fn set_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address, total: i128) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    if !env.storage().persistent().has(&key) {
        let list_key = PersistentKey::Contributors(campaign_id);
        let mut contributors = load_contributors(env, campaign_id);
        contributors.push_back(contributor.clone());
        env.storage().persistent().set(&list_key, &contributors);
        extend_persistent(env, &list_key);
    }
    env.storage().persistent().set(&key, &total);
    extend_persistent(env, &key);
}

pub fn load_contributors(env: &Env, campaign_id: CampaignId) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contributors(campaign_id))
        .unwrap_or(Vec::new(env))
}
