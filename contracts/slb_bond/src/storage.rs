use soroban_sdk::{contracttype, Address, Env, String};

use crate::error::Error;

// Coupon rates are whole percent of the unit price
pub const RATE_DENOMINATOR: i128 = 100;

/// Ordered triple of KPI values (targets or a measurement)
pub type KpiVector = (i128, i128, i128);

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BondStatus {
    /// Roles may be assigned, terms not yet set
    Created = 0,
    /// Terms fixed, units on sale until `sale_end`
    Issued = 1,
    /// Sale window elapsed, impact reporting open
    Active = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondTerms {
    /// Free text, usually naming the KPI
    pub description: String,
    /// Thresholds a measurement must reach for the base coupon
    pub kpi_targets: KpiVector,
    /// Units issuable in total
    pub total_units: i128,
    /// Coupon rate (percent) when the KPI is met
    pub base_coupon: i128,
    /// Coupon rate (percent) when the KPI is missed or the report rejected
    pub step_up_coupon: i128,
    /// Currency paid per unit at mint, also the coupon base
    pub unit_price: i128,
    /// Escrow level the issuer commits to hold
    pub min_funding: i128,
    /// End of the sale window; activation is possible from here on
    pub sale_end: u64,
    pub activation_deadline: u64,
    pub maturity: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImpactReport {
    pub period: u32,
    pub values: KpiVector,
    pub device_id: String,
    pub reporter: Address,
    pub reported_at: u64,
    /// Verifier decision, meaningful once `reviewed`
    pub verified: bool,
    pub reviewed: bool,
    pub kpi_met: bool,
    /// Rate applied to the period, zero until reviewed
    pub coupon_rate: i128,
}

/// Per-holder coupon accounting
///
/// Balances only change after the holder is settled up to the latest
/// verified period, so the units held over `(settled, latest]` are the
/// current balance.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HolderCheckpoint {
    /// Last verified period already accounted for
    pub settled: u32,
    /// Currency owed for periods up to `settled`, not yet paid
    pub owed: i128,
    /// Held units during a verified period and has not claimed since
    pub open: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owner,
    Issuer,
    Verifier,
    Currency,
    Paused,
    Status,
    Terms,
    BondsForSale,
    Escrow,
    CurrentPeriod,
    Report(u32),
    Device(String),             // device_id -> reporter
    Balance(Address),
    Allowance(Address, Address), // (owner, spender)
    TotalSupply,
    LastVerified,
    RateIndex(u32), // period -> sum of coupon rates through that period
    Checkpoint(Address),
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !env.storage().instance().has(&DataKey::Initialized) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn get_issuer(env: &Env) -> Result<Address, Error> {
    require_initialized(env)?;
    env.storage()
        .instance()
        .get(&DataKey::Issuer)
        .ok_or(Error::RoleNotSet)
}

pub fn get_verifier(env: &Env) -> Result<Address, Error> {
    require_initialized(env)?;
    env.storage()
        .instance()
        .get(&DataKey::Verifier)
        .ok_or(Error::RoleNotSet)
}

pub fn get_currency(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Currency)
        .ok_or(Error::NotInitialized)
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn get_status(env: &Env) -> BondStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(BondStatus::Created)
}

pub fn set_status(env: &Env, status: BondStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_terms(env: &Env) -> Result<BondTerms, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Terms)
        .ok_or(Error::TermsNotSet)
}

pub fn get_escrow(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get::<DataKey, i128>(&DataKey::Escrow)
        .unwrap_or(0)
}

pub fn set_escrow(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Escrow, &amount);
}

pub fn get_bonds_for_sale(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get::<DataKey, i128>(&DataKey::BondsForSale)
        .unwrap_or(0)
}

pub fn get_current_period(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::CurrentPeriod)
        .unwrap_or(0)
}

pub fn get_report(env: &Env, period: u32) -> Option<ImpactReport> {
    env.storage().persistent().get(&DataKey::Report(period))
}

pub fn set_report(env: &Env, report: &ImpactReport) {
    env.storage()
        .persistent()
        .set(&DataKey::Report(report.period), report);
}

pub fn get_device_reporter(env: &Env, device_id: &String) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Device(device_id.clone()))
}

pub fn get_last_verified(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::LastVerified)
        .unwrap_or(0)
}

pub fn get_rate_index(env: &Env, period: u32) -> i128 {
    env.storage()
        .persistent()
        .get::<DataKey, i128>(&DataKey::RateIndex(period))
        .unwrap_or(0)
}

/// Record `period` as verified, extending the cumulative rate index
pub fn close_period(env: &Env, period: u32, rate: i128) -> Result<i128, Error> {
    let index = get_rate_index(env, period.saturating_sub(1))
        .checked_add(rate)
        .ok_or(Error::InvalidAmount)?;
    env.storage()
        .persistent()
        .set(&DataKey::RateIndex(period), &index);
    env.storage().instance().set(&DataKey::LastVerified, &period);
    Ok(index)
}

pub fn get_checkpoint(env: &Env, holder: &Address) -> HolderCheckpoint {
    env.storage()
        .persistent()
        .get(&DataKey::Checkpoint(holder.clone()))
        .unwrap_or_default()
}

pub fn set_checkpoint(env: &Env, holder: &Address, checkpoint: &HolderCheckpoint) {
    let key = DataKey::Checkpoint(holder.clone());
    if *checkpoint == HolderCheckpoint::default() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, checkpoint);
    }
}
