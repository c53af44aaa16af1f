use soroban_sdk::{contracttype, Address, String};

use crate::storage::KpiVector;

#[contracttype]
#[derive(Clone, Debug)]
pub struct RolesSetEvent {
    pub issuer: Address,
    pub verifier: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BondIssuedEvent {
    pub issuer: Address,
    pub total_units: i128,
    pub unit_price: i128,
    pub sale_end: u64,
    pub activation_deadline: u64,
    pub maturity: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BondActivatedEvent {
    pub activated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct WithdrawnEvent {
    pub issuer: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DeviceRegisteredEvent {
    pub device_id: String,
    pub reporter: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ImpactReportedEvent {
    pub period: u32,
    pub values: KpiVector,
    pub device_id: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ImpactVerifiedEvent {
    pub period: u32,
    pub accepted: bool,
    pub kpi_met: bool,
    pub coupon_rate: i128,
    /// Sum of coupon rates through this period
    pub rate_index: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct MintEvent {
    pub to: Address,
    pub quantity: i128,
    pub paid: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ApprovalEvent {
    pub owner: Address,
    pub spender: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct CouponClaimedEvent {
    pub holder: Address,
    /// Last verified period covered by the payout
    pub through_period: u32,
    pub amount: i128,
}
