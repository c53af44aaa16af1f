#![no_std]

mod attestation;
mod coupon;
mod error;
mod events;
mod storage;
mod token;
mod validation;


pub use error::{Error, ErrorKind};
pub use storage::{BondStatus, BondTerms, HolderCheckpoint, ImpactReport, KpiVector};

use coupon::{calculate_mint_cost, coupon_rate, kpi_met};
use events::*;
use storage::{
    close_period, get_bonds_for_sale, get_current_period, get_currency, get_escrow, get_issuer,
    get_last_verified, get_owner, get_report, get_status, get_terms, get_verifier, is_paused,
    require_initialized, set_checkpoint, set_escrow, set_report, set_status, DataKey,
};
use validation::validate_terms;

use soroban_sdk::{contract, contractimpl, token as sac, Address, BytesN, Env, String, Symbol};

#[contract]
pub struct SlbBond;

#[contractimpl]
impl SlbBond {
    // ============================================
    // INITIALIZATION & ROLES
    // ============================================

    /// Initialize the bond program
    ///
    /// `currency` is the token contract escrow, sale proceeds and coupons
    /// are paid in.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, owner: Address, currency: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Currency, &currency);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(&DataKey::CurrentPeriod, &0u32);
        set_status(&env, BondStatus::Created);
        set_escrow(&env, 0);

        Ok(())
    }

    /// Assign issuer and verifier (owner only, repeatable)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `Unauthorized`: Caller is not owner
    pub fn set_roles(env: Env, caller: Address, issuer: Address, verifier: Address) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;
        Self::require_owner(&env, &caller)?;

        env.storage().instance().set(&DataKey::Issuer, &issuer);
        env.storage().instance().set(&DataKey::Verifier, &verifier);

        env.events().publish(
            (Symbol::new(&env, "roles_set"),),
            RolesSetEvent { issuer, verifier },
        );

        Ok(())
    }

    /// Hand the owner (regulator) slot to `new_owner`
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `Unauthorized`: Caller is not owner
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;
        Self::require_owner(&env, &caller)?;

        env.storage().instance().set(&DataKey::Owner, &new_owner);

        env.events().publish(
            (Symbol::new(&env, "ownership_transferred"),),
            OwnershipTransferredEvent {
                previous_owner: caller,
                new_owner,
            },
        );

        Ok(())
    }

    // ============================================
    // ISSUANCE & LIFECYCLE
    // ============================================

    /// Fix the bond terms and move Created -> Issued
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `RoleNotSet`: No issuer assigned
    /// - `Unauthorized`: Caller is not issuer
    /// - `TermsAlreadySet`: Status is not Created
    /// - `InvalidTerms`: Non-positive supply or negative price/rate/funding
    /// - `InvalidTimestamp`: Timestamps out of order
    pub fn set_bond(env: Env, caller: Address, terms: BondTerms) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;
        Self::require_issuer(&env, &caller)?;

        if get_status(&env) != BondStatus::Created {
            return Err(Error::TermsAlreadySet);
        }

        validate_terms(&terms)?;

        env.storage().instance().set(&DataKey::Terms, &terms);
        env.storage()
            .instance()
            .set(&DataKey::BondsForSale, &terms.total_units);
        set_status(&env, BondStatus::Issued);

        env.events().publish(
            (Symbol::new(&env, "bond_issued"),),
            BondIssuedEvent {
                issuer: caller,
                total_units: terms.total_units,
                unit_price: terms.unit_price,
                sale_end: terms.sale_end,
                activation_deadline: terms.activation_deadline,
                maturity: terms.maturity,
            },
        );

        Ok(())
    }

    /// Move Issued -> Active once the sale window has elapsed
    ///
    /// Callable by the issuer or the owner.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `Unauthorized`: Caller is neither issuer nor owner
    /// - `InvalidStatus`: Status is not Issued
    /// - `ActivationTooEarly`: Ledger time is before `sale_end`
    pub fn set_bond_active(env: Env, caller: Address) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;

        let owner = get_owner(&env)?;
        let is_issuer = get_issuer(&env).map(|issuer| issuer == caller).unwrap_or(false);
        if caller != owner && !is_issuer {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();

        if get_status(&env) != BondStatus::Issued {
            return Err(Error::InvalidStatus);
        }

        let terms = get_terms(&env)?;
        let now = env.ledger().timestamp();
        if now < terms.sale_end {
            return Err(Error::ActivationTooEarly);
        }

        set_status(&env, BondStatus::Active);

        env.events().publish(
            (Symbol::new(&env, "bond_activated"),),
            BondActivatedEvent { activated_at: now },
        );

        Ok(())
    }

    // ============================================
    // ESCROW
    // ============================================

    /// Deposit currency into escrow (any caller)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Amount must be positive
    pub fn fund_bond(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        caller.require_auth();

        let balance = get_escrow(&env)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;

        Self::currency_client(&env)?.transfer(&caller, &env.current_contract_address(), &amount);
        set_escrow(&env, balance);

        env.events().publish(
            (Symbol::new(&env, "bond_funded"), caller.clone()),
            FundedEvent {
                funder: caller,
                amount,
                balance,
            },
        );

        Ok(())
    }

    /// Pay escrowed currency out to the issuer
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `Unauthorized`: Caller is not issuer
    /// - `InvalidAmount`: Amount must be positive
    /// - `InsufficientEscrow`: Amount exceeds escrow balance
    pub fn withdraw_money(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;
        Self::require_issuer(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let escrow = get_escrow(&env);
        if amount > escrow {
            return Err(Error::InsufficientEscrow);
        }

        let balance = escrow - amount;
        set_escrow(&env, balance);
        Self::currency_client(&env)?.transfer(&env.current_contract_address(), &caller, &amount);

        env.events().publish(
            (Symbol::new(&env, "funds_withdrawn"), caller.clone()),
            WithdrawnEvent {
                issuer: caller,
                amount,
                balance,
            },
        );

        Ok(())
    }

    // ============================================
    // DEVICE ATTESTATION
    // ============================================

    /// Digest binding a measurement to a device and its reporter
    pub fn hash(env: Env, device_id: String, reporter: Address, v1: i128, v2: i128, v3: i128) -> BytesN<32> {
        attestation::attestation_digest(&env, &device_id, &reporter, &(v1, v2, v3))
    }

    /// Bind `device_id` to the calling issuer; re-registration overwrites
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `Unauthorized`: Caller is not issuer
    pub fn register_device(env: Env, caller: Address, device_id: String) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;
        Self::require_issuer(&env, &caller)?;

        env.storage()
            .persistent()
            .set(&DataKey::Device(device_id.clone()), &caller);

        env.events().publish(
            (Symbol::new(&env, "device_registered"), caller.clone()),
            DeviceRegisteredEvent {
                device_id,
                reporter: caller,
            },
        );

        Ok(())
    }

    /// True iff `hash` was produced for the registered reporter of `device_id`
    /// and exactly these values
    pub fn check_device(env: Env, device_id: String, hash: BytesN<32>, v1: i128, v2: i128, v3: i128) -> bool {
        attestation::check_device(&env, &device_id, &hash, &(v1, v2, v3))
    }

    pub fn device_reporter(env: Env, device_id: String) -> Option<Address> {
        storage::get_device_reporter(&env, &device_id)
    }

    // ============================================
    // IMPACT REPORTING & VERIFICATION
    // ============================================

    /// Submit an attested measurement, opening the next period
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `Unauthorized`: Caller is not issuer
    /// - `BondNotActive`: Bond is not Active
    /// - `DeviceNotRegistered`: Unknown device
    /// - `AttestationMismatch`: Device not registered to caller or digest mismatch
    /// - `AlreadyReported`: Previous report still awaits review
    pub fn report_impact(
        env: Env,
        caller: Address,
        v1: i128,
        v2: i128,
        v3: i128,
        device_id: String,
        hash: BytesN<32>,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;
        Self::require_issuer(&env, &caller)?;

        if get_status(&env) != BondStatus::Active {
            return Err(Error::BondNotActive);
        }

        let reporter =
            storage::get_device_reporter(&env, &device_id).ok_or(Error::DeviceNotRegistered)?;
        let values = (v1, v2, v3);
        if reporter != caller || !attestation::check_device(&env, &device_id, &hash, &values) {
            soroban_sdk::log!(&env, "attestation rejected", device_id.clone(), caller.clone());
            return Err(Error::AttestationMismatch);
        }

        let period = get_current_period(&env);
        if let Some(open) = get_report(&env, period) {
            if !open.reviewed {
                return Err(Error::AlreadyReported);
            }
        }

        let next_period = period.checked_add(1).ok_or(Error::InvalidAmount)?;
        let report = ImpactReport {
            period: next_period,
            values,
            device_id: device_id.clone(),
            reporter,
            reported_at: env.ledger().timestamp(),
            verified: false,
            reviewed: false,
            kpi_met: false,
            coupon_rate: 0,
        };
        set_report(&env, &report);
        env.storage()
            .instance()
            .set(&DataKey::CurrentPeriod, &next_period);

        env.events().publish(
            (Symbol::new(&env, "impact_reported"), next_period),
            ImpactReportedEvent {
                period: next_period,
                values,
                device_id,
            },
        );

        Ok(())
    }

    /// Accept or reject the current period's report
    ///
    /// Fixes the period's coupon rate and extends the cumulative rate index.
    /// Holders are not enumerated: each one accrues the period lazily on
    /// its next balance change or claim, and transfers out of a holder with
    /// units are blocked until then.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `Unauthorized`: Caller is not verifier
    /// - `NotReported`: No report for the current period
    /// - `AlreadyVerified`: Report already reviewed
    pub fn verify_impact(env: Env, caller: Address, accepted: bool) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;
        Self::require_verifier(&env, &caller)?;

        let period = get_current_period(&env);
        let mut report = get_report(&env, period).ok_or(Error::NotReported)?;
        if report.reviewed {
            return Err(Error::AlreadyVerified);
        }

        let terms = get_terms(&env)?;
        let met = kpi_met(&report.values, &terms.kpi_targets);
        let rate = coupon_rate(&terms, accepted, met);

        report.verified = accepted;
        report.reviewed = true;
        report.kpi_met = met;
        report.coupon_rate = rate;
        set_report(&env, &report);
        let rate_index = close_period(&env, period, rate)?;

        env.events().publish(
            (Symbol::new(&env, "impact_verified"), period),
            ImpactVerifiedEvent {
                period,
                accepted,
                kpi_met: met,
                coupon_rate: rate,
                rate_index,
            },
        );

        Ok(())
    }

    // ============================================
    // BOND UNITS
    // ============================================

    /// Buy `quantity` units during the sale window
    ///
    /// Caller pays `quantity * unit_price` of the currency into escrow.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Quantity must be positive
    /// - `SaleClosed`: Bond not Issued or `sale_end` reached
    /// - `ExceedsBondsForSale`: Not enough units left
    pub fn mint_bond(env: Env, caller: Address, quantity: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;

        if quantity <= 0 {
            return Err(Error::InvalidAmount);
        }

        caller.require_auth();

        if get_status(&env) != BondStatus::Issued {
            return Err(Error::SaleClosed);
        }

        let terms = get_terms(&env)?;
        if env.ledger().timestamp() >= terms.sale_end {
            return Err(Error::SaleClosed);
        }

        let for_sale = get_bonds_for_sale(&env);
        if quantity > for_sale {
            return Err(Error::ExceedsBondsForSale);
        }

        let cost = calculate_mint_cost(quantity, terms.unit_price).ok_or(Error::InvalidAmount)?;
        let escrow = get_escrow(&env)
            .checked_add(cost)
            .ok_or(Error::InvalidAmount)?;

        if cost > 0 {
            Self::currency_client(&env)?.transfer(&caller, &env.current_contract_address(), &cost);
        }
        set_escrow(&env, escrow);
        env.storage()
            .instance()
            .set(&DataKey::BondsForSale, &(for_sale - quantity));
        token::mint(&env, &caller, quantity)?;

        env.events().publish(
            (Symbol::new(&env, "mint"), caller.clone()),
            MintEvent {
                to: caller,
                quantity,
                paid: cost,
            },
        );

        Ok(())
    }

    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Amount must not be negative
    pub fn approve(env: Env, caller: Address, spender: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        caller.require_auth();

        token::write_allowance(&env, &caller, &spender, amount);

        env.events().publish(
            (Symbol::new(&env, "approve"), caller.clone()),
            ApprovalEvent {
                owner: caller,
                spender,
                amount,
            },
        );

        Ok(())
    }

    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Amount must be positive
    /// - `UnclaimedFunds`: Caller has an unclaimed coupon
    /// - `InsufficientBalance`: Not enough units
    pub fn transfer(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        caller.require_auth();

        if token::has_unclaimed_funds(&env, &caller) {
            return Err(Error::UnclaimedFunds);
        }

        token::move_units(&env, &caller, &to, amount)?;

        env.events().publish(
            (Symbol::new(&env, "transfer"), caller.clone()),
            TransferEvent {
                from: caller,
                to,
                amount,
            },
        );

        Ok(())
    }

    /// Move units on behalf of `from`, spending the caller's allowance
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAmount`: Amount must be positive
    /// - `UnclaimedFunds`: `from` has an unclaimed coupon
    /// - `InsufficientBalance`: `from` holds too few units
    /// - `InsufficientAllowance`: Allowance too small
    pub fn transfer_from(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        caller.require_auth();

        if token::has_unclaimed_funds(&env, &from) {
            return Err(Error::UnclaimedFunds);
        }

        if token::balance_of(&env, &from) < amount {
            return Err(Error::InsufficientBalance);
        }

        token::spend_allowance(&env, &from, &caller, amount)?;
        token::move_units(&env, &from, &to, amount)?;

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone()),
            TransferEvent { from, to, amount },
        );

        Ok(())
    }

    /// Collect the coupons owed to the caller
    ///
    /// `period` must be a verified period. The payout settles every verified
    /// period up to the latest one, so a single claim clears the
    /// unclaimed-funds block. Returns the amount paid.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `NothingToClaim`: `period` not verified, or nothing owed to caller
    /// - `InsufficientEscrow`: Escrow cannot cover the coupon
    pub fn claim_coupon(env: Env, caller: Address, period: u32) -> Result<i128, Error> {
        require_initialized(&env)?;
        Self::check_not_paused(&env)?;

        caller.require_auth();

        if period == 0 || period > get_last_verified(&env) {
            return Err(Error::NothingToClaim);
        }

        let checkpoint = token::settle(&env, &caller)?;
        if !checkpoint.open {
            return Err(Error::NothingToClaim);
        }

        let amount = checkpoint.owed;
        let escrow = get_escrow(&env);
        if amount > escrow {
            return Err(Error::InsufficientEscrow);
        }

        set_escrow(&env, escrow - amount);
        set_checkpoint(
            &env,
            &caller,
            &HolderCheckpoint {
                settled: checkpoint.settled,
                owed: 0,
                open: false,
            },
        );

        if amount > 0 {
            Self::currency_client(&env)?.transfer(&env.current_contract_address(), &caller, &amount);
        }

        env.events().publish(
            (Symbol::new(&env, "coupon_claimed"), caller.clone()),
            CouponClaimedEvent {
                holder: caller,
                through_period: checkpoint.settled,
                amount,
            },
        );

        Ok(amount)
    }

    // ============================================
    // PAUSE CONTROL
    // ============================================

    /// Freeze every mutating operation (owner only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `ContractPaused`: Already frozen
    pub fn freeze_bond(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::check_not_paused(&env)?;

        env.storage().instance().set(&DataKey::Paused, &true);
        env.events()
            .publish((Symbol::new(&env, "paused"),), caller);
        Ok(())
    }

    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `NotPaused`: Not frozen
    pub fn unfreeze_bond(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        if !is_paused(&env) {
            return Err(Error::NotPaused);
        }

        env.storage().instance().set(&DataKey::Paused, &false);
        env.events()
            .publish((Symbol::new(&env, "unpaused"),), caller);
        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn issuer(env: Env) -> Result<Address, Error> {
        get_issuer(&env)
    }

    pub fn verifier(env: Env) -> Result<Address, Error> {
        get_verifier(&env)
    }

    pub fn currency(env: Env) -> Result<Address, Error> {
        get_currency(&env)
    }

    pub fn paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn status(env: Env) -> BondStatus {
        get_status(&env)
    }

    pub fn get_terms(env: Env) -> Result<BondTerms, Error> {
        get_terms(&env)
    }

    pub fn bonds_for_sale(env: Env) -> i128 {
        get_bonds_for_sale(&env)
    }

    /// Ledger time used for lifecycle gating
    pub fn now(env: Env) -> u64 {
        env.ledger().timestamp()
    }

    /// Escrow balance
    pub fn get_balance(env: Env) -> i128 {
        get_escrow(&env)
    }

    /// Whether escrow covers the committed minimum funding
    pub fn funding_met(env: Env) -> bool {
        match get_terms(&env) {
            Ok(terms) => get_escrow(&env) >= terms.min_funding,
            Err(_) => false,
        }
    }

    pub fn current_period(env: Env) -> u32 {
        get_current_period(&env)
    }

    /// Whether the current period has a report; stays true after review until
    /// the next report opens a new period
    pub fn is_reported(env: Env) -> bool {
        get_report(&env, get_current_period(&env)).is_some()
    }

    pub fn is_verified(env: Env) -> bool {
        get_report(&env, get_current_period(&env))
            .map(|report| report.reviewed && report.verified)
            .unwrap_or(false)
    }

    pub fn get_report(env: Env, period: u32) -> Result<ImpactReport, Error> {
        get_report(&env, period).ok_or(Error::NotReported)
    }

    pub fn balance_of(env: Env, holder: Address) -> i128 {
        token::balance_of(&env, &holder)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        token::allowance(&env, &owner, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        token::total_supply(&env)
    }

    pub fn has_unclaimed_funds(env: Env, holder: Address) -> bool {
        token::has_unclaimed_funds(&env, &holder)
    }

    /// Coupon owed to `holder` through the latest verified period, zero once claimed
    pub fn coupon_due(env: Env, holder: Address) -> i128 {
        token::accrued(&env, &holder)
            .map(|checkpoint| checkpoint.owed)
            .unwrap_or(0)
    }

    pub fn last_verified_period(env: Env) -> u32 {
        get_last_verified(&env)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn check_not_paused(env: &Env) -> Result<(), Error> {
        if is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = get_owner(env)?;
        if *caller != owner {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();
        Ok(())
    }

    fn require_issuer(env: &Env, caller: &Address) -> Result<(), Error> {
        let issuer = get_issuer(env)?;
        if *caller != issuer {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();
        Ok(())
    }

    fn require_verifier(env: &Env, caller: &Address) -> Result<(), Error> {
        let verifier = get_verifier(env)?;
        if *caller != verifier {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();
        Ok(())
    }

    fn currency_client(env: &Env) -> Result<sac::Client<'_>, Error> {
        let currency = get_currency(env)?;
        Ok(sac::Client::new(env, &currency))
    }
}
