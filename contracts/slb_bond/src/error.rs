use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,
    /// Issuer or verifier slot has not been assigned
    RoleNotSet = 3,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller does not hold the role the operation requires
    Unauthorized = 10,

    // ============================================
    // LIFECYCLE / STATE ERRORS (20-39)
    // ============================================
    /// Bond terms can only be set once, while Created
    TermsAlreadySet = 20,
    /// Bond terms have not been set yet
    TermsNotSet = 21,
    /// Operation not valid for the current lifecycle status
    InvalidStatus = 22,
    /// Bond is not Active
    BondNotActive = 23,
    /// Sale window has not elapsed yet
    ActivationTooEarly = 24,
    /// Sale window is over or has not opened
    SaleClosed = 25,
    /// Current period already holds a report awaiting review
    AlreadyReported = 26,
    /// No report to verify for the current period
    NotReported = 27,
    /// Report of the current period was already reviewed
    AlreadyVerified = 28,
    /// Cannot transfer bonds from an account with unclaimed funds
    UnclaimedFunds = 29,
    /// Period not verified, or no coupon owed to the caller
    NothingToClaim = 30,

    // ============================================
    // AMOUNT/BALANCE ERRORS (40-49)
    // ============================================
    /// Amount must be positive (or non-negative for approvals)
    InvalidAmount = 40,
    /// Not enough bond units
    InsufficientBalance = 41,
    /// Spender allowance too small
    InsufficientAllowance = 42,
    /// Escrow holds less currency than requested
    InsufficientEscrow = 43,
    /// Mint quantity exceeds the units left for sale
    ExceedsBondsForSale = 44,

    // ============================================
    // TERM VALIDATION ERRORS (50-59)
    // ============================================
    /// Expected sale_end <= activation_deadline <= maturity
    InvalidTimestamp = 50,
    /// Unit counts, prices or rates out of range
    InvalidTerms = 51,

    // ============================================
    // ATTESTATION ERRORS (60-69)
    // ============================================
    /// No reporter registered for the device
    DeviceNotRegistered = 60,
    /// Supplied digest does not match device, reporter and values
    AttestationMismatch = 61,

    // ============================================
    // OPERATIONAL ERRORS (70-79)
    // ============================================
    /// Contract is paused
    ContractPaused = 70,
    /// Contract is not paused
    NotPaused = 71,
}

/// Coarse classification of [`Error`] codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    State,
    Attestation,
    Paused,
    /// Malformed arguments or terms
    Input,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized => ErrorKind::Authorization,
            Error::DeviceNotRegistered | Error::AttestationMismatch => ErrorKind::Attestation,
            Error::ContractPaused => ErrorKind::Paused,
            Error::InvalidAmount
            | Error::InvalidTimestamp
            | Error::InvalidTerms
            | Error::ExceedsBondsForSale => ErrorKind::Input,
            _ => ErrorKind::State,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::Unauthorized.kind(), ErrorKind::Authorization);
        assert_eq!(Error::TermsAlreadySet.kind(), ErrorKind::State);
        assert_eq!(Error::UnclaimedFunds.kind(), ErrorKind::State);
        assert_eq!(Error::InsufficientEscrow.kind(), ErrorKind::State);
        assert_eq!(Error::AttestationMismatch.kind(), ErrorKind::Attestation);
        assert_eq!(Error::ContractPaused.kind(), ErrorKind::Paused);
        assert_eq!(Error::InvalidTimestamp.kind(), ErrorKind::Input);
    }
}
