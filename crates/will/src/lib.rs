//! Will domain module (event-sourced).
//!
//! The canonical shape of a will (beneficiaries, assets, release conditions),
//! the validation rules over it, and the owner-only lifecycle that moves a
//! will from draft to review to deployed. Also hosts the auxiliary records
//! other views render (recommendations, memory boxes, time capsules,
//! recovery guardians, price history). Pure domain logic: no IO.

pub mod assets;
pub mod auxiliary;
pub mod beneficiary;
pub mod condition;
pub mod will;

pub use assets::{validate_assets, Assets};
pub use auxiliary::{
    AiRecommendation, CapsuleKind, Impact, MemoryBox, MemoryKind, PriceSeries, RecommendationType,
    SocialRecoveryGuardian, StacksPricePoint, TimeCapsule,
};
pub use beneficiary::{validate_beneficiary, Beneficiary};
pub use condition::{validate_condition, ConditionStatus, WillCondition};
pub use will::{
    validate_will, AddBeneficiary, AddCondition, BeneficiaryAdded, BeneficiaryRemoved,
    BeneficiaryUpdated, BeneficiaryVerified, ConditionAdded, ConditionStatusChanged, CreateWill,
    MarkDeployed, RemoveBeneficiary, ReturnToDraft, ReturnedToDraft, SetAssets, AssetsSet,
    SetConditionStatus, SubmitForReview, SubmittedForReview, UpdateBeneficiary, VerifyBeneficiary,
    Will, WillCommand, WillCreated, WillData, WillDeployed, WillEvent, WillStatus,
};
