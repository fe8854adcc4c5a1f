use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartwill_auth::Role;
use smartwill_core::{
    Aggregate, AggregateRoot, DomainError, DomainResult, PrincipalId, ValidationError, ValidationErrors,
    ValidationResult, WillId,
};
use smartwill_events::Event;

use crate::{
    validate_assets, validate_beneficiary, validate_condition, Assets, Beneficiary,
    ConditionStatus, WillCondition,
};

/// Total allocations within this distance of 100 are treated as exactly 100.
const ALLOCATION_TOLERANCE: f64 = 1e-9;

/// The will document: who receives what, from which holdings, under which conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WillData {
    pub beneficiaries: Vec<Beneficiary>,
    pub assets: Assets,
    pub conditions: Vec<WillCondition>,
}

impl WillData {
    /// Sum of all beneficiary percentages.
    pub fn total_allocated(&self) -> f64 {
        self.beneficiaries.iter().map(|b| b.percentage).sum()
    }

    /// Share of the estate not yet assigned (never negative).
    pub fn unallocated(&self) -> f64 {
        (100.0 - self.total_allocated()).max(0.0)
    }

    pub fn beneficiary(&self, id: &str) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.id == id)
    }

    pub fn active_conditions(&self) -> impl Iterator<Item = &WillCondition> {
        self.conditions.iter().filter(|c| c.is_active())
    }
}

/// Validate a whole will, collecting every problem.
///
/// Child errors are re-rooted (`beneficiaries[1].percentage`, `assets.nfts`,
/// `conditions[0].type`); an over-allocated estate adds one error on
/// `beneficiaries`.
pub fn validate_will(will: &WillData) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    for (i, beneficiary) in will.beneficiaries.iter().enumerate() {
        let siblings = will
            .beneficiaries
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, b)| b);
        errors.absorb(
            validate_beneficiary(beneficiary, siblings),
            Some(&format!("beneficiaries[{i}]")),
        );
    }

    let total = will.total_allocated();
    if total > 100.0 + ALLOCATION_TOLERANCE {
        errors.push(
            "beneficiaries",
            format!("total allocation is {total}%, which exceeds 100%"),
        );
    }

    errors.absorb(validate_assets(&will.assets), Some("assets"));

    for (i, condition) in will.conditions.iter().enumerate() {
        errors.absorb(
            validate_condition(condition),
            Some(&format!("conditions[{i}]")),
        );
    }

    errors.into_result()
}

/// Will lifecycle.
///
/// `Draft -> Review` requires a valid will; `Review -> Draft` lets the owner
/// keep editing; `Review -> Deployed` is recorded once the external
/// deployment has happened. `Deployed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WillStatus {
    Draft,
    Review,
    Deployed,
}

/// Aggregate root: Will.
#[derive(Debug, Clone, PartialEq)]
pub struct Will {
    id: WillId,
    owner: Option<PrincipalId>,
    status: WillStatus,
    data: WillData,
    deployment_ref: Option<String>,
    version: u64,
    created: bool,
}

impl Will {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: WillId) -> Self {
        Self {
            id,
            owner: None,
            status: WillStatus::Draft,
            data: WillData::default(),
            deployment_ref: None,
            version: 0,
            created: false,
        }
    }

    pub fn owner(&self) -> Option<PrincipalId> {
        self.owner
    }

    pub fn status(&self) -> WillStatus {
        self.status
    }

    pub fn data(&self) -> &WillData {
        &self.data
    }

    pub fn deployment_ref(&self) -> Option<&str> {
        self.deployment_ref.as_deref()
    }

    pub fn is_editable(&self) -> bool {
        self.created && self.status == WillStatus::Draft
    }
}

impl AggregateRoot for Will {
    type Id = WillId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWill {
    pub will_id: WillId,
    pub owner: PrincipalId,
    pub actor: Role,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddBeneficiary {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    pub beneficiary: Beneficiary,
    pub occurred_at: DateTime<Utc>,
}

/// Replace the beneficiary with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBeneficiary {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    pub beneficiary: Beneficiary,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveBeneficiary {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    pub beneficiary_id: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyBeneficiary {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    pub beneficiary_id: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetAssets {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    pub assets: Assets,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddCondition {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    pub condition: WillCondition,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetConditionStatus {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    /// Position in `WillData::conditions`.
    pub index: usize,
    pub status: ConditionStatus,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitForReview {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnToDraft {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    pub occurred_at: DateTime<Utc>,
}

/// Record a deployment performed by the external deployment service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDeployed {
    pub will_id: WillId,
    pub actor: Role,
    pub actor_id: PrincipalId,
    /// Opaque reference returned by the deployment service (e.g. a tx id).
    pub deployment_ref: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WillCommand {
    CreateWill(CreateWill),
    AddBeneficiary(AddBeneficiary),
    UpdateBeneficiary(UpdateBeneficiary),
    RemoveBeneficiary(RemoveBeneficiary),
    VerifyBeneficiary(VerifyBeneficiary),
    SetAssets(SetAssets),
    AddCondition(AddCondition),
    SetConditionStatus(SetConditionStatus),
    SubmitForReview(SubmitForReview),
    ReturnToDraft(ReturnToDraft),
    MarkDeployed(MarkDeployed),
}

impl WillCommand {
    fn actor(&self) -> Role {
        match self {
            WillCommand::CreateWill(c) => c.actor,
            WillCommand::AddBeneficiary(c) => c.actor,
            WillCommand::UpdateBeneficiary(c) => c.actor,
            WillCommand::RemoveBeneficiary(c) => c.actor,
            WillCommand::VerifyBeneficiary(c) => c.actor,
            WillCommand::SetAssets(c) => c.actor,
            WillCommand::AddCondition(c) => c.actor,
            WillCommand::SetConditionStatus(c) => c.actor,
            WillCommand::SubmitForReview(c) => c.actor,
            WillCommand::ReturnToDraft(c) => c.actor,
            WillCommand::MarkDeployed(c) => c.actor,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WillCreated {
    pub will_id: WillId,
    pub owner: PrincipalId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryAdded {
    pub will_id: WillId,
    pub beneficiary: Beneficiary,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryUpdated {
    pub will_id: WillId,
    pub beneficiary: Beneficiary,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryRemoved {
    pub will_id: WillId,
    pub beneficiary_id: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryVerified {
    pub will_id: WillId,
    pub beneficiary_id: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsSet {
    pub will_id: WillId,
    pub assets: Assets,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionAdded {
    pub will_id: WillId,
    pub condition: WillCondition,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionStatusChanged {
    pub will_id: WillId,
    pub index: usize,
    pub status: ConditionStatus,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedForReview {
    pub will_id: WillId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnedToDraft {
    pub will_id: WillId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WillDeployed {
    pub will_id: WillId,
    pub deployment_ref: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WillEvent {
    WillCreated(WillCreated),
    BeneficiaryAdded(BeneficiaryAdded),
    BeneficiaryUpdated(BeneficiaryUpdated),
    BeneficiaryRemoved(BeneficiaryRemoved),
    BeneficiaryVerified(BeneficiaryVerified),
    AssetsSet(AssetsSet),
    ConditionAdded(ConditionAdded),
    ConditionStatusChanged(ConditionStatusChanged),
    SubmittedForReview(SubmittedForReview),
    ReturnedToDraft(ReturnedToDraft),
    WillDeployed(WillDeployed),
}

impl Event for WillEvent {
    fn event_type(&self) -> &'static str {
        match self {
            WillEvent::WillCreated(_) => "will.created",
            WillEvent::BeneficiaryAdded(_) => "will.beneficiary.added",
            WillEvent::BeneficiaryUpdated(_) => "will.beneficiary.updated",
            WillEvent::BeneficiaryRemoved(_) => "will.beneficiary.removed",
            WillEvent::BeneficiaryVerified(_) => "will.beneficiary.verified",
            WillEvent::AssetsSet(_) => "will.assets.set",
            WillEvent::ConditionAdded(_) => "will.condition.added",
            WillEvent::ConditionStatusChanged(_) => "will.condition.status_changed",
            WillEvent::SubmittedForReview(_) => "will.submitted_for_review",
            WillEvent::ReturnedToDraft(_) => "will.returned_to_draft",
            WillEvent::WillDeployed(_) => "will.deployed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            WillEvent::WillCreated(e) => e.occurred_at,
            WillEvent::BeneficiaryAdded(e) => e.occurred_at,
            WillEvent::BeneficiaryUpdated(e) => e.occurred_at,
            WillEvent::BeneficiaryRemoved(e) => e.occurred_at,
            WillEvent::BeneficiaryVerified(e) => e.occurred_at,
            WillEvent::AssetsSet(e) => e.occurred_at,
            WillEvent::ConditionAdded(e) => e.occurred_at,
            WillEvent::ConditionStatusChanged(e) => e.occurred_at,
            WillEvent::SubmittedForReview(e) => e.occurred_at,
            WillEvent::ReturnedToDraft(e) => e.occurred_at,
            WillEvent::WillDeployed(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Will {
    type Command = WillCommand;
    type Event = WillEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            WillEvent::WillCreated(e) => {
                self.id = e.will_id;
                self.owner = Some(e.owner);
                self.status = WillStatus::Draft;
                self.data = WillData::default();
                self.created = true;
            }
            WillEvent::BeneficiaryAdded(e) => {
                self.data.beneficiaries.push(e.beneficiary.clone());
            }
            WillEvent::BeneficiaryUpdated(e) => {
                if let Some(b) = self
                    .data
                    .beneficiaries
                    .iter_mut()
                    .find(|b| b.id == e.beneficiary.id)
                {
                    *b = e.beneficiary.clone();
                }
            }
            WillEvent::BeneficiaryRemoved(e) => {
                self.data.beneficiaries.retain(|b| b.id != e.beneficiary_id);
            }
            WillEvent::BeneficiaryVerified(e) => {
                if let Some(b) = self
                    .data
                    .beneficiaries
                    .iter_mut()
                    .find(|b| b.id == e.beneficiary_id)
                {
                    b.verified = true;
                }
            }
            WillEvent::AssetsSet(e) => {
                self.data.assets = e.assets.clone();
            }
            WillEvent::ConditionAdded(e) => {
                self.data.conditions.push(e.condition.clone());
            }
            WillEvent::ConditionStatusChanged(e) => {
                if let Some(c) = self.data.conditions.get_mut(e.index) {
                    c.status = e.status;
                }
            }
            WillEvent::SubmittedForReview(_) => {
                self.status = WillStatus::Review;
            }
            WillEvent::ReturnedToDraft(_) => {
                self.status = WillStatus::Draft;
            }
            WillEvent::WillDeployed(e) => {
                self.status = WillStatus::Deployed;
                self.deployment_ref = Some(e.deployment_ref.clone());
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        // Only the owner edits or advances a will; heirs and verifiers read.
        match command.actor() {
            Role::Owner => {}
            Role::Heir | Role::Verifier => return Err(DomainError::Unauthorized),
        }

        match command {
            WillCommand::CreateWill(cmd) => self.handle_create(cmd),
            WillCommand::AddBeneficiary(cmd) => self.handle_add_beneficiary(cmd),
            WillCommand::UpdateBeneficiary(cmd) => self.handle_update_beneficiary(cmd),
            WillCommand::RemoveBeneficiary(cmd) => self.handle_remove_beneficiary(cmd),
            WillCommand::VerifyBeneficiary(cmd) => self.handle_verify_beneficiary(cmd),
            WillCommand::SetAssets(cmd) => self.handle_set_assets(cmd),
            WillCommand::AddCondition(cmd) => self.handle_add_condition(cmd),
            WillCommand::SetConditionStatus(cmd) => self.handle_set_condition_status(cmd),
            WillCommand::SubmitForReview(cmd) => self.handle_submit(cmd),
            WillCommand::ReturnToDraft(cmd) => self.handle_return_to_draft(cmd),
            WillCommand::MarkDeployed(cmd) => self.handle_mark_deployed(cmd),
        }
    }
}

impl Will {
    fn ensure_existing(&self, will_id: WillId, actor_id: PrincipalId) -> DomainResult<()> {
        if !self.created {
            return Err(DomainError::not_found("will"));
        }
        if self.id != will_id {
            return Err(DomainError::invariant("will_id mismatch"));
        }
        if self.owner != Some(actor_id) {
            return Err(DomainError::Unauthorized);
        }
        Ok(())
    }

    fn ensure_draft(&self) -> DomainResult<()> {
        match self.status {
            WillStatus::Draft => Ok(()),
            WillStatus::Review => Err(DomainError::conflict(
                "will is under review; return it to draft before editing",
            )),
            WillStatus::Deployed => Err(DomainError::conflict("will is deployed and can no longer change")),
        }
    }

    fn ensure_beneficiary(&self, id: &str) -> DomainResult<&Beneficiary> {
        self.data
            .beneficiary(id)
            .ok_or_else(|| DomainError::not_found(format!("beneficiary '{id}'")))
    }

    fn handle_create(&self, cmd: &CreateWill) -> DomainResult<Vec<WillEvent>> {
        if self.created {
            return Err(DomainError::conflict("will already exists"));
        }

        Ok(vec![WillEvent::WillCreated(WillCreated {
            will_id: cmd.will_id,
            owner: cmd.owner,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_add_beneficiary(&self, cmd: &AddBeneficiary) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        self.ensure_draft()?;
        validate_beneficiary(&cmd.beneficiary, &self.data.beneficiaries)?;

        Ok(vec![WillEvent::BeneficiaryAdded(BeneficiaryAdded {
            will_id: cmd.will_id,
            beneficiary: cmd.beneficiary.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_update_beneficiary(
        &self,
        cmd: &UpdateBeneficiary,
    ) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        self.ensure_draft()?;
        self.ensure_beneficiary(&cmd.beneficiary.id)?;

        let siblings = self
            .data
            .beneficiaries
            .iter()
            .filter(|b| b.id != cmd.beneficiary.id);
        validate_beneficiary(&cmd.beneficiary, siblings)?;

        Ok(vec![WillEvent::BeneficiaryUpdated(BeneficiaryUpdated {
            will_id: cmd.will_id,
            beneficiary: cmd.beneficiary.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_beneficiary(
        &self,
        cmd: &RemoveBeneficiary,
    ) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        self.ensure_draft()?;
        self.ensure_beneficiary(&cmd.beneficiary_id)?;

        Ok(vec![WillEvent::BeneficiaryRemoved(BeneficiaryRemoved {
            will_id: cmd.will_id,
            beneficiary_id: cmd.beneficiary_id.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_verify_beneficiary(
        &self,
        cmd: &VerifyBeneficiary,
    ) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        self.ensure_draft()?;
        if self.ensure_beneficiary(&cmd.beneficiary_id)?.verified {
            return Err(DomainError::conflict(format!(
                "beneficiary '{}' is already verified",
                cmd.beneficiary_id
            )));
        }

        Ok(vec![WillEvent::BeneficiaryVerified(BeneficiaryVerified {
            will_id: cmd.will_id,
            beneficiary_id: cmd.beneficiary_id.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_set_assets(&self, cmd: &SetAssets) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        self.ensure_draft()?;
        validate_assets(&cmd.assets)?;

        Ok(vec![WillEvent::AssetsSet(AssetsSet {
            will_id: cmd.will_id,
            assets: cmd.assets.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_add_condition(&self, cmd: &AddCondition) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        self.ensure_draft()?;
        validate_condition(&cmd.condition)?;

        Ok(vec![WillEvent::ConditionAdded(ConditionAdded {
            will_id: cmd.will_id,
            condition: cmd.condition.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_set_condition_status(
        &self,
        cmd: &SetConditionStatus,
    ) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        self.ensure_draft()?;
        let condition = self
            .data
            .conditions
            .get(cmd.index)
            .ok_or_else(|| DomainError::not_found(format!("condition #{}", cmd.index)))?;
        if condition.status == cmd.status {
            return Err(DomainError::conflict(format!(
                "condition #{} already has that status",
                cmd.index
            )));
        }

        Ok(vec![WillEvent::ConditionStatusChanged(ConditionStatusChanged {
            will_id: cmd.will_id,
            index: cmd.index,
            status: cmd.status,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_submit(&self, cmd: &SubmitForReview) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        self.ensure_draft()?;
        if self.data.beneficiaries.is_empty() {
            return Err(DomainError::invariant("a will needs at least one beneficiary"));
        }
        validate_will(&self.data)?;

        Ok(vec![WillEvent::SubmittedForReview(SubmittedForReview {
            will_id: cmd.will_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_return_to_draft(&self, cmd: &ReturnToDraft) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        if self.status != WillStatus::Review {
            return Err(DomainError::conflict("only a will under review can return to draft"));
        }

        Ok(vec![WillEvent::ReturnedToDraft(ReturnedToDraft {
            will_id: cmd.will_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_mark_deployed(&self, cmd: &MarkDeployed) -> DomainResult<Vec<WillEvent>> {
        self.ensure_existing(cmd.will_id, cmd.actor_id)?;
        if self.status != WillStatus::Review {
            return Err(DomainError::conflict("only a reviewed will can be deployed"));
        }
        if cmd.deployment_ref.trim().is_empty() {
            return Err(DomainError::validation(ValidationError::new(
                "deploymentRef",
                "cannot be empty",
            )));
        }

        Ok(vec![WillEvent::WillDeployed(WillDeployed {
            will_id: cmd.will_id,
            deployment_ref: cmd.deployment_ref.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
