//! Workflow creation wizard
//!
//! Four linear steps: basic info, trigger, action and message, review.
//! `next` is gated by the current step's required fields, `back` is not.
//! Saving is only possible from the review step and re-checks every step.

use std::collections::BTreeMap;

use serde::Serialize;
use shared::models::{
    ActionTemplate, Frequency, TriggerTemplate, Workflow, WorkflowStatus,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WizardStep {
    BasicInfo = 1,
    Trigger = 2,
    Action = 3,
    Review = 4,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Trigger => "Trigger",
            Self::Action => "Action",
            Self::Review => "Review",
        }
    }

    fn following(self) -> Self {
        match self {
            Self::BasicInfo => Self::Trigger,
            Self::Trigger => Self::Action,
            Self::Action | Self::Review => Self::Review,
        }
    }

    fn preceding(self) -> Self {
        match self {
            Self::BasicInfo | Self::Trigger => Self::BasicInfo,
            Self::Action => Self::Trigger,
            Self::Review => Self::Action,
        }
    }
}

/// Inputs that carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardField {
    WorkflowName,
    Trigger,
    Action,
    Message,
}

impl WizardField {
    /// Form key the message is shown under
    pub fn key(self) -> &'static str {
        match self {
            Self::WorkflowName => "workflowName",
            Self::Trigger => "trigger",
            Self::Action => "action",
            Self::Message => "message",
        }
    }

    fn step(self) -> WizardStep {
        match self {
            Self::WorkflowName => WizardStep::BasicInfo,
            Self::Trigger => WizardStep::Trigger,
            Self::Action | Self::Message => WizardStep::Action,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Step {} ({}) has missing required fields", .0.number(), .0.title())]
    Incomplete(WizardStep),

    #[error("Workflows can only be saved from the review step")]
    NotOnReview,

    #[error("This workflow is open in view-only mode")]
    ViewOnly,
}

/// Form state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDraft {
    pub name: String,
    pub description: String,
    pub frequency: Frequency,
    pub trigger: Option<TriggerTemplate>,
    pub action: Option<ActionTemplate>,
    pub message: String,
    pub status: WorkflowStatus,
}

#[derive(Debug, Clone)]
pub struct WorkflowWizard {
    step: WizardStep,
    draft: WorkflowDraft,
    errors: BTreeMap<WizardField, String>,
    view_only: bool,
    editing_id: Option<String>,
}

impl Default for WorkflowWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowWizard {
    /// Empty wizard for a new workflow
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: WorkflowDraft::default(),
            errors: BTreeMap::new(),
            view_only: false,
            editing_id: None,
        }
    }

    /// Prefilled wizard editing a stored workflow
    pub fn edit(workflow: &Workflow) -> Self {
        Self {
            draft: WorkflowDraft {
                name: workflow.name.clone(),
                description: workflow.description.clone(),
                frequency: workflow.frequency,
                trigger: workflow.trigger,
                action: workflow.action,
                message: workflow.message.clone(),
                status: workflow.status,
            },
            editing_id: workflow.id.clone(),
            ..Self::new()
        }
    }

    /// Read-only inspection: navigation works, edits and save do not
    pub fn view(workflow: &Workflow) -> Self {
        Self {
            view_only: true,
            ..Self::edit(workflow)
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &WorkflowDraft {
        &self.draft
    }

    pub fn errors(&self) -> &BTreeMap<WizardField, String> {
        &self.errors
    }

    pub fn error(&self, field: WizardField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_view_only(&self) -> bool {
        self.view_only
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    // ==================== edits ====================

    fn edit_field(
        &mut self,
        field: Option<WizardField>,
        apply: impl FnOnce(&mut WorkflowDraft),
    ) -> Result<(), WizardError> {
        if self.view_only {
            return Err(WizardError::ViewOnly);
        }
        apply(&mut self.draft);
        if let Some(field) = field {
            self.errors.remove(&field);
        }
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), WizardError> {
        let name = name.into();
        self.edit_field(Some(WizardField::WorkflowName), |d| d.name = name)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), WizardError> {
        let description = description.into();
        self.edit_field(None, |d| d.description = description)
    }

    pub fn set_frequency(&mut self, frequency: Frequency) -> Result<(), WizardError> {
        self.edit_field(None, |d| d.frequency = frequency)
    }

    pub fn set_status(&mut self, status: WorkflowStatus) -> Result<(), WizardError> {
        self.edit_field(None, |d| d.status = status)
    }

    pub fn select_trigger(&mut self, trigger: TriggerTemplate) -> Result<(), WizardError> {
        self.edit_field(Some(WizardField::Trigger), |d| d.trigger = Some(trigger))
    }

    pub fn select_action(&mut self, action: ActionTemplate) -> Result<(), WizardError> {
        self.edit_field(Some(WizardField::Action), |d| d.action = Some(action))?;
        // 切换到不发消息的动作时，消息不再必填
        if !action.sends_message() {
            self.errors.remove(&WizardField::Message);
        }
        Ok(())
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> Result<(), WizardError> {
        let message = message.into();
        self.edit_field(Some(WizardField::Message), |d| d.message = message)
    }

    // ==================== validation ====================

    fn missing(&self, step: WizardStep) -> Vec<(WizardField, &'static str)> {
        let d = &self.draft;
        let mut missing = Vec::new();
        match step {
            WizardStep::BasicInfo => {
                if d.name.trim().is_empty() {
                    missing.push((WizardField::WorkflowName, "Workflow name is required"));
                }
            }
            WizardStep::Trigger => {
                if d.trigger.is_none() {
                    missing.push((WizardField::Trigger, "Please select a trigger"));
                }
            }
            WizardStep::Action => {
                if d.action.is_none() {
                    missing.push((WizardField::Action, "Please select an action"));
                }
                let needs_message = d.action.is_none_or(|a| a.sends_message());
                if needs_message && d.message.trim().is_empty() {
                    missing.push((WizardField::Message, "Message is required"));
                }
            }
            WizardStep::Review => {}
        }
        missing
    }

    /// Check one step's required fields, replacing that step's errors
    pub fn validate_step(&mut self, step: WizardStep) -> bool {
        self.errors.retain(|field, _| field.step() != step);
        let missing = self.missing(step);
        let ok = missing.is_empty();
        for (field, message) in missing {
            self.errors.insert(field, message.to_string());
        }
        ok
    }

    // ==================== navigation ====================

    /// Advance one step if the current one is complete
    ///
    /// On the review step this is a no-op.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        if !self.view_only && !self.validate_step(self.step) {
            return Err(WizardError::Incomplete(self.step));
        }
        self.step = self.step.following();
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.preceding();
        self.step
    }

    /// Emit the finished workflow
    ///
    /// On failure the wizard jumps back to the first incomplete step.
    pub fn save(&mut self) -> Result<Workflow, WizardError> {
        if self.view_only {
            return Err(WizardError::ViewOnly);
        }
        if self.step != WizardStep::Review {
            return Err(WizardError::NotOnReview);
        }
        for step in [WizardStep::BasicInfo, WizardStep::Trigger, WizardStep::Action] {
            if !self.validate_step(step) {
                self.step = step;
                return Err(WizardError::Incomplete(step));
            }
        }

        let d = &self.draft;
        Ok(Workflow {
            id: self.editing_id.clone(),
            name: d.name.trim().to_string(),
            description: d.description.trim().to_string(),
            frequency: d.frequency,
            trigger: d.trigger,
            action: d.action,
            message: d.message.clone(),
            status: d.status,
        })
    }
}
