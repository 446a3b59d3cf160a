//! Command-line interface
//!
//! Every command prints one JSON document on stdout; logs go to stderr.

use anyhow::Context;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use gymdesk_client::HttpClient;
use serde::Serialize;
use serde_json::{Value, json};
use shared::models::{ActionTemplate, Frequency, PayrollApprove, TriggerTemplate, WorkflowStatus};

use crate::services::DashboardService;
use crate::workflow::{WizardError, WizardStep, WorkflowWizard};
use crate::{AppError, Config};

#[derive(Debug, Parser)]
#[command(name = "gymdesk")]
#[command(about = "Gym admin dashboard: KPIs, reports, payroll and follow-up automation")]
#[command(version)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "GYMDESK_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token
    #[arg(long, global = true, env = "GYMDESK_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log level (overrides GYMDESK_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// JSON log lines instead of the pretty console format
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Pretty-print the JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Layer command-line overrides on top of the environment config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.api_url {
            config.client.base_url = url.clone();
        }
        if let Some(token) = &self.token {
            config.client.token = Some(token.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.log_json {
            config.log_json = true;
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Business intelligence overview across all sources
    Bios,

    /// Asset value, depreciation, warranty and maintenance report
    Assets,

    /// Asset transactions with status and type statistics
    Transactions,

    /// Follow-up board and statistics
    Followups,

    /// Lead pipeline statistics
    Leads,

    /// Payment and receipt voucher summaries
    Vouchers,

    /// Production recipe costing and batches
    Production,

    /// Payroll cycles
    #[command(subcommand)]
    Payroll(PayrollCommand),

    /// Follow-up automation workflows
    #[command(subcommand)]
    Workflow(WorkflowCommand),
}

#[derive(Debug, Subcommand)]
pub enum PayrollCommand {
    /// Compute a cycle from the current staff list without submitting it
    Preview(Period),

    /// Compute and submit a cycle
    Generate(Period),

    /// Approve a submitted cycle
    Approve {
        id: String,

        #[arg(long)]
        by: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List past cycles
    History,
}

#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Period {
    /// 1-12, defaults to the current month
    #[arg(long)]
    pub month: Option<u32>,

    /// Defaults to the current year
    #[arg(long)]
    pub year: Option<i32>,
}

impl Period {
    fn resolve(self) -> (u32, i32) {
        let now = chrono::Local::now();
        (self.month.unwrap_or(now.month()), self.year.unwrap_or(now.year()))
    }
}

#[derive(Debug, Subcommand)]
pub enum WorkflowCommand {
    /// Available triggers and actions
    Templates,

    /// Saved workflows
    List,

    /// Create a workflow through the four-step wizard
    Create(WorkflowArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct WorkflowArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// once, daily, weekly or monthly
    #[arg(long, default_value = "once")]
    pub frequency: String,

    /// Trigger id or label, e.g. `new-member`
    #[arg(long)]
    pub trigger: String,

    /// Action id or label, e.g. `send-email`
    #[arg(long)]
    pub action: String,

    /// Message body, required for messaging actions
    #[arg(long, default_value = "")]
    pub message: String,

    /// Save the workflow as inactive
    #[arg(long)]
    pub inactive: bool,
}

/// Fill the wizard from arguments, walking it step by step to Review
///
/// Unknown template names leave the selection empty so the wizard reports
/// the missing field like the form would.
pub fn fill_wizard(wizard: &mut WorkflowWizard, args: &WorkflowArgs) -> Result<(), WizardError> {
    wizard.set_name(&args.name)?;
    wizard.set_description(&args.description)?;
    wizard.set_frequency(Frequency::parse(&args.frequency))?;
    if args.inactive {
        wizard.set_status(WorkflowStatus::Inactive)?;
    }
    wizard.next()?;

    if let Some(trigger) = TriggerTemplate::find(&args.trigger) {
        wizard.select_trigger(trigger)?;
    }
    wizard.next()?;

    if let Some(action) = ActionTemplate::find(&args.action) {
        wizard.select_action(action)?;
    }
    wizard.set_message(&args.message)?;
    wizard.next()?;

    debug_assert_eq!(wizard.step(), WizardStep::Review);
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<Value> {
    serde_json::to_value(value).context("Failed to serialize output")
}

fn templates() -> Value {
    let triggers: Vec<Value> = TriggerTemplate::ALL
        .iter()
        .map(|t| json!({"id": t.id(), "label": t.label(), "description": t.description()}))
        .collect();
    let actions: Vec<Value> = ActionTemplate::ALL
        .iter()
        .map(|a| json!({"id": a.id(), "label": a.label(), "sendsMessage": a.sends_message()}))
        .collect();
    json!({"triggers": triggers, "actions": actions})
}

/// Turn a wizard failure into an error naming the offending fields
fn wizard_failure(wizard: &WorkflowWizard, err: WizardError) -> anyhow::Error {
    let fields: Vec<String> = wizard
        .errors()
        .iter()
        .map(|(field, message)| format!("{}: {message}", field.key()))
        .collect();
    let err = anyhow::Error::from(AppError::from(err));
    if fields.is_empty() {
        err
    } else {
        err.context(fields.join("; "))
    }
}

/// Run one command against the service
pub async fn run<H: HttpClient>(command: &Command, service: &DashboardService<H>) -> anyhow::Result<Value> {
    match command {
        Command::Bios => to_json(&service.bios().await),
        Command::Assets => to_json(&service.asset_report().await),
        Command::Transactions => to_json(&service.transactions().await),
        Command::Followups => to_json(&service.followups().await.context("Failed to load follow-ups")?),
        Command::Leads => to_json(&service.leads().await.context("Failed to load leads")?),
        Command::Vouchers => to_json(&service.vouchers().await.context("Failed to load vouchers")?),
        Command::Production => {
            to_json(&service.production().await.context("Failed to load production")?)
        }
        Command::Payroll(cmd) => match cmd {
            PayrollCommand::Preview(period) => {
                let (month, year) = period.resolve();
                to_json(&service.payroll_preview(month, year).await?)
            }
            PayrollCommand::Generate(period) => {
                let (month, year) = period.resolve();
                Ok(service.generate_payroll(month, year).await?)
            }
            PayrollCommand::Approve { id, by, notes } => {
                let approval = PayrollApprove {
                    approved_by: by.clone(),
                    notes: notes.clone(),
                };
                Ok(service.approve_payroll(id, &approval).await?)
            }
            PayrollCommand::History => {
                to_json(&service.payroll_history().await.context("Failed to load payroll history")?)
            }
        },
        Command::Workflow(cmd) => match cmd {
            WorkflowCommand::Templates => Ok(templates()),
            WorkflowCommand::List => to_json(
                &service
                    .client()
                    .workflows()
                    .list()
                    .await
                    .context("Failed to load workflows")?,
            ),
            WorkflowCommand::Create(args) => {
                let mut wizard = WorkflowWizard::new();
                if let Err(e) = fill_wizard(&mut wizard, args) {
                    return Err(wizard_failure(&wizard, e));
                }
                match service.save_workflow(&mut wizard).await {
                    Ok(saved) => to_json(&saved),
                    Err(AppError::Wizard(e)) => Err(wizard_failure(&wizard, e)),
                    Err(e) => Err(e.into()),
                }
            }
        },
    }
}
