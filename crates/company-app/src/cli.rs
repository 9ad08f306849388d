use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use company_app::{CompanyApp, FormState, Route};
use company_core::{AttachmentSlot, Company, CompanyId, Field, FieldValue};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser)]
#[command(name = "company-admin")]
#[command(about = "Manage company master data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the company API (overrides configuration)
    #[arg(long, global = true, env = "APP__API__BASE_URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List companies, optionally filtered by name, GST or PAN
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one company
    Show { id: String },
    /// Create a company
    Create {
        #[command(flatten)]
        fields: FieldArgs,
        #[command(flatten)]
        files: FileArgs,
    },
    /// Update a company; omitted fields keep their current value
    Update {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
        #[command(flatten)]
        files: FileArgs,
    },
    /// Delete a company
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub support_email: Option<String>,
    #[arg(long)]
    pub billing_email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub pincode: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub gst: Option<String>,
    #[arg(long)]
    pub pan: Option<String>,
    #[arg(long)]
    pub bank_name: Option<String>,
    #[arg(long)]
    pub bank_account: Option<String>,
    #[arg(long)]
    pub ifsc: Option<String>,
    #[arg(long)]
    pub branch: Option<String>,
    #[arg(long)]
    pub signatory: Option<String>,
    /// Active flag (true/false)
    #[arg(long)]
    pub active: Option<bool>,
}

impl FieldArgs {
    fn assignments(self) -> Vec<(Field, FieldValue)> {
        let text = [
            (Field::CompanyName, self.name),
            (Field::CompanyPhoneNumber, self.phone),
            (Field::CompanyEmailId, self.email),
            (Field::SupportEmail, self.support_email),
            (Field::BillingEmail, self.billing_email),
            (Field::CompanyAddress, self.address),
            (Field::Pincode, self.pincode),
            (Field::Website, self.website),
            (Field::GstNumber, self.gst),
            (Field::PanNumber, self.pan),
            (Field::BankName, self.bank_name),
            (Field::BankAccountNumber, self.bank_account),
            (Field::IfscCode, self.ifsc),
            (Field::BranchName, self.branch),
            (Field::AuthorizedSignatoryName, self.signatory),
        ];

        let mut out: Vec<(Field, FieldValue)> = text
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, FieldValue::Text(v))))
            .collect();
        if let Some(active) = self.active {
            out.push((Field::IsActive, FieldValue::Checked(active)));
        }
        out
    }
}

#[derive(Args)]
pub struct FileArgs {
    /// Company logo image
    #[arg(long)]
    pub logo: Option<PathBuf>,
    /// Company seal image
    #[arg(long)]
    pub seal: Option<PathBuf>,
    /// Authorized signature image
    #[arg(long)]
    pub signature: Option<PathBuf>,
}

impl FileArgs {
    fn paths(self) -> Vec<(AttachmentSlot, PathBuf)> {
        [
            (AttachmentSlot::CompanyLogo, self.logo),
            (AttachmentSlot::CompanySeal, self.seal),
            (AttachmentSlot::AuthorizedSignature, self.signature),
        ]
        .into_iter()
        .filter_map(|(slot, path)| path.map(|p| (slot, p)))
        .collect()
    }
}

pub async fn handle_list(app: &mut CompanyApp, search: Option<String>) -> anyhow::Result<()> {
    app.navigate(Route::CompanyList);
    if let (Some(term), Some(vm)) = (search, app.list()) {
        vm.on_search_change(term);
    }

    app.run_until(|app| {
        app.list()
            .map_or(true, |vm| !vm.is_loading && !vm.has_pending_search())
    })
    .await;

    let vm = app.list().context("list view not mounted")?;
    if let Some(err) = &vm.error {
        bail!("{}", err);
    }
    if vm.is_empty() {
        println!("{}", company_app::messages::LIST_EMPTY);
        return Ok(());
    }
    print_table(&vm.items);
    Ok(())
}

fn print_table(items: &[Company]) {
    println!(
        "{:<8} {:<30} {:<28} {:<15} {:<16} {:<11} {}",
        "ID", "Company Name", "Email", "Phone", "GST Number", "PAN Number", "Status"
    );
    for company in items {
        println!(
            "{:<8} {:<30} {:<28} {:<15} {:<16} {:<11} {}",
            company
                .company_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".into()),
            Company::display_or_dash(company.company_name.as_deref()),
            Company::display_or_dash(company.company_email_id.as_deref()),
            Company::display_or_dash(company.company_phone_number.as_deref()),
            Company::display_or_dash(company.gst_number.as_deref()),
            Company::display_or_dash(company.pan_number.as_deref()),
            company.status_label(),
        );
    }
}

async fn load_for_edit(app: &mut CompanyApp, id: String) -> anyhow::Result<()> {
    app.navigate(Route::CompanyEdit(CompanyId::new(id)));
    app.run_until(|app| {
        app.form()
            .map_or(true, |vm| vm.state != FormState::Loading)
    })
    .await;

    let vm = app.form().context("form view not mounted")?;
    if let Some(err) = &vm.error {
        bail!("{}", err);
    }
    Ok(())
}

pub async fn handle_show(app: &mut CompanyApp, id: String) -> anyhow::Result<()> {
    load_for_edit(app, id).await?;

    let vm = app.form().context("form view not mounted")?;
    for field in Field::ALL {
        println!("{:<24} {}", field.wire_name(), vm.form.get(field));
    }
    Ok(())
}

async fn apply_input(app: &mut CompanyApp, fields: FieldArgs, files: FileArgs) -> anyhow::Result<()> {
    let vm = app.form().context("form view not mounted")?;
    for (field, value) in fields.assignments() {
        vm.set_field(field, value);
    }
    for (slot, path) in files.paths() {
        vm.set_file_from_path(slot, &path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
    }
    Ok(())
}

async fn submit_and_wait(app: &mut CompanyApp) -> anyhow::Result<()> {
    let vm = app.form().context("form view not mounted")?;
    vm.submit();
    if vm.state != FormState::Submitting {
        bail!(
            "{}",
            vm.error.clone().unwrap_or_else(|| "Form cannot be submitted".into())
        );
    }

    app.run_until(|app| {
        app.form()
            .map_or(true, |vm| vm.state != FormState::Submitting)
    })
    .await;

    let vm = app.form().context("form view not mounted")?;
    match (&vm.state, &vm.success, &vm.error) {
        (FormState::Success, Some(message), _) => {
            println!("{}", message);
            Ok(())
        }
        (_, _, Some(err)) => bail!("{}", err),
        _ => bail!("{}", company_app::messages::SAVE_FAILED),
    }
}

pub async fn handle_create(app: &mut CompanyApp, fields: FieldArgs, files: FileArgs) -> anyhow::Result<()> {
    app.navigate(Route::CompanyAdd);
    apply_input(app, fields, files).await?;
    submit_and_wait(app).await
}

pub async fn handle_update(
    app: &mut CompanyApp,
    id: String,
    fields: FieldArgs,
    files: FileArgs,
) -> anyhow::Result<()> {
    load_for_edit(app, id).await?;
    apply_input(app, fields, files).await?;
    submit_and_wait(app).await
}

async fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{} [y/N] ", prompt).as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

pub async fn handle_delete(app: &mut CompanyApp, id: String, yes: bool) -> anyhow::Result<()> {
    app.navigate(Route::CompanyList);
    app.run_until(|app| app.list().map_or(true, |vm| !vm.is_loading))
        .await;

    let vm = app.list().context("list view not mounted")?;
    if let Some(err) = &vm.error {
        bail!("{}", err);
    }
    let target = CompanyId::new(id);
    let company = vm
        .items
        .iter()
        .find(|c| c.company_id.as_ref() == Some(&target))
        .cloned()
        .with_context(|| format!("Company {} not found", target))?;

    vm.request_delete(company);
    let prompt = vm.delete_confirmation().unwrap_or_default();
    if !yes && !confirm(&prompt).await? {
        if let Some(vm) = app.list() {
            vm.cancel_delete();
        }
        println!("Cancelled.");
        return Ok(());
    }

    if let Some(vm) = app.list() {
        vm.confirm_delete();
    }
    app.run_until(|app| app.list().map_or(true, |vm| !vm.is_deleting))
        .await;

    let vm = app.list().context("list view not mounted")?;
    if let Some(alert) = vm.alert.take() {
        bail!("{}", alert);
    }
    println!("Deleted company {}", target);
    Ok(())
}
