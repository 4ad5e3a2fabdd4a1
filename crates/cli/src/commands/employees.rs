//! Employee commands.
//!
//! # Usage
//!
//! ```bash
//! ra-cli employees list
//! ra-cli employees add --name "Nimal Silva" --nic 200012345678 --role Clerk \
//!     --phone 0779876543 --email nimal@example.com --username nimal \
//!     --password 'Abc123!@' --confirm-password 'Abc123!@'
//! ra-cli employees update 3 role Delivery
//! ra-cli employees update 3 password 'Xyz789#$' --confirm 'Xyz789#$'
//! ```

use clap::{Args, Subcommand};
use rental_admin::AppState;
use rental_admin::backend::{EmployeeField, RecordSource};
use rental_admin::directory::Directory;
use rental_admin::dispatch::{EmployeeEditor, create_employee};
use rental_admin::forms::EmployeeForm;
use rental_admin_core::EmployeeId;

use super::{CommandResult, finish_update, stdout};
use crate::output;

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// List all employees
    List,
    /// Search employees by name or NIC
    Search {
        #[arg(default_value = "")]
        term: String,
    },
    /// Show one employee
    Show { id: EmployeeId },
    /// Add an employee
    Add(AddEmployee),
    /// Update one field of an employee
    Update {
        id: EmployeeId,
        /// Field path, e.g. `name`, `role`, `email`, `password`, `address.street`
        field: String,
        value: String,
        /// Password confirmation, required when updating `password`
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Soft-delete an employee
    Delete { id: EmployeeId },
}

#[derive(Args)]
pub struct AddEmployee {
    #[arg(long)]
    name: String,
    #[arg(long)]
    nic: String,
    /// Manager, Admin, Clerk or Delivery
    #[arg(long, default_value = "Manager")]
    role: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
    #[arg(long)]
    house_no: Option<String>,
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    city: Option<String>,
}

impl AddEmployee {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        let address = [
            ("address.houseNo", &self.house_no),
            ("address.street", &self.street),
            ("address.city", &self.city),
        ];
        [
            ("name", self.name.as_str()),
            ("nic", self.nic.as_str()),
            ("role", self.role.as_str()),
            ("phoneNumber", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("confirmPassword", self.confirm_password.as_str()),
        ]
        .into_iter()
        .chain(
            address
                .into_iter()
                .filter_map(|(path, value)| value.as_deref().map(|v| (path, v))),
        )
        .collect()
    }
}

fn committed_field(path: &str) -> Result<EmployeeField, Box<dyn std::error::Error>> {
    if path.starts_with("address.") {
        return Ok(EmployeeField::Address);
    }
    Ok(path.parse()?)
}

pub async fn run(state: &AppState, action: EmployeeAction) -> CommandResult {
    match action {
        EmployeeAction::List => {
            let mut directory = Directory::new(state.employees());
            directory.refresh().await?;
            output::employee_table(&mut stdout(), directory.rows())?;
        }
        EmployeeAction::Search { term } => {
            let mut directory = Directory::new(state.employees());
            directory.search(term.trim()).await?;
            output::employee_table(&mut stdout(), directory.rows())?;
        }
        EmployeeAction::Show { id } => {
            let employee = state.employees().fetch(id).await?;
            output::employee_detail(&mut stdout(), &employee)?;
        }
        EmployeeAction::Add(args) => {
            let mut form = EmployeeForm::new();
            for (path, value) in args.fields() {
                form.set_field(path, value)?;
            }
            tracing::debug!(progress = form.progress(), "employee form filled");
            let employee = create_employee(&state.employees(), &mut form).await?;
            output::employee_detail(&mut stdout(), &employee)?;
        }
        EmployeeAction::Update {
            id,
            field,
            value,
            confirm,
        } => {
            let committed = committed_field(&field)?;
            let mut editor = EmployeeEditor::load(state.employees(), id)
                .await?
                .with_notices(state.notices());
            editor.form_mut().set_field(&field, &value)?;
            if let Some(confirm) = confirm {
                editor.form_mut().set_field("confirmPassword", &confirm)?;
            }
            let outcome = editor.update(committed).await;
            output::notice(&mut stdout(), editor.notices())?;
            finish_update(outcome)?;
        }
        EmployeeAction::Delete { id } => {
            let mut directory = Directory::new(state.employees());
            directory.delete(id).await?;
            tracing::info!(%id, "employee deleted");
        }
    }
    Ok(())
}
