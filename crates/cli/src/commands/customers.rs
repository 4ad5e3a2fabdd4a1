//! Customer commands.
//!
//! # Usage
//!
//! ```bash
//! ra-cli customers list
//! ra-cli customers search amal
//! ra-cli customers add --name "Amal Perera" --nic 892345671V --phone 0711234567 --city Colombo
//! ra-cli customers update 12 phoneNumber 0719876543
//! ra-cli customers update 12 address.city Kandy
//! ra-cli customers delete 12
//! ```

use clap::{Args, Subcommand};
use rental_admin::AppState;
use rental_admin::backend::{CustomerField, RecordSource};
use rental_admin::directory::Directory;
use rental_admin::dispatch::{CustomerEditor, create_customer};
use rental_admin::forms::CustomerForm;
use rental_admin_core::CustomerId;

use super::{CommandResult, finish_update, stdout};
use crate::output;

#[derive(Subcommand)]
pub enum CustomerAction {
    /// List all customers
    List,
    /// Search customers by name or NIC
    Search {
        /// Search term; empty lists everyone
        #[arg(default_value = "")]
        term: String,
    },
    /// Show one customer
    Show { id: CustomerId },
    /// Add a customer
    Add(AddCustomer),
    /// Update one field of a customer
    Update {
        id: CustomerId,
        /// Field path, e.g. `name`, `nic`, `phoneNumber`, `address.city`, `lastDealDate`
        field: String,
        value: String,
    },
    /// Soft-delete a customer
    Delete { id: CustomerId },
}

#[derive(Args)]
pub struct AddCustomer {
    #[arg(long)]
    name: String,
    #[arg(long)]
    nic: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    house_no: Option<String>,
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    city: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    first_deal_date: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    last_deal_date: Option<String>,
}

impl AddCustomer {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        let optional = [
            ("email", &self.email),
            ("phoneNumber", &self.phone),
            ("address.houseNo", &self.house_no),
            ("address.street", &self.street),
            ("address.city", &self.city),
            ("firstDealDate", &self.first_deal_date),
            ("lastDealDate", &self.last_deal_date),
        ];
        [("name", self.name.as_str()), ("nic", self.nic.as_str())]
            .into_iter()
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(path, value)| value.as_deref().map(|v| (path, v))),
            )
            .collect()
    }
}

/// Map a form path to the field whose endpoint commits it.
fn committed_field(path: &str) -> Result<CustomerField, Box<dyn std::error::Error>> {
    if path.starts_with("address.") {
        return Ok(CustomerField::Address);
    }
    Ok(path.parse()?)
}

pub async fn run(state: &AppState, action: CustomerAction) -> CommandResult {
    match action {
        CustomerAction::List => {
            let mut directory = Directory::new(state.customers());
            directory.refresh().await?;
            output::customer_table(&mut stdout(), directory.rows())?;
        }
        CustomerAction::Search { term } => {
            let mut directory = Directory::new(state.customers());
            directory.search(term.trim()).await?;
            output::customer_table(&mut stdout(), directory.rows())?;
        }
        CustomerAction::Show { id } => {
            let customer = state.customers().fetch(id).await?;
            output::customer_detail(&mut stdout(), &customer)?;
        }
        CustomerAction::Add(args) => {
            let mut form = CustomerForm::new();
            for (path, value) in args.fields() {
                form.set_field(path, value)?;
            }
            let customer = create_customer(&state.customers(), &mut form).await?;
            output::customer_detail(&mut stdout(), &customer)?;
        }
        CustomerAction::Update { id, field, value } => {
            let committed = committed_field(&field)?;
            let mut editor = CustomerEditor::load(state.customers(), id)
                .await?
                .with_notices(state.notices());
            editor.form_mut().set_field(&field, &value)?;
            let outcome = editor.update(committed).await;
            output::notice(&mut stdout(), editor.notices())?;
            finish_update(outcome)?;
        }
        CustomerAction::Delete { id } => {
            let mut directory = Directory::new(state.customers());
            directory.delete(id).await?;
            tracing::info!(%id, "customer deleted");
        }
    }
    Ok(())
}
