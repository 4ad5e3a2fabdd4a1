//! Dashboard command.

use chrono::Local;
use rental_admin::AppState;
use rental_admin::dashboard::{Period, load_dashboard};

use super::{CommandResult, stdout};
use crate::output;

pub async fn run(state: &AppState, period: Period) -> CommandResult {
    let today = Local::now().date_naive();
    let mut rng = rand::rng();
    let snapshot = load_dashboard(
        &state.customers(),
        &state.employees(),
        period,
        today,
        &mut rng,
    )
    .await?;
    output::dashboard(&mut stdout(), &snapshot)?;
    Ok(())
}
