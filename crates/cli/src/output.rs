//! Plain-text rendering of records, notices and the dashboard.

use std::io::{self, Write};

use rental_admin::dashboard::DashboardSnapshot;
use rental_admin::notice::{NoticeKind, Notices};
use rental_admin_core::validation::format_phone_number;
use rental_admin_core::{Customer, Employee};

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("-")
}

fn phone(value: Option<&str>) -> String {
    value.map_or_else(|| "-".to_owned(), format_phone_number)
}

/// One line per customer under a header row.
pub fn customer_table<W: Write>(out: &mut W, customers: &[Customer]) -> io::Result<()> {
    if customers.is_empty() {
        return writeln!(out, "No customers found.");
    }
    writeln!(
        out,
        "{:<6} {:<24} {:<13} {:<13} {:<14} {:<11} {}",
        "ID", "NAME", "NIC", "PHONE", "CITY", "LAST DEAL", "STATUS"
    )?;
    for c in customers {
        writeln!(
            out,
            "{:<6} {:<24} {:<13} {:<13} {:<14} {:<11} {}",
            c.customer_id,
            c.display_name(),
            or_dash(c.nic.as_deref()),
            phone(c.phone_number.as_deref()),
            or_dash(c.city()),
            c.last_deal_date.map_or_else(|| "-".to_owned(), |d| d.to_string()),
            if c.deleted { "Deleted" } else { "Active" },
        )?;
    }
    Ok(())
}

/// One line per employee under a header row.
pub fn employee_table<W: Write>(out: &mut W, employees: &[Employee]) -> io::Result<()> {
    if employees.is_empty() {
        return writeln!(out, "No employees found.");
    }
    writeln!(
        out,
        "{:<6} {:<24} {:<13} {:<9} {:<13} {}",
        "ID", "NAME", "NIC", "ROLE", "PHONE", "EMAIL"
    )?;
    for e in employees {
        writeln!(
            out,
            "{:<6} {:<24} {:<13} {:<9} {:<13} {}",
            e.employee_id,
            e.display_name(),
            or_dash(e.nic.as_deref()),
            e.role.map_or("-", |r| r.as_str()),
            phone(e.phone_number.as_deref()),
            or_dash(e.email.as_deref()),
        )?;
    }
    Ok(())
}

pub fn customer_detail<W: Write>(out: &mut W, c: &Customer) -> io::Result<()> {
    writeln!(out, "Customer #{}", c.customer_id)?;
    writeln!(out, "  Name:       {}", or_dash(c.name.as_deref()))?;
    writeln!(out, "  NIC:        {}", or_dash(c.nic.as_deref()))?;
    writeln!(out, "  Email:      {}", or_dash(c.email.as_deref()))?;
    writeln!(out, "  Phone:      {}", phone(c.phone_number.as_deref()))?;
    let address = c.address.as_ref().map(rental_admin_core::Address::one_line);
    writeln!(out, "  Address:    {}", or_dash(address.as_deref()))?;
    for (label, date) in [("First deal", c.first_deal_date), ("Last deal", c.last_deal_date)] {
        writeln!(
            out,
            "  {:<11} {}",
            format!("{label}:"),
            date.map_or_else(|| "-".to_owned(), |d| d.to_string())
        )?;
    }
    writeln!(out, "  Status:     {}", if c.deleted { "Deleted" } else { "Active" })
}

pub fn employee_detail<W: Write>(out: &mut W, e: &Employee) -> io::Result<()> {
    writeln!(out, "Employee #{}", e.employee_id)?;
    writeln!(out, "  Name:       {}", or_dash(e.name.as_deref()))?;
    writeln!(out, "  NIC:        {}", or_dash(e.nic.as_deref()))?;
    writeln!(out, "  Role:       {}", e.role.map_or("-", |r| r.as_str()))?;
    writeln!(out, "  Username:   {}", or_dash(e.username.as_deref()))?;
    writeln!(out, "  Email:      {}", or_dash(e.email.as_deref()))?;
    writeln!(out, "  Phone:      {}", phone(e.phone_number.as_deref()))?;
    let address = e.address.as_ref().map(rental_admin_core::Address::one_line);
    writeln!(out, "  Address:    {}", or_dash(address.as_deref()))
}

/// The visible notice, if any, prefixed by its kind.
pub fn notice<W: Write>(out: &mut W, notices: &Notices) -> io::Result<()> {
    match notices.visible() {
        Some(n) if n.kind == NoticeKind::Success => writeln!(out, "ok: {}", n.message),
        Some(n) => writeln!(out, "error: {}", n.message),
        None => Ok(()),
    }
}

pub fn dashboard<W: Write>(out: &mut W, s: &DashboardSnapshot) -> io::Result<()> {
    writeln!(out, "Dashboard ({})", s.period)?;
    writeln!(out, "  Customers:         {}", s.total_customers)?;
    writeln!(out, "  Active customers:  {}", s.active_customers)?;
    writeln!(out, "  New this week:     {}", s.new_this_week)?;
    writeln!(out, "  Employees:         {}", s.total_employees)?;

    writeln!(out)?;
    writeln!(out, "Customers by city")?;
    for bucket in &s.locations {
        writeln!(out, "  {:<16} {}", bucket.name, bucket.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Recent customers")?;
    customer_table(out, &s.recent_customers)?;

    writeln!(out)?;
    writeln!(out, "Employees")?;
    employee_table(out, &s.recent_employees)?;

    writeln!(out)?;
    writeln!(out, "Activity by weekday (customers / staff)")?;
    for day in &s.weekdays {
        writeln!(out, "  {:<4} {:>3} / {:>2}", day.day, day.customers, day.staff)?;
    }

    if let (Some(first), Some(last)) = (s.series.first(), s.series.last()) {
        writeln!(out)?;
        writeln!(
            out,
            "Trend: {} on {} -> {} on {} ({} points)",
            first.value,
            first.date,
            last.value,
            last.date,
            s.series.len()
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_table() {
        let customers: Vec<Customer> = serde_json::from_str(
            r#"[{"customerId": 1, "name": "Amal", "nic": "892345671V",
                 "phoneNumber": "0711234567", "address": {"city": "Colombo"}}]"#,
        )
        .unwrap();
        let mut out = Vec::new();
        customer_table(&mut out, &customers).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("ID"));
        assert!(text.contains("071 123 4567"));
        assert!(text.contains("Colombo"));
        assert!(text.contains("Active"));
    }

    #[test]
    fn test_empty_tables() {
        let mut out = Vec::new();
        customer_table(&mut out, &[]).unwrap();
        employee_table(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No customers found.\nNo employees found.\n"
        );
    }

    #[test]
    fn test_employee_detail_has_no_password() {
        let employee: Employee = serde_json::from_str(
            r#"{"employeeId": 2, "name": "Nimal", "role": "Clerk", "password": "hash"}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        employee_detail(&mut out, &employee).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Role:       Clerk"));
        assert!(!text.contains("hash"));
    }
}
