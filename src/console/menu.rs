//! The interactive menu loop.
//!
//! A thin command loop over the roster API: it reads a numbered choice,
//! prompts for the fields of the chosen operation, forwards validated
//! values to the roster, and prints the outcome. The loop is generic over
//! [`BufRead`] and [`Write`] so integration tests can script whole
//! sessions; end of input exits the loop cleanly.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::RosterPolicy;
use crate::roster::Roster;

use super::input::{
    prompt_decimal_at_least, prompt_decimal_in_range, prompt_line, prompt_nonempty_line,
    prompt_parsed,
};
use super::report::{format_employee, trend_message, write_listing};

const MENU: &str = "--------------------------------\n\
                    1. Add Employee\n\
                    2. Remove Employee\n\
                    3. List Employees\n\
                    4. Update Employee Performance\n\
                    5. Update Employee Work and Salary\n\
                    6. Compare and Report\n\
                    7. List by Efficiency\n\
                    8. Add Completed Work\n\
                    9. Search Employee\n\
                    0. Exit\n\
                    --------------------------------";

/// Runs the menu loop until the operator exits or input ends.
///
/// # Example
///
/// ```
/// use roster_engine::console::menu;
/// use roster_engine::roster::Roster;
/// use std::io::Cursor;
///
/// let mut roster = Roster::new();
/// let mut input = Cursor::new("3\n0\n");
/// let mut output = Vec::new();
///
/// menu::run(&mut roster, &mut input, &mut output).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("Exiting."));
/// ```
pub fn run<R: BufRead, W: Write>(
    roster: &mut Roster,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(writer, "{MENU}")?;

        let Some(choice) =
            prompt_parsed::<u32, _, _>(reader, writer, "Enter your choice (0-9): ")?
        else {
            break;
        };

        let outcome = match choice {
            0 => {
                writeln!(writer, "Exiting.")?;
                break;
            }
            1 => handle_add(roster, reader, writer)?,
            2 => handle_remove(roster, reader, writer)?,
            3 => handle_list(roster, writer).map(Some)?,
            4 => handle_update_performance(roster, reader, writer)?,
            5 => handle_update_work_and_salary(roster, reader, writer)?,
            6 => handle_compare(roster, reader, writer)?,
            7 => handle_list_by_efficiency(roster, writer).map(Some)?,
            8 => handle_add_completed_work(roster, reader, writer)?,
            9 => handle_search(roster, reader, writer)?,
            _ => {
                writeln!(writer, "Invalid choice. Please try again.")?;
                Some(())
            }
        };

        if outcome.is_none() {
            break;
        }
    }
    Ok(())
}

fn handle_add<R: BufRead, W: Write>(
    roster: &mut Roster,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<()>> {
    let policy: RosterPolicy = roster.policy().clone();

    let Some(name) = prompt_nonempty_line(reader, writer, "Employee name: ")? else {
        return Ok(None);
    };
    let hours_prompt = format!(
        "Weekly work hours ({}-{}): ",
        policy.min_weekly_hours.normalize(),
        policy.max_weekly_hours.normalize()
    );
    let Some(hours) = prompt_decimal_in_range(
        reader,
        writer,
        &hours_prompt,
        policy.min_weekly_hours,
        policy.max_weekly_hours,
    )?
    else {
        return Ok(None);
    };
    let salary_prompt = format!("Salary (minimum {}): ", policy.min_salary.normalize());
    let Some(salary) = prompt_decimal_at_least(reader, writer, &salary_prompt, policy.min_salary)?
    else {
        return Ok(None);
    };
    let Some(completed_work) =
        prompt_parsed::<Decimal, _, _>(reader, writer, "Completed work: ")?
    else {
        return Ok(None);
    };

    match roster.add(name.clone(), hours, salary, completed_work) {
        Ok(id) => {
            info!(id, name = %name, "employee added");
            writeln!(writer, "Employee added: {name} (ID {id})")?;
        }
        Err(err) => {
            warn!(%err, "add rejected");
            writeln!(writer, "{err}")?;
        }
    }
    Ok(Some(()))
}

fn handle_remove<R: BufRead, W: Write>(
    roster: &mut Roster,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<()>> {
    let Some(id) = prompt_parsed::<u32, _, _>(
        reader,
        writer,
        "Enter the ID of the employee to remove: ",
    )?
    else {
        return Ok(None);
    };

    match roster.remove(id) {
        Ok(removed) => {
            info!(id, name = removed.name(), "employee removed");
            writeln!(writer, "Employee removed: ID {id}")?;
        }
        Err(err) => writeln!(writer, "{err}")?,
    }
    Ok(Some(()))
}

fn handle_list<W: Write>(roster: &Roster, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Employee List:")?;
    write_listing(writer, roster.iter())?;
    Ok(())
}

fn handle_update_performance<R: BufRead, W: Write>(
    roster: &mut Roster,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<()>> {
    let Some(id) = prompt_parsed::<u32, _, _>(
        reader,
        writer,
        "Enter the ID of the employee to update: ",
    )?
    else {
        return Ok(None);
    };
    let Some(points) = prompt_parsed::<i64, _, _>(
        reader,
        writer,
        "Enter the extra performance points to add: ",
    )?
    else {
        return Ok(None);
    };

    match roster.add_performance_points(id, points) {
        // the rating itself is untouched by extra points; the label below
        // reports the (unchanged) rating alongside the grown counter
        Ok(employee) => {
            info!(id, points, "extra performance points added");
            writeln!(
                writer,
                "Extra performance points added: ID {id}, New Performance Rating: {}",
                employee.performance_rating()
            )?;
        }
        Err(err) => writeln!(writer, "{err}")?,
    }
    Ok(Some(()))
}

fn handle_update_work_and_salary<R: BufRead, W: Write>(
    roster: &mut Roster,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<()>> {
    let Some(id) = prompt_parsed::<u32, _, _>(
        reader,
        writer,
        "Enter the ID of the employee to update: ",
    )?
    else {
        return Ok(None);
    };
    let Some(hours) = prompt_parsed::<Decimal, _, _>(
        reader,
        writer,
        "Enter the new weekly work hours: ",
    )?
    else {
        return Ok(None);
    };
    let Some(salary) =
        prompt_parsed::<Decimal, _, _>(reader, writer, "Enter the new salary: ")?
    else {
        return Ok(None);
    };

    // updates clamp silently rather than re-prompting
    match roster.update_work_and_salary(id, hours, salary) {
        Ok(employee) => {
            info!(id, "work hours and salary updated");
            writeln!(
                writer,
                "Employee work hours and salary updated: ID {id}, New Weekly Work Hours: {}, New Salary: {}",
                employee.weekly_work_hours().normalize(),
                employee.salary().normalize()
            )?;
        }
        Err(err) => {
            warn!(id, %err, "update rejected");
            writeln!(writer, "{err}")?;
        }
    }
    Ok(Some(()))
}

fn handle_compare<R: BufRead, W: Write>(
    roster: &Roster,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<()>> {
    let Some(id) = prompt_parsed::<u32, _, _>(
        reader,
        writer,
        "Enter the ID of the employee to compare: ",
    )?
    else {
        return Ok(None);
    };
    let Some(prior_hours) = prompt_parsed::<Decimal, _, _>(
        reader,
        writer,
        "Enter the old weekly work hours: ",
    )?
    else {
        return Ok(None);
    };
    let Some(prior_salary) =
        prompt_parsed::<Decimal, _, _>(reader, writer, "Enter the old salary: ")?
    else {
        return Ok(None);
    };

    match roster.compare_against_baseline(id, prior_hours, prior_salary) {
        Ok(report) => writeln!(writer, "{}", trend_message(report.trend))?,
        Err(err) => writeln!(writer, "{err}")?,
    }
    Ok(Some(()))
}

fn handle_list_by_efficiency<W: Write>(roster: &mut Roster, writer: &mut W) -> io::Result<()> {
    roster.sort_by_efficiency();
    handle_list(roster, writer)
}

fn handle_add_completed_work<R: BufRead, W: Write>(
    roster: &mut Roster,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<()>> {
    let Some(id) = prompt_parsed::<u32, _, _>(
        reader,
        writer,
        "Enter the ID of the employee to add completed work: ",
    )?
    else {
        return Ok(None);
    };
    let Some(amount) =
        prompt_parsed::<Decimal, _, _>(reader, writer, "Enter the completed work units: ")?
    else {
        return Ok(None);
    };

    match roster.add_completed_work(id, amount) {
        Ok(_) => {
            info!(id, %amount, "completed work added");
            writeln!(
                writer,
                "Completed work added for employee ID {id}: {} units.",
                amount.normalize()
            )?;
        }
        Err(err) => writeln!(writer, "{err}")?,
    }
    Ok(Some(()))
}

fn handle_search<R: BufRead, W: Write>(
    roster: &Roster,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<()>> {
    // the empty term is a valid search that matches every employee
    let Some(term) = prompt_line(
        reader,
        writer,
        "Enter the name (or part of the name) to search: ",
    )?
    else {
        return Ok(None);
    };

    let count = write_listing(writer, roster.search(&term))?;
    if count == 0 {
        writeln!(
            writer,
            "No employee found with a name containing \"{term}\"."
        )?;
    }
    Ok(Some(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(roster: &mut Roster, script: &str) -> String {
        let mut reader = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(roster, &mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_then_list_round_trip() {
        let mut roster = Roster::new();

        let transcript = run_session(
            &mut roster,
            "1\nAlice\n40\n20000\n10\n3\n0\n",
        );

        assert!(transcript.contains("Employee added: Alice (ID 1)"));
        assert!(transcript.contains("ID: 1, Name: Alice, Performance Rating: 25"));
        assert!(transcript.contains("Exiting."));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_malformed_choice_recovers_and_reprompts() {
        let mut roster = Roster::new();

        let transcript = run_session(&mut roster, "banana\n3\n0\n");

        assert!(transcript.contains("Invalid input, try again."));
        assert!(transcript.contains("Employee List:"));
    }

    #[test]
    fn test_out_of_range_choice_reports_invalid() {
        let mut roster = Roster::new();

        let transcript = run_session(&mut roster, "12\n0\n");

        assert!(transcript.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_add_reprompts_until_hours_within_bounds() {
        let mut roster = Roster::new();

        run_session(&mut roster, "1\nAlice\n95\n40\n20000\n10\n0\n");

        assert_eq!(roster.len(), 1);
        assert_eq!(
            roster.get(1).unwrap().weekly_work_hours(),
            Decimal::from(40)
        );
    }

    #[test]
    fn test_remove_unknown_id_prints_not_found() {
        let mut roster = Roster::new();

        let transcript = run_session(&mut roster, "2\n5\n0\n");

        assert!(transcript.contains("Employee not found: 5"));
    }

    #[test]
    fn test_search_without_match_prints_no_match_line() {
        let mut roster = Roster::new();
        roster
            .add("Alice", Decimal::from(40), Decimal::from(20000), Decimal::from(10))
            .unwrap();

        let transcript = run_session(&mut roster, "9\nZelda\n0\n");

        assert!(transcript.contains("No employee found with a name containing \"Zelda\"."));
    }

    #[test]
    fn test_eof_mid_prompt_exits_cleanly() {
        let mut roster = Roster::new();

        let transcript = run_session(&mut roster, "1\nAlice\n");

        // the session ends without an employee and without a panic
        assert!(transcript.contains("Weekly work hours"));
        assert!(roster.is_empty());
    }
}
