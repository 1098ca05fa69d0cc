//! Command-line argument definitions for the event manager
//!
//! The tool takes no arguments: everything it needs comes from files in the
//! working directory or the `EVENT_MANAGER_*` environment variables. The
//! parser still exists so `--help` and `--version` behave as expected and
//! stray arguments are rejected instead of silently ignored.

use clap::Parser;

/// CLI arguments for the event manager
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "event-manager",
    version,
    about = "Write personalised thank-you letters for event attendees and report peak registration times",
    long_about = "Reads the attendee export, looks up each attendee's legislators by postal code, \
                  writes one thank-you letter per attendee and a report of the busiest registration \
                  hours and weekdays.\n\n\
                  Inputs and outputs default to event_attendees.csv, secret.key, form_letter.html, \
                  output/ and peak_registration_times.txt in the working directory. Override them with \
                  EVENT_MANAGER_ATTENDEES, EVENT_MANAGER_SECRET_KEY, EVENT_MANAGER_TEMPLATE, \
                  EVENT_MANAGER_OUTPUT_DIR and EVENT_MANAGER_REPORT. Set RUST_LOG to change log verbosity."
)]
pub struct Args {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_no_arguments_accepted() {
        assert!(Args::try_parse_from(["event-manager"]).is_ok());
        assert!(Args::try_parse_from(["event-manager", "attendees.csv"]).is_err());
        assert!(Args::try_parse_from(["event-manager", "--verbose"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }
}
