//! Console interaction flow.
//!
//! The shell owns one input stream and one output stream and walks through
//! registration, login, footprint inputs, and the final report. Input is read
//! as whitespace-separated tokens, so several answers may share one line.

use crate::aggregator::CAPACITY_NOTICE;
use crate::session::INVALID_CREDENTIALS_NOTICE;
use crate::{
    rules, Admission, Contributor, EducationalResources, Error, FootprintAggregator,
    FootprintReport, GoalStatus, GoalTracker, Result, SessionGate,
};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Raw answers to the three footprint prompts
#[derive(Clone, Debug, PartialEq)]
pub struct FootprintInputs {
    pub transport: String,
    pub energy_kwh: f64,
    pub diet: String,
}

impl FootprintInputs {
    /// One contributor per category, in prompt order
    pub fn contributors(&self) -> [Contributor; 3] {
        [
            Contributor::transport(self.transport.clone()),
            Contributor::energy(self.energy_kwh),
            Contributor::diet(self.diet.clone()),
        ]
    }
}

/// How an interactive session ended
#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    /// Inputs were collected and the report was shown
    Completed {
        total_kg_per_day: f64,
        status: GoalStatus,
    },
    /// The repeated credentials did not match
    LoginRejected,
    /// Input ended before every prompt was answered
    InputClosed,
}

pub struct InteractionShell<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> InteractionShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Run one full session against the given goal target
    ///
    /// Closed input is an outcome, not an error; only I/O failures are
    /// returned as `Err`.
    pub fn run(&mut self, target_kg_per_day: f64) -> Result<SessionOutcome> {
        match self.run_session(target_kg_per_day) {
            Err(Error::InputClosed) => {
                tracing::warn!("Input closed before the session finished");
                Ok(SessionOutcome::InputClosed)
            }
            other => other,
        }
    }

    /// Consume the shell and hand back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn run_session(&mut self, target_kg_per_day: f64) -> Result<SessionOutcome> {
        let mut gate = SessionGate::new();

        writeln!(self.output, "Register a new user.")?;
        let username = self.prompt("Enter username: ")?;
        let password = self.prompt("Enter password: ")?;
        gate.register(username, password);

        writeln!(self.output, "Login.")?;
        let candidate_username = self.prompt("Enter username: ")?;
        let candidate_password = self.prompt("Enter password: ")?;
        if !gate.authenticate(&candidate_username, &candidate_password) {
            writeln!(self.output, "{}", INVALID_CREDENTIALS_NOTICE)?;
            return Ok(SessionOutcome::LoginRejected);
        }

        let inputs = self.collect_inputs()?;

        let mut aggregator = FootprintAggregator::new();
        for contributor in inputs.contributors() {
            self.admit(&mut aggregator, contributor)?;
        }
        let total = aggregator.total_impact();
        tracing::debug!("Total footprint computed: {}", total);

        let report = FootprintReport::new(gate.username().unwrap_or_default(), total);
        writeln!(self.output)?;
        writeln!(self.output, "{}", report)?;

        let mut goal = GoalTracker::default();
        writeln!(self.output, "{}", goal.set_target(target_kg_per_day))?;
        writeln!(self.output, "{}", goal.progress(total))?;
        let status = goal.evaluate(total);

        writeln!(self.output)?;
        writeln!(self.output, "{}", EducationalResources)?;
        self.output.flush()?;

        Ok(SessionOutcome::Completed {
            total_kg_per_day: total,
            status,
        })
    }

    fn collect_inputs(&mut self) -> Result<FootprintInputs> {
        writeln!(self.output, "----- Carbon Footprint Calculator -----")?;
        let transport = self.prompt("Enter your transport method: ")?;
        let energy = self.prompt("Enter your energy usage (e.g., kWh per day): ")?;
        let diet = self.prompt("Enter your dietary habit (vegetarian/meat): ")?;

        Ok(FootprintInputs {
            transport,
            energy_kwh: rules::parse_energy_usage(&energy),
            diet,
        })
    }

    /// Offer a contributor, printing the capacity notice if it is dropped
    fn admit(
        &mut self,
        aggregator: &mut FootprintAggregator,
        contributor: Contributor,
    ) -> Result<Admission> {
        let admission = aggregator.add_contributor(contributor);
        if admission == Admission::CapacityReached {
            writeln!(self.output, "{}", CAPACITY_NOTICE)?;
        }
        Ok(admission)
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.next_token()
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            // Invalid UTF-8 is kept as a replacement character, not an error
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str, target: f64) -> (SessionOutcome, String) {
        run_with_bytes(input.as_bytes(), target)
    }

    fn run_with_bytes(input: &[u8], target: f64) -> (SessionOutcome, String) {
        crate::logging::init_test();

        let mut shell = InteractionShell::new(Cursor::new(input.to_vec()), Vec::new());
        let outcome = shell.run(target).unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_full_transcript_goal_achieved() {
        let (outcome, output) = run_with("alice\npw1\nalice\npw1\nbike\n3.2\nvegetarian\n", 10.0);

        assert_eq!(
            outcome,
            SessionOutcome::Completed {
                total_kg_per_day: 0.0 + 3.2 + 1.0,
                status: GoalStatus::Achieved,
            }
        );

        let expected = "Register a new user.\n\
Enter username: Enter password: Login.\n\
Enter username: Enter password: ----- Carbon Footprint Calculator -----\n\
Enter your transport method: \
Enter your energy usage (e.g., kWh per day): \
Enter your dietary habit (vegetarian/meat): \n\
User Name: alice\n\
Total Carbon Footprint: 4.2 kg CO2/day\n\
Goal set to reduce footprint by 10 kg CO2/day.\n\
Current footprint: 4.2 kg CO2/day.\n\
Goal achieved!\n\
\n\
Educational Resources:\n\
1. Climate Change 101\n\
2. Tips for Sustainable Living\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_keep_working_when_over_target() {
        let (outcome, output) = run_with("alice pw1\nalice pw1\ncar 5.0 meat\n", 5.0);

        assert_eq!(
            outcome,
            SessionOutcome::Completed {
                total_kg_per_day: 9.5,
                status: GoalStatus::KeepWorking,
            }
        );
        assert!(output.contains("Total Carbon Footprint: 9.5 kg CO2/day"));
        assert!(output.contains("Goal set to reduce footprint by 5 kg CO2/day."));
        assert!(output.contains("Keep working towards your goal."));
    }

    #[test]
    fn test_rejected_login_skips_calculation() {
        let (outcome, output) = run_with("alice\npw1\nalice\npw2\nbike\n3.2\nvegetarian\n", 10.0);

        assert_eq!(outcome, SessionOutcome::LoginRejected);
        assert!(output.ends_with("Enter password: Invalid login credentials.\n"));
        assert!(!output.contains("Carbon Footprint Calculator"));
        assert!(!output.contains("Educational Resources"));
    }

    #[test]
    fn test_malformed_energy_counts_as_zero() {
        let (outcome, output) = run_with("a\nb\na\nb\nbus\nplenty\nmeat\n", 10.0);

        assert_eq!(
            outcome,
            SessionOutcome::Completed {
                total_kg_per_day: 4.0,
                status: GoalStatus::Achieved,
            }
        );
        assert!(output.contains("Total Carbon Footprint: 4 kg CO2/day"));
    }

    #[test]
    fn test_unknown_inputs_use_fallbacks() {
        let (outcome, _) = run_with("a\nb\na\nb\nteleport\n0\nketo\n", 1.5);

        assert_eq!(
            outcome,
            SessionOutcome::Completed {
                total_kg_per_day: 1.5,
                status: GoalStatus::Achieved,
            }
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (outcome, _) = run_with("\n\nalice\n\npw1\nalice\npw1\n\ncar\n1\nmeat\n", 10.0);

        assert!(matches!(outcome, SessionOutcome::Completed { .. }));
    }

    #[test]
    fn test_input_closed_mid_session() {
        let (outcome, output) = run_with("alice\npw1\nalice\npw1\ncar\n", 10.0);

        assert_eq!(outcome, SessionOutcome::InputClosed);
        assert!(!output.contains("Total Carbon Footprint"));
    }

    #[test]
    fn test_empty_input_closes_immediately() {
        let (outcome, output) = run_with("", 10.0);

        assert_eq!(outcome, SessionOutcome::InputClosed);
        assert_eq!(output, "Register a new user.\nEnter username: ");
    }

    #[test]
    fn test_inputs_map_to_one_contributor_per_category() {
        let inputs = FootprintInputs {
            transport: "car".into(),
            energy_kwh: 2.0,
            diet: "meat".into(),
        };

        assert_eq!(
            inputs.contributors(),
            [
                Contributor::transport("car"),
                Contributor::energy(2.0),
                Contributor::diet("meat"),
            ]
        );
    }

    #[test]
    fn test_total_just_over_target_is_printed_in_full() {
        let (outcome, output) = run_with("a b a b car 8.004 vegan\n", 11.5);

        assert!(matches!(
            outcome,
            SessionOutcome::Completed {
                status: GoalStatus::KeepWorking,
                ..
            }
        ));
        assert!(output.contains("Goal set to reduce footprint by 11.5 kg CO2/day."));
        assert!(output.contains("Current footprint: 11.504 kg CO2/day.\nKeep working towards your goal."));
    }

    #[test]
    fn test_invalid_utf8_is_an_ordinary_token() {
        let (outcome, output) =
            run_with_bytes(b"al\xffice pw1 al\xffice pw1 bike 3.2 vegetarian\n", 10.0);

        assert_eq!(
            outcome,
            SessionOutcome::Completed {
                total_kg_per_day: 0.0 + 3.2 + 1.0,
                status: GoalStatus::Achieved,
            }
        );
        assert!(output.contains("User Name: al\u{FFFD}ice"));
    }

    #[test]
    fn test_invalid_utf8_mismatch_is_rejected() {
        let (outcome, output) = run_with_bytes(b"al\xffice pw1 alice pw1\n", 10.0);

        assert_eq!(outcome, SessionOutcome::LoginRejected);
        assert!(output.contains(INVALID_CREDENTIALS_NOTICE));
    }

    #[test]
    fn test_dropped_contributor_prints_capacity_notice() {
        let mut shell = InteractionShell::new(Cursor::new(Vec::new()), Vec::new());
        let mut aggregator = FootprintAggregator::with_capacity(1);

        let first = shell
            .admit(&mut aggregator, Contributor::transport("car"))
            .unwrap();
        let second = shell
            .admit(&mut aggregator, Contributor::energy(4.0))
            .unwrap();

        assert_eq!(first, Admission::Accepted);
        assert_eq!(second, Admission::CapacityReached);
        assert_eq!(aggregator.total_impact(), 2.0);
        assert_eq!(
            String::from_utf8(shell.into_output()).unwrap(),
            format!("{}\n", CAPACITY_NOTICE)
        );
    }
}
