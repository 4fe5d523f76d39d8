//! Weekly shift scheduling: a roster of employees with per-day shift
//! preferences is turned into a schedule that staffs every shift of the week,
//! then checked against the staffing constraints.
//!
//! Generation is deterministic and runs in three passes: preferences first,
//! then a bounded fill/shed loop that moves the grid toward the configured
//! staffing level, then a sweep that hands leftover capacity to whatever is
//! still understaffed.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use colored::Colorize;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid roster JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid config TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("unknown day name: '{0}'")]
    UnknownDay(String),

    #[error("unknown shift name: '{0}'")]
    UnknownShift(String),

    #[error("at least {min} employees are required, got {got}")]
    NotEnoughEmployees { min: usize, got: usize },
}

// ---------------------------------------------------------------------------
// Days and shifts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.label() == s)
            .ok_or_else(|| ScheduleError::UnknownDay(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shift::ALL
            .into_iter()
            .find(|shift| shift.label() == s)
            .ok_or_else(|| ScheduleError::UnknownShift(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Employees and the roster
// ---------------------------------------------------------------------------

/// An employee: their shift preferences and, once a schedule has been
/// generated, their assignments. At most one shift per day.
#[derive(Debug, Clone)]
pub struct Employee {
    name: String,
    preferences: BTreeMap<Day, Shift>,
    assignments: BTreeMap<Day, Shift>,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
            assignments: BTreeMap::new(),
        }
    }

    pub fn add_preference(&mut self, day: Day, shift: Shift) {
        self.preferences.insert(day, shift);
    }

    pub fn preference(&self, day: Day) -> Option<Shift> {
        self.preferences.get(&day).copied()
    }

    pub fn preferences(&self) -> &BTreeMap<Day, Shift> {
        &self.preferences
    }

    pub fn assignments(&self) -> &BTreeMap<Day, Shift> {
        &self.assignments
    }

    /// Take a shift on `day`; refused if the day already has one.
    pub fn assign(&mut self, day: Day, shift: Shift) -> bool {
        if self.assignments.contains_key(&day) {
            return false;
        }
        self.assignments.insert(day, shift);
        true
    }

    fn unassign(&mut self, day: Day) {
        self.assignments.remove(&day);
    }

    pub fn is_available(&self, day: Day) -> bool {
        !self.assignments.contains_key(&day)
    }

    pub fn working_days(&self) -> usize {
        self.assignments.len()
    }

    pub fn can_work_more(&self, max_days: usize) -> bool {
        self.assignments.len() < max_days
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// On-disk roster document: `{"employees": {name: {day: shift, ...}, ...}}`.
#[derive(Debug, Deserialize)]
struct RosterDoc {
    employees: BTreeMap<String, BTreeMap<String, String>>,
}

/// The employee list a schedule is generated from. Employees are kept in
/// name order, which makes generation deterministic.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn from_json_str(text: &str) -> Result<Self, ScheduleError> {
        let doc: RosterDoc = serde_json::from_str(text)?;
        let mut roster = Roster::new();
        for (name, preferences) in doc.employees {
            let mut employee = Employee::new(name);
            for (day, shift) in preferences {
                employee.add_preference(day.parse()?, shift.parse()?);
            }
            roster.push(employee);
        }
        Ok(roster)
    }

    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let text = fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    fn into_employees(self) -> Vec<Employee> {
        self.employees
    }

    /// Input-data report: every employee with their preference for each day
    /// of the week, "None" where they stated none.
    pub fn render_input(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(80));
        let _ = writeln!(out, "EMPLOYEE SCHEDULER - INPUT DATA");
        let _ = writeln!(out, "{}", "=".repeat(80));

        for (i, employee) in self.employees.iter().enumerate() {
            let _ = writeln!(out, "\nEmployee {}: {}", i + 1, employee.name());
            let _ = writeln!(out, "Shift Preferences:");
            for day in Day::ALL {
                match employee.preference(day) {
                    Some(shift) => {
                        let _ = writeln!(out, "  {day}: {shift}");
                    }
                    None => {
                        let _ = writeln!(out, "  {day}: None");
                    }
                }
            }
        }

        out
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Staffing rules the generator and validator work against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Employees every shift must end up with.
    pub required_per_shift: usize,
    /// Most days any one employee may work in the week.
    pub max_days_per_week: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            required_per_shift: 2,
            max_days_per_week: 5,
        }
    }
}

impl ScheduleConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ScheduleError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let text = fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

// ---------------------------------------------------------------------------
// Constraint violations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An employee holds more than one shift on the same day.
    DoubleShift { employee: String, day: Day },
    /// An employee exceeds the weekly day limit.
    TooManyDays { employee: String, days: usize },
    /// A shift is staffed with the wrong number of employees.
    Staffing { day: Day, shift: Shift, count: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DoubleShift { employee, day } => write!(f, "{employee} on {day}"),
            Violation::TooManyDays { employee, days } => write!(f, "{employee}: {days} days"),
            Violation::Staffing { day, shift, count } => {
                write!(f, "{day} {shift}: {count} employees")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// The schedule
// ---------------------------------------------------------------------------

/// A generated weekly schedule: the employees (with their assignments) and
/// the grid of employee indices per day and shift.
#[derive(Debug, Clone)]
pub struct Schedule {
    employees: Vec<Employee>,
    slots: [[Vec<usize>; Shift::ALL.len()]; Day::ALL.len()],
}

impl Schedule {
    /// Generate a schedule for the roster. Needs at least two employees.
    pub fn generate(roster: Roster, config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        if roster.len() < 2 {
            return Err(ScheduleError::NotEnoughEmployees {
                min: 2,
                got: roster.len(),
            });
        }

        let mut schedule = Schedule {
            employees: roster.into_employees(),
            slots: Default::default(),
        };

        schedule.assign_preferences(config);
        schedule.balance_staffing(config);
        schedule.sweep_remaining(config);
        schedule.balance_staffing(config);
        Ok(schedule)
    }

    /// Preference pass: everyone gets their stated shift where the day limit
    /// and one-shift-per-day rule allow. Slots may overfill here; shedding
    /// happens in the balance pass.
    fn assign_preferences(&mut self, config: &ScheduleConfig) {
        for idx in 0..self.employees.len() {
            let preferences: Vec<(Day, Shift)> = self.employees[idx]
                .preferences()
                .iter()
                .map(|(day, shift)| (*day, *shift))
                .collect();

            for (day, shift) in preferences {
                let employee = &mut self.employees[idx];
                if employee.can_work_more(config.max_days_per_week)
                    && employee.is_available(day)
                    && employee.assign(day, shift)
                {
                    self.slots[day as usize][shift as usize].push(idx);
                }
            }
        }
    }

    /// Bounded fill/shed loop: shed surplus beyond the staffing level, then
    /// give each understaffed shift the available employee with the fewest
    /// worked days. Stops when the grid is level or nobody is available.
    fn balance_staffing(&mut self, config: &ScheduleConfig) {
        const MAX_PASSES: usize = 50;

        for _ in 0..MAX_PASSES {
            self.shed_overstaffed(config);

            let understaffed = self.understaffed(config);
            if understaffed.is_empty() {
                break;
            }

            let mut assigned_any = false;
            for (day, shift) in understaffed {
                if self.slots[day as usize][shift as usize].len() >= config.required_per_shift {
                    continue;
                }
                if let Some(idx) = self.best_available(day, config) {
                    self.employees[idx].assign(day, shift);
                    self.slots[day as usize][shift as usize].push(idx);
                    assigned_any = true;
                }
            }

            if !assigned_any {
                break;
            }
        }
    }

    fn shed_overstaffed(&mut self, config: &ScheduleConfig) {
        for day in Day::ALL {
            for shift in Shift::ALL {
                let slot = &mut self.slots[day as usize][shift as usize];
                if slot.len() > config.required_per_shift {
                    let surplus = slot.split_off(config.required_per_shift);
                    for idx in surplus {
                        self.employees[idx].unassign(day);
                    }
                }
            }
        }
    }

    /// Leftover-capacity sweep: anyone still under the day limit picks up at
    /// most one understaffed shift per remaining day.
    fn sweep_remaining(&mut self, config: &ScheduleConfig) {
        for idx in 0..self.employees.len() {
            for day in Day::ALL {
                if !self.employees[idx].can_work_more(config.max_days_per_week) {
                    break;
                }
                if !self.employees[idx].is_available(day) {
                    continue;
                }
                for shift in Shift::ALL {
                    if self.slots[day as usize][shift as usize].len() < config.required_per_shift {
                        self.employees[idx].assign(day, shift);
                        self.slots[day as usize][shift as usize].push(idx);
                        break;
                    }
                }
            }
        }
    }

    fn understaffed(&self, config: &ScheduleConfig) -> Vec<(Day, Shift)> {
        let mut out = Vec::new();
        for day in Day::ALL {
            for shift in Shift::ALL {
                if self.slots[day as usize][shift as usize].len() < config.required_per_shift {
                    out.push((day, shift));
                }
            }
        }
        out
    }

    fn best_available(&self, day: Day, config: &ScheduleConfig) -> Option<usize> {
        (0..self.employees.len())
            .filter(|&idx| {
                let employee = &self.employees[idx];
                employee.can_work_more(config.max_days_per_week) && employee.is_available(day)
            })
            .min_by_key(|&idx| (self.employees[idx].working_days(), idx))
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Names assigned to a shift, in assignment order.
    pub fn assigned_names(&self, day: Day, shift: Shift) -> Vec<&str> {
        self.slots[day as usize][shift as usize]
            .iter()
            .map(|&idx| self.employees[idx].name())
            .collect()
    }

    /// Check the schedule against the staffing rules.
    pub fn violations(&self, config: &ScheduleConfig) -> Vec<Violation> {
        let mut out = Vec::new();

        for (idx, employee) in self.employees.iter().enumerate() {
            for day in Day::ALL {
                let held = Shift::ALL
                    .iter()
                    .filter(|&&shift| self.slots[day as usize][shift as usize].contains(&idx))
                    .count();
                if held > 1 {
                    out.push(Violation::DoubleShift {
                        employee: employee.name().to_string(),
                        day,
                    });
                }
            }
        }

        for employee in &self.employees {
            if employee.working_days() > config.max_days_per_week {
                out.push(Violation::TooManyDays {
                    employee: employee.name().to_string(),
                    days: employee.working_days(),
                });
            }
        }

        for day in Day::ALL {
            for shift in Shift::ALL {
                let count = self.slots[day as usize][shift as usize].len();
                if count != config.required_per_shift {
                    out.push(Violation::Staffing { day, shift, count });
                }
            }
        }

        out
    }

    /// Weekly table: one row per day, one column per shift, "None" for an
    /// empty slot.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(80));
        let _ = writeln!(out, "WEEKLY EMPLOYEE SCHEDULE");
        let _ = writeln!(out, "{}", "=".repeat(80));
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<12} {:<20} {:<20} {:<20}",
            "Day", "Morning", "Afternoon", "Evening"
        );
        let _ = writeln!(out, "{}", "-".repeat(80));

        for day in Day::ALL {
            let cells: Vec<String> = Shift::ALL
                .iter()
                .map(|&shift| {
                    let names = self.assigned_names(day, shift);
                    if names.is_empty() {
                        "None".to_string()
                    } else {
                        names.join(", ")
                    }
                })
                .collect();
            let _ = writeln!(
                out,
                "{:<12} {:<20} {:<20} {:<20}",
                day.label(),
                cells[0],
                cells[1],
                cells[2]
            );
        }

        let _ = writeln!(out);
        let _ = write!(out, "{}", "=".repeat(80));
        out
    }

    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "EMPLOYEE SUMMARY:");
        let _ = writeln!(out, "{}", "-".repeat(40));
        for employee in &self.employees {
            let _ = writeln!(
                out,
                "{}: {} days assigned",
                employee.name(),
                employee.working_days()
            );
        }
        out
    }

    /// Constraint report: each rule either passes (green) or lists its
    /// violations (red), then an overall verdict.
    pub fn render_validation(&self, config: &ScheduleConfig) -> String {
        let violations = self.violations(config);
        let mut out = String::new();
        let _ = writeln!(out, "CONSTRAINT VALIDATION:");
        let _ = writeln!(out, "{}", "-".repeat(40));

        let double_shift: Vec<&Violation> = violations
            .iter()
            .filter(|v| matches!(v, Violation::DoubleShift { .. }))
            .collect();
        if double_shift.is_empty() {
            let _ = writeln!(
                out,
                "{}",
                "No employee works more than 1 shift per day".green()
            );
        } else {
            let _ = writeln!(
                out,
                "{}",
                "VIOLATION: Employees working multiple shifts per day:".red()
            );
            for violation in &double_shift {
                let _ = writeln!(out, "   - {violation}");
            }
        }

        let too_many_days: Vec<&Violation> = violations
            .iter()
            .filter(|v| matches!(v, Violation::TooManyDays { .. }))
            .collect();
        if too_many_days.is_empty() {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "No employee works more than {} days per week",
                    config.max_days_per_week
                )
                .green()
            );
        } else {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "VIOLATION: Employees working more than {} days:",
                    config.max_days_per_week
                )
                .red()
            );
            for violation in &too_many_days {
                let _ = writeln!(out, "   - {violation}");
            }
        }

        let staffing: Vec<&Violation> = violations
            .iter()
            .filter(|v| matches!(v, Violation::Staffing { .. }))
            .collect();
        if staffing.is_empty() {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "All shifts have exactly {} employees",
                    config.required_per_shift
                )
                .green()
            );
        } else {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "VIOLATION: Shifts with incorrect staffing (should have exactly {} employees):",
                    config.required_per_shift
                )
                .red()
            );
            for violation in &staffing {
                let _ = writeln!(out, "   - {violation}");
            }
        }

        let _ = writeln!(out);
        if violations.is_empty() {
            let _ = write!(out, "{}", "ALL CONSTRAINTS SATISFIED!".green().bold());
        } else {
            let _ = write!(
                out,
                "{}",
                format!("{} constraint violations found", violations.len())
                    .red()
                    .bold()
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const SAMPLE_ROSTER: &str = r#"{
        "employees": {
            "Alice": {"Monday": "Morning", "Wednesday": "Afternoon", "Friday": "Evening"},
            "Bob": {"Monday": "Morning", "Tuesday": "Evening", "Thursday": "Morning"},
            "Carmen": {"Tuesday": "Afternoon", "Saturday": "Morning"},
            "Dmitri": {"Wednesday": "Evening", "Sunday": "Afternoon"},
            "Elena": {"Monday": "Afternoon", "Thursday": "Evening", "Saturday": "Evening"},
            "Farid": {"Tuesday": "Morning", "Friday": "Morning"},
            "Grace": {"Wednesday": "Morning", "Sunday": "Morning"},
            "Hugo": {"Thursday": "Afternoon", "Saturday": "Afternoon"},
            "Imani": {"Friday": "Afternoon", "Sunday": "Evening"},
            "Jonas": {"Monday": "Evening", "Wednesday": "Morning"}
        }
    }"#;

    fn sample_roster() -> Roster {
        Roster::from_json_str(SAMPLE_ROSTER).unwrap()
    }

    #[test]
    fn test_day_and_shift_parsing() {
        assert_eq!("Monday".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("Sunday".parse::<Day>().unwrap(), Day::Sunday);
        assert_eq!("Afternoon".parse::<Shift>().unwrap(), Shift::Afternoon);

        assert!(matches!(
            "Funday".parse::<Day>(),
            Err(ScheduleError::UnknownDay(_))
        ));
        assert!(matches!(
            "Night".parse::<Shift>(),
            Err(ScheduleError::UnknownShift(_))
        ));
    }

    #[test]
    fn test_roster_from_json() {
        let roster = sample_roster();
        assert_eq!(roster.len(), 10);

        // BTreeMap keys come out in name order
        let alice = &roster.employees()[0];
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.preference(Day::Monday), Some(Shift::Morning));
        assert_eq!(alice.preference(Day::Tuesday), None);
    }

    #[test]
    fn test_roster_rejects_unknown_day() {
        let bad = r#"{"employees": {"Alice": {"Moonday": "Morning"}}}"#;
        assert!(matches!(
            Roster::from_json_str(bad),
            Err(ScheduleError::UnknownDay(_))
        ));
    }

    #[test]
    fn test_roster_rejects_malformed_json() {
        assert!(matches!(
            Roster::from_json_str("{"),
            Err(ScheduleError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_roster_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_ROSTER.as_bytes()).unwrap();
        let roster = Roster::load(file.path()).unwrap();
        assert_eq!(roster.len(), 10);
    }

    #[test]
    fn test_roster_load_missing_file() {
        let result = Roster::load(Path::new("/nonexistent/roster.json"));
        assert!(matches!(result, Err(ScheduleError::Io { .. })));
    }

    #[test]
    fn test_config_defaults_and_toml() {
        let config = ScheduleConfig::default();
        assert_eq!(config.required_per_shift, 2);
        assert_eq!(config.max_days_per_week, 5);

        let parsed = ScheduleConfig::from_toml_str("required_per_shift = 3\n").unwrap();
        assert_eq!(parsed.required_per_shift, 3);
        assert_eq!(parsed.max_days_per_week, 5);

        assert!(matches!(
            ScheduleConfig::from_toml_str("required_per_shift = \"two\""),
            Err(ScheduleError::InvalidToml(_))
        ));
    }

    #[test]
    fn test_employee_assignment_rules() {
        let mut employee = Employee::new("Alice");
        assert!(employee.assign(Day::Monday, Shift::Morning));
        assert!(!employee.assign(Day::Monday, Shift::Evening));
        assert_eq!(employee.working_days(), 1);
        assert!(!employee.is_available(Day::Monday));
        assert!(employee.is_available(Day::Tuesday));
        assert!(employee.can_work_more(5));

        for day in [Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday] {
            employee.assign(day, Shift::Morning);
        }
        assert_eq!(employee.working_days(), 5);
        assert!(!employee.can_work_more(5));
    }

    #[test]
    fn test_generate_requires_two_employees() {
        let mut roster = Roster::new();
        roster.push(Employee::new("Alone"));
        let result = Schedule::generate(roster, &ScheduleConfig::default());
        assert!(matches!(
            result,
            Err(ScheduleError::NotEnoughEmployees { min: 2, got: 1 })
        ));
    }

    #[test]
    fn test_generate_honors_feasible_preferences() {
        let schedule =
            Schedule::generate(sample_roster(), &ScheduleConfig::default()).unwrap();

        // Alice and Bob both wanted Monday Morning; the slot takes two, so
        // both stated preferences survive generation.
        let names = schedule.assigned_names(Day::Monday, Shift::Morning);
        assert!(names.contains(&"Alice"));
        assert!(names.contains(&"Bob"));
    }

    #[test]
    fn test_generate_respects_hard_rules() {
        let config = ScheduleConfig::default();
        let schedule = Schedule::generate(sample_roster(), &config).unwrap();
        let violations = schedule.violations(&config);

        assert!(
            !violations
                .iter()
                .any(|v| matches!(v, Violation::DoubleShift { .. })),
            "{violations:?}"
        );
        assert!(
            !violations
                .iter()
                .any(|v| matches!(v, Violation::TooManyDays { .. })),
            "{violations:?}"
        );
    }

    #[test]
    fn test_generate_staffs_every_shift_with_enough_people() {
        // 10 employees x 5 days covers the 42 slots of the default week.
        let config = ScheduleConfig::default();
        let schedule = Schedule::generate(sample_roster(), &config).unwrap();
        let violations = schedule.violations(&config);
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = ScheduleConfig::default();
        let first = Schedule::generate(sample_roster(), &config).unwrap();
        let second = Schedule::generate(sample_roster(), &config).unwrap();
        for day in Day::ALL {
            for shift in Shift::ALL {
                assert_eq!(
                    first.assigned_names(day, shift),
                    second.assigned_names(day, shift)
                );
            }
        }
    }

    #[test]
    fn test_violations_on_bad_schedule() {
        // hand-built schedule: one employee doubled up on Monday, nothing
        // else staffed
        let mut alice = Employee::new("Alice");
        alice.assign(Day::Monday, Shift::Morning);
        let schedule = Schedule {
            employees: vec![alice, Employee::new("Bob")],
            slots: {
                let mut slots: [[Vec<usize>; 3]; 7] = Default::default();
                slots[Day::Monday as usize][Shift::Morning as usize] = vec![0];
                slots[Day::Monday as usize][Shift::Evening as usize] = vec![0];
                slots
            },
        };

        let violations = schedule.violations(&ScheduleConfig::default());
        assert!(violations.contains(&Violation::DoubleShift {
            employee: "Alice".to_string(),
            day: Day::Monday,
        }));
        // every one of the 21 shifts is mis-staffed
        let staffing = violations
            .iter()
            .filter(|v| matches!(v, Violation::Staffing { .. }))
            .count();
        assert_eq!(staffing, 21);
    }

    #[test]
    fn test_render_table_shape() {
        let config = ScheduleConfig::default();
        let schedule = Schedule::generate(sample_roster(), &config).unwrap();
        let table = schedule.render_table();
        assert!(table.contains("WEEKLY EMPLOYEE SCHEDULE"));
        for day in Day::ALL {
            assert!(table.contains(day.label()));
        }
    }

    #[test]
    fn test_render_input_lists_missing_preferences_as_none() {
        let mut roster = Roster::new();
        let mut employee = Employee::new("Alice");
        employee.add_preference(Day::Monday, Shift::Morning);
        roster.push(employee);

        let input = roster.render_input();
        assert!(input.contains("Employee 1: Alice"));
        assert!(input.contains("Monday: Morning"));
        assert!(input.contains("Tuesday: None"));
    }

    #[test]
    fn test_render_validation_verdicts() {
        let config = ScheduleConfig::default();
        let schedule = Schedule::generate(sample_roster(), &config).unwrap();
        let report = schedule.render_validation(&config);
        assert!(report.contains("CONSTRAINT VALIDATION:"));
        assert!(report.contains("ALL CONSTRAINTS SATISFIED!"));
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::Staffing {
            day: Day::Friday,
            shift: Shift::Evening,
            count: 1,
        };
        assert_eq!(violation.to_string(), "Friday Evening: 1 employees");
    }
}
