//! Filter construction for the audit query
//!
//! Builds the AND-ed condition list the remote store evaluates:
//! a user condition (exclude SYSTEM, or match exactly one user), optional
//! object-type exclusions, and the created-on cutoff derived from the
//! normalized day-range.

use chrono::{DateTime, Duration, Local, Utc};

use crate::config::{ExportOptions, OutputMode};

/// Attribute holding the acting user's display name
pub const USER_NAME_ATTRIBUTE: &str = "useridname";
/// Attribute holding the target record's type name
pub const OBJECT_TYPE_ATTRIBUTE: &str = "objecttypecode";
/// Attribute holding the audit entry's creation timestamp
pub const CREATED_ON_ATTRIBUTE: &str = "createdon";

/// Display name of the platform's background user, excluded by default
pub const SYSTEM_USER: &str = "SYSTEM";
/// Object type always excluded in compact mode
pub const LOGIN_ATTEMPT_OBJECT_TYPE: &str = "userlogin";

/// Comparison operator for a single condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOperator {
    Equal,
    NotEqual,
    OnOrAfter,
}

/// Value a condition compares against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Timestamp(DateTime<Utc>),
}

/// A single attribute comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub attribute: String,
    pub operator: ConditionOperator,
    pub value: FilterValue,
}

impl Condition {
    fn text(
        attribute: &str,
        operator: ConditionOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            attribute: attribute.to_string(),
            operator,
            value: FilterValue::Text(value.into()),
        }
    }
}

/// The full filter: every condition must hold (logical AND)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub conditions: Vec<Condition>,
}

/// Build the audit filter from validated options.
///
/// `now` is passed in rather than read from the clock so the cutoff is
/// deterministic under test. Options carry a non-positive `days`, so the
/// cutoff `now + days` always lies at or before `now`; a day-range of zero
/// yields a cutoff of exactly `now` (an intentionally empty window).
pub fn build_filter(options: &ExportOptions, now: DateTime<Local>) -> FilterSpec {
    let mut conditions = Vec::new();

    match &options.filter_user {
        None => conditions.push(Condition::text(
            USER_NAME_ATTRIBUTE,
            ConditionOperator::NotEqual,
            SYSTEM_USER,
        )),
        Some(user) => conditions.push(Condition::text(
            USER_NAME_ATTRIBUTE,
            ConditionOperator::Equal,
            user.clone(),
        )),
    }

    match options.mode {
        OutputMode::Detailed => {
            for name in &options.exclude_objects {
                conditions.push(Condition::text(
                    OBJECT_TYPE_ATTRIBUTE,
                    ConditionOperator::NotEqual,
                    name.clone(),
                ));
            }
        }
        OutputMode::Compact => conditions.push(Condition::text(
            OBJECT_TYPE_ATTRIBUTE,
            ConditionOperator::NotEqual,
            LOGIN_ATTEMPT_OBJECT_TYPE,
        )),
    }

    let cutoff = (now + Duration::days(options.days)).with_timezone(&Utc);
    conditions.push(Condition {
        attribute: CREATED_ON_ATTRIBUTE.to_string(),
        operator: ConditionOperator::OnOrAfter,
        value: FilterValue::Timestamp(cutoff),
    });

    FilterSpec { conditions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExportOptions, OutputMode};
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn options() -> ExportOptions {
        ExportOptions {
            url: "https://contoso.crm.example.com".to_string(),
            username: "auditor".to_string(),
            password: "hunter2".to_string(),
            path: PathBuf::from("."),
            filename: "out.csv".to_string(),
            days: -30,
            filter_user: None,
            exclude_objects: Vec::new(),
            mode: OutputMode::Detailed,
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap()
    }

    fn user_conditions(spec: &FilterSpec) -> Vec<&Condition> {
        spec.conditions
            .iter()
            .filter(|c| c.attribute == USER_NAME_ATTRIBUTE)
            .collect()
    }

    #[test]
    fn test_default_filter_excludes_system_user() {
        let spec = build_filter(&options(), fixed_now());

        let users = user_conditions(&spec);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].operator, ConditionOperator::NotEqual);
        assert_eq!(users[0].value, FilterValue::Text(SYSTEM_USER.to_string()));
    }

    #[test]
    fn test_filter_user_replaces_system_exclusion() {
        let mut opts = options();
        opts.filter_user = Some("alice".to_string());
        let spec = build_filter(&opts, fixed_now());

        // Exactly one user condition: match alice, no SYSTEM exclusion
        let users = user_conditions(&spec);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].operator, ConditionOperator::Equal);
        assert_eq!(users[0].value, FilterValue::Text("alice".to_string()));
    }

    #[test]
    fn test_exclusions_become_independent_conditions() {
        let mut opts = options();
        opts.exclude_objects = vec!["a".to_string(), "b".to_string()];
        let spec = build_filter(&opts, fixed_now());

        let excluded: Vec<_> = spec
            .conditions
            .iter()
            .filter(|c| {
                c.attribute == OBJECT_TYPE_ATTRIBUTE
                    && c.operator == ConditionOperator::NotEqual
            })
            .map(|c| &c.value)
            .collect();
        assert_eq!(
            excluded,
            vec![
                &FilterValue::Text("a".to_string()),
                &FilterValue::Text("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_compact_mode_applies_fixed_login_exclusion() {
        let mut opts = options();
        opts.mode = OutputMode::Compact;
        opts.exclude_objects = vec!["ignored".to_string()];
        let spec = build_filter(&opts, fixed_now());

        let excluded: Vec<_> = spec
            .conditions
            .iter()
            .filter(|c| c.attribute == OBJECT_TYPE_ATTRIBUTE)
            .map(|c| &c.value)
            .collect();
        assert_eq!(
            excluded,
            vec![&FilterValue::Text(LOGIN_ATTEMPT_OBJECT_TYPE.to_string())]
        );
    }

    #[test]
    fn test_cutoff_is_days_before_now() {
        let spec = build_filter(&options(), fixed_now());

        let cutoff = spec
            .conditions
            .iter()
            .find(|c| c.attribute == CREATED_ON_ATTRIBUTE)
            .expect("created-on condition");
        assert_eq!(cutoff.operator, ConditionOperator::OnOrAfter);

        let expected = (fixed_now() + Duration::days(-30)).with_timezone(&Utc);
        assert_eq!(cutoff.value, FilterValue::Timestamp(expected));
    }

    #[test]
    fn test_zero_day_range_cutoff_is_now() {
        let mut opts = options();
        opts.days = 0;
        let spec = build_filter(&opts, fixed_now());

        let cutoff = spec
            .conditions
            .iter()
            .find(|c| c.attribute == CREATED_ON_ATTRIBUTE)
            .unwrap();
        assert_eq!(
            cutoff.value,
            FilterValue::Timestamp(fixed_now().with_timezone(&Utc))
        );
    }
}
