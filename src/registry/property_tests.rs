//! Property-Based Tests for Registry Module
//!
//! Uses proptest to check roster invariants under arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::error::RegistryError;
use crate::registry::{seed_activities, ActivityRegistry};

// == Strategies ==
/// Picks a seeded activity name, or one that does not exist
fn activity_name_strategy() -> impl Strategy<Value = String> {
    let mut names: Vec<String> = seed_activities()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    names.push("Underwater Basket Weaving".to_string());
    prop::sample::select(names)
}

/// Small email pool so that collisions with existing rosters are frequent
fn email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-e]{1,2}".prop_map(|local| format!("{}@mergington.edu", local)),
        Just("michael@mergington.edu".to_string()),
        Just("emma@mergington.edu".to_string()),
    ]
}

#[derive(Debug, Clone)]
enum RosterOp {
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

fn roster_op_strategy() -> impl Strategy<Value = RosterOp> {
    prop_oneof![
        (activity_name_strategy(), email_strategy())
            .prop_map(|(activity, email)| RosterOp::Signup { activity, email }),
        (activity_name_strategy(), email_strategy())
            .prop_map(|(activity, email)| RosterOp::Unregister { activity, email }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Rosters track a simple Vec model and never hold the same email twice.
    #[test]
    fn prop_rosters_match_model(ops in prop::collection::vec(roster_op_strategy(), 1..60)) {
        let mut registry = ActivityRegistry::seeded();
        let mut model: HashMap<String, Vec<String>> = seed_activities()
            .into_iter()
            .map(|(name, activity)| (name, activity.participants))
            .collect();

        for op in ops {
            match op {
                RosterOp::Signup { activity, email } => {
                    let result = registry.signup(&activity, &email);
                    match model.get_mut(&activity) {
                        None => prop_assert!(matches!(result, Err(RegistryError::ActivityNotFound(_)))),
                        Some(roster) if roster.contains(&email) => {
                            prop_assert!(matches!(result, Err(RegistryError::ParticipantConflict(_))));
                        }
                        Some(roster) => {
                            prop_assert!(result.is_ok());
                            roster.push(email);
                        }
                    }
                }
                RosterOp::Unregister { activity, email } => {
                    let result = registry.unregister(&activity, &email);
                    match model.get_mut(&activity) {
                        None => prop_assert!(matches!(result, Err(RegistryError::ActivityNotFound(_)))),
                        Some(roster) => match roster.iter().position(|e| *e == email) {
                            Some(idx) => {
                                prop_assert!(result.is_ok());
                                roster.remove(idx);
                            }
                            None => {
                                prop_assert!(matches!(result, Err(RegistryError::ParticipantConflict(_))));
                            }
                        },
                    }
                }
            }
        }

        for (name, activity) in registry.list() {
            let unique: HashSet<&String> = activity.participants.iter().collect();
            prop_assert_eq!(unique.len(), activity.participants.len(), "Duplicate email in {}", name);
            prop_assert_eq!(Some(&activity.participants), model.get(&name));
        }
    }

    // Signing up and then unregistering leaves the roster as it was.
    #[test]
    fn prop_signup_then_unregister_restores_roster(
        activity in activity_name_strategy(),
        local in "[a-z]{3,10}",
    ) {
        let email = format!("{}.new@mergington.edu", local);
        let mut registry = ActivityRegistry::seeded();
        let before = registry.get(&activity).ok().cloned();

        match before {
            Some(before) => {
                registry.signup(&activity, &email).unwrap();
                registry.unregister(&activity, &email).unwrap();
                prop_assert_eq!(registry.get(&activity).unwrap(), &before);
            }
            None => {
                prop_assert!(registry.signup(&activity, &email).is_err());
                prop_assert!(registry.unregister(&activity, &email).is_err());
            }
        }
    }

    // Listing always includes every seeded activity regardless of roster changes.
    #[test]
    fn prop_listing_keeps_all_activities(ops in prop::collection::vec(roster_op_strategy(), 0..30)) {
        let mut registry = ActivityRegistry::seeded();
        for op in ops {
            let _ = match op {
                RosterOp::Signup { activity, email } => registry.signup(&activity, &email),
                RosterOp::Unregister { activity, email } => registry.unregister(&activity, &email),
            };
        }

        let listed: Vec<String> = registry.list().into_iter().map(|(name, _)| name).collect();
        let seeded: Vec<String> = seed_activities().into_iter().map(|(name, _)| name).collect();
        prop_assert_eq!(listed, seeded);
    }
}
