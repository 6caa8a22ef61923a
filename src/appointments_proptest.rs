// --- File: src/appointments_proptest.rs ---
#[cfg(test)]
mod tests {
    use crate::appointments::{map_appointment, BackendAppointment, ServiceRef};
    use proptest::option;
    use proptest::prelude::*;

    proptest! {
        // The mapper is total: arbitrary combinations of present/absent
        // fields never panic and every display field ends up non-empty.
        #[test]
        fn mapper_never_fails_and_fills_display_fields(
            nested_name in option::of(".*"),
            flat_name in option::of(".*"),
            status in option::of(".*"),
            scheduled_at in option::of(".*"),
        ) {
            let raw = BackendAppointment {
                service: nested_name.clone().map(|name| ServiceRef { id: None, name: Some(name) }),
                service_name: flat_name.clone(),
                scheduled_at: scheduled_at.clone(),
                status,
                ..Default::default()
            };

            let mapped = map_appointment(raw);
            prop_assert!(!mapped.service.is_empty());
            prop_assert!(!mapped.barber.is_empty());
            prop_assert!(!mapped.date.is_empty());
            prop_assert!(!mapped.time.is_empty());
            prop_assert!(!mapped.status.is_empty());
            // Raw timestamp passes through untouched.
            prop_assert_eq!(mapped.scheduled_at, scheduled_at);
        }

        // Resolution order: a non-empty nested name always wins.
        #[test]
        fn non_empty_nested_name_always_wins(
            nested_name in ".+",
            flat_name in option::of(".*"),
        ) {
            let raw = BackendAppointment {
                service: Some(ServiceRef { id: None, name: Some(nested_name.clone()) }),
                service_name: flat_name,
                ..Default::default()
            };

            prop_assert_eq!(map_appointment(raw).service, nested_name);
        }
    }
}
