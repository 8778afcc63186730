//! # Container Grouper
//!
//! Partitions a patient's lab requests by destination container, one group
//! per distinct container id. Each group later becomes exactly one printed
//! label.
//!
//! Rules:
//!
//! - Requests without a resolvable container are dropped.
//! - Groups appear in first-occurrence order of their container id.
//! - Test names within a group keep the original request order, duplicates
//!   included.
//! - Containers with equal ids are one container; the first display name
//!   seen wins.
//!
//! An empty result means "nothing to print" — the caller reports a no-op,
//! not a failure.

use crate::model::{ContainerGroup, LabRequest};

/// Group requests by container id.
pub fn group(requests: &[LabRequest]) -> Vec<ContainerGroup> {
    let mut groups: Vec<ContainerGroup> = Vec::new();

    for request in requests {
        let Some(container) = &request.container else {
            continue;
        };

        match groups.iter_mut().find(|g| g.container.id == container.id) {
            Some(existing) => {
                existing.test_names.push(request.test_name.clone());
                if existing.container.display_name.is_none() {
                    existing.container.display_name = container.display_name.clone();
                }
            }
            None => groups.push(ContainerGroup {
                container: container.clone(),
                test_names: vec![request.test_name.clone()],
            }),
        }
    }

    groups
}

// ============================================================================
// TESTS
// ============================================================================
