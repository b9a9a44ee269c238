//! Diff engine: converts a client full-state replacement into a minimal
//! add/update/remove delta against a stored baseline.
//!
//! The diff is pure and stateless: identical inputs always produce an
//! identical descriptor, and diffing an application against its own
//! [`to_submission`](crate::models::Application::to_submission) yields an
//! empty descriptor.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{IntegrityError, SubCollection};
use crate::indexer::{CanonicalIndexer, ADDRESS_INDEXER, BENEFICIARY_INDEXER, VEHICLE_INDEXER};
use crate::models::{
    AddedEntities, Application, ApplicationSubmission, EntityPatch, RemovedEntities, Stored,
    Submitted, UpdateDescriptor, UpdatedEntities,
};

/// Raw per-collection outcome, borrowed from the candidate slice.
struct CollectionDelta<'a, Id, T> {
    added: Vec<&'a T>,
    updated: Vec<(Id, &'a T)>,
    removed: Vec<Id>,
}

/// Diff one sub-collection.
///
/// - Candidate items with no id are appended, in candidate order, to `added`.
/// - Candidate items with an id must exist in the baseline; an unknown id is
///   a fail-fast [`IntegrityError`], never silently dropped or added. Known
///   items are compared via the canonical indexer and appended to `updated`
///   only when their keys differ.
/// - Baseline items whose id is absent from the candidate are appended, in
///   baseline order, to `removed`.
fn diff_collection<'a, Id, T>(
    collection: SubCollection,
    baseline: &[Stored<Id, T>],
    candidate: &'a [Submitted<Id, T>],
    indexer: &CanonicalIndexer<T>,
) -> Result<CollectionDelta<'a, Id, T>, IntegrityError>
where
    Id: Copy + Eq + Hash + Into<i64>,
{
    let by_id: HashMap<Id, &Stored<Id, T>> =
        baseline.iter().map(|stored| (stored.id, stored)).collect();

    let mut added = Vec::new();
    let mut updated = Vec::new();
    let mut submitted_ids: HashSet<Id> = HashSet::with_capacity(candidate.len());

    for item in candidate {
        match item.id {
            None => added.push(&item.record),
            Some(id) => {
                submitted_ids.insert(id);
                let existing = by_id.get(&id).ok_or(IntegrityError::UnknownEntity {
                    collection,
                    id: id.into(),
                })?;
                if !indexer.eq(&existing.record, &item.record) {
                    updated.push((id, &item.record));
                }
            }
        }
    }

    let removed = baseline
        .iter()
        .map(|stored| stored.id)
        .filter(|id| !submitted_ids.contains(id))
        .collect();

    Ok(CollectionDelta {
        added,
        updated,
        removed,
    })
}

/// Diff a full-state submission against the baseline aggregate, producing an
/// [`UpdateDescriptor`] targeting the baseline's application id.
///
/// The descriptor cannot express address additions or removals (the address
/// count is fixed), so id-less or missing addresses in the submission
/// contribute nothing; address edits flow through `update.address`.
pub fn diff(
    baseline: &Application,
    candidate: &ApplicationSubmission,
) -> Result<UpdateDescriptor, IntegrityError> {
    let beneficiaries = diff_collection(
        SubCollection::Beneficiaries,
        &baseline.beneficiaries,
        &candidate.beneficiaries,
        &BENEFICIARY_INDEXER,
    )?;
    let address = diff_collection(
        SubCollection::Address,
        &baseline.address,
        &candidate.address,
        &ADDRESS_INDEXER,
    )?;
    let vehicles = diff_collection(
        SubCollection::Vehicles,
        &baseline.vehicles,
        &candidate.vehicles,
        &VEHICLE_INDEXER,
    )?;

    Ok(UpdateDescriptor {
        application_id: baseline.id,
        add: AddedEntities {
            beneficiaries: beneficiaries.added.into_iter().cloned().collect(),
            vehicles: vehicles.added.into_iter().cloned().collect(),
        },
        update: UpdatedEntities {
            beneficiaries: beneficiaries
                .updated
                .into_iter()
                .map(|(id, record)| EntityPatch {
                    id,
                    patch: record.clone().into(),
                })
                .collect(),
            address: address
                .updated
                .into_iter()
                .map(|(id, record)| EntityPatch {
                    id,
                    patch: record.clone().into(),
                })
                .collect(),
            vehicles: vehicles
                .updated
                .into_iter()
                .map(|(id, record)| EntityPatch {
                    id,
                    patch: record.clone().into(),
                })
                .collect(),
        },
        remove: RemovedEntities {
            beneficiaries: beneficiaries.removed,
            vehicles: vehicles.removed,
        },
    })
}
