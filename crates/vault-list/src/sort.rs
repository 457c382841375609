//! Ordering of vault records

use std::cmp::Ordering;

use vault_core::VaultRecord;

use crate::state::{SortDirection, SortField};

/// Compare two records on `field`, reversed for `Desc`.
///
/// There is no secondary key; equal records are left to the (stable) sort.
pub fn compare(
    a: &VaultRecord,
    b: &VaultRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let base = field.key(a).cmp(&field.key(b));
    match direction {
        SortDirection::Asc => base,
        SortDirection::Desc => base.reverse(),
    }
}

/// Sorted copy of `records`; ties keep their input order.
pub fn sorted(
    records: &[VaultRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<VaultRecord> {
    let mut out = records.to_vec();
    sort_in_place(&mut out, field, direction);
    out
}

pub(crate) fn sort_in_place(records: &mut [VaultRecord], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| compare(a, b, field, direction));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault(id: u64, amount: u64) -> VaultRecord {
        VaultRecord {
            id,
            amount,
            unlock_height: 1_000 - id,
            created_at: 10 * id,
            is_withdrawn: false,
            current_block_height: 0,
            label: None,
        }
    }

    fn ids(records: &[VaultRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_amount_ordering() {
        let records = vec![vault(3, 3000), vault(1, 1000), vault(2, 2000)];
        assert_eq!(
            ids(&sorted(&records, SortField::Amount, SortDirection::Asc)),
            vec![1, 2, 3]
        );
        assert_eq!(
            ids(&sorted(&records, SortField::Amount, SortDirection::Desc)),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn test_default_id_ordering() {
        let records = vec![vault(3, 3000), vault(1, 1000), vault(2, 2000)];
        assert_eq!(
            ids(&sorted(&records, SortField::default(), SortDirection::default())),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_height_fields() {
        let records = vec![vault(1, 0), vault(3, 0), vault(2, 0)];
        // unlock_height = 1000 - id, so ascending unlock is descending id
        assert_eq!(
            ids(&sorted(&records, SortField::UnlockHeight, SortDirection::Asc)),
            vec![3, 2, 1]
        );
        assert_eq!(
            ids(&sorted(&records, SortField::CreatedAt, SortDirection::Asc)),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![vault(4, 500), vault(2, 500), vault(9, 100), vault(1, 500)];
        assert_eq!(
            ids(&sorted(&records, SortField::Amount, SortDirection::Asc)),
            vec![9, 4, 2, 1]
        );
        assert_eq!(
            ids(&sorted(&records, SortField::Amount, SortDirection::Desc)),
            vec![4, 2, 1, 9]
        );
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let records = vec![vault(3, 3000), vault(1, 1000)];
        let _ = sorted(&records, SortField::Id, SortDirection::Asc);
        assert_eq!(ids(&records), vec![3, 1]);
    }

    #[test]
    fn test_compare_direction() {
        let (a, b) = (vault(1, 10), vault(2, 20));
        assert_eq!(compare(&a, &b, SortField::Amount, SortDirection::Asc), Ordering::Less);
        assert_eq!(compare(&a, &b, SortField::Amount, SortDirection::Desc), Ordering::Greater);
        assert_eq!(compare(&a, &a, SortField::Amount, SortDirection::Desc), Ordering::Equal);
    }
}
